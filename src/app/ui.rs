use super::style::{
    ListTheme, CONTENT_PADDING, DELETE_SIDE, DROP_SHADOW, ROW_GAP, ROW_HEIGHT,
};
use super::{can_begin_interaction, ListApp};
use crate::drag::{placeholder_slot, DragSession};
use crate::menu::MENU_SIZE;
use crate::session::{GestureSignal, InteractionSession};
use crate::store::ItemId;
use eframe::egui;
use eframe::egui::text::{CCursor, CCursorRange};
use std::time::{Duration, Instant};

#[derive(Clone, Copy)]
enum EditAction {
    Commit,
    Cancel,
}

impl eframe::App for ListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = ListTheme::default();

        self.handle_menu_dismissal(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_add_row(ui, ctx);
            ui.add_space(ROW_GAP);
            self.draw_list(ui, ctx, &theme);
        });

        self.advance_session(ctx);
        self.draw_context_menu(ctx);
        self.draw_drag_overlay(ctx, &theme);
        self.draw_warning_overlay(ctx, &theme);
        self.track_window_geometry(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.save();
    }
}

impl ListApp {
    fn draw_add_row(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.add_space(CONTENT_PADDING);
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.new_item_text)
                .hint_text("Add an item")
                .desired_width(f32::INFINITY),
        );
        if response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.add_item();
            response.request_focus();
        }
    }

    fn draw_list(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, theme: &ListTheme) {
        self.row_rects.clear();
        self.list_rect = ui.available_rect_before_wrap();
        let list_width = self.list_rect.width().max(160.0);

        if self.store.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(theme.hint_text, "No items yet");
            });
            return;
        }

        let dragged = self
            .session
            .as_ref()
            .and_then(|s| s.drag.as_ref())
            .map(|d| d.item);
        let placeholder = self
            .session
            .as_ref()
            .and_then(|s| s.drag.as_ref())
            .map(|d| d.placeholder);

        let rows: Vec<(ItemId, String)> = self
            .store
            .items()
            .iter()
            .map(|item| (item.id, item.text.clone()))
            .collect();

        let mut remove_id: Option<ItemId> = None;
        let mut edit_action: Option<EditAction> = None;
        let mut menu_request: Option<(ItemId, egui::Pos2)> = None;

        let scroll = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut slot_index = 0usize;

                for (id, text) in &rows {
                    let id = *id;
                    if dragged == Some(id) {
                        continue;
                    }

                    if placeholder == Some(slot_index) && dragged.is_some() {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(list_width, ROW_HEIGHT),
                            egui::Sense::hover(),
                        );
                        ui.painter()
                            .rect_stroke(rect, 8.0, egui::Stroke::new(1.0, theme.drop_hint));
                        ui.add_space(ROW_GAP);
                    }

                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(list_width, ROW_HEIGHT),
                        egui::Sense::click_and_drag(),
                    );
                    self.row_rects.push((id, rect));

                    let is_editing = self.edit.is_editing(id);
                    let is_selected = self.selected == Some(id);
                    let fill = if is_selected {
                        theme.row_selected
                    } else if response.hovered() {
                        theme.row_hover
                    } else {
                        theme.row_bg
                    };
                    ui.painter().rect_filled(rect, 8.0, fill);
                    if is_selected || response.hovered() {
                        ui.painter().rect_stroke(
                            rect,
                            8.0,
                            egui::Stroke::new(1.0, theme.row_border),
                        );
                    }

                    let delete_rect = egui::Rect::from_center_size(
                        egui::pos2(rect.max.x - 8.0 - DELETE_SIDE * 0.5, rect.center().y),
                        egui::vec2(DELETE_SIDE, DELETE_SIDE),
                    );

                    if is_editing {
                        if let Some(action) =
                            self.draw_edit_field(ui, ctx, rect, delete_rect, id)
                        {
                            edit_action = Some(action);
                        }
                    } else {
                        ui.painter().text(
                            egui::pos2(rect.min.x + 12.0, rect.center().y),
                            egui::Align2::LEFT_CENTER,
                            text,
                            egui::FontId::proportional(15.0),
                            theme.item_text,
                        );

                        if response.is_pointer_button_down_on()
                            && can_begin_interaction(self.session.is_some(), is_editing)
                        {
                            if let Some(origin) = ctx.input(|i| i.pointer.press_origin()) {
                                if !delete_rect.contains(origin) {
                                    self.session = Some(InteractionSession::begin(
                                        id,
                                        origin,
                                        Instant::now(),
                                    ));
                                }
                            }
                        }

                        if response.secondary_clicked() {
                            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                                menu_request = Some((id, pos));
                            }
                        }
                    }

                    // delete affordance, hit-tested independently of the row body
                    let delete_response = ui.interact(
                        delete_rect,
                        ui.id().with(("delete", id)),
                        egui::Sense::click(),
                    );
                    if delete_response.hovered() {
                        ui.painter()
                            .rect_filled(delete_rect, 6.0, theme.delete_hover_bg);
                    }
                    let delete_color = if delete_response.hovered() {
                        theme.item_text
                    } else {
                        theme.delete_text
                    };
                    ui.painter().text(
                        delete_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "✕",
                        egui::FontId::proportional(13.0),
                        delete_color,
                    );
                    if delete_response.clicked() {
                        remove_id = Some(id);
                    }

                    ui.add_space(ROW_GAP);
                    slot_index += 1;
                }

                if placeholder == Some(slot_index) && dragged.is_some() {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(list_width, ROW_HEIGHT),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_stroke(rect, 8.0, egui::Stroke::new(1.0, theme.drop_hint));
                }
            });

        // scrolling under an open menu dismisses it
        let offset = scroll.state.offset.y;
        if self.menu.is_open() && (offset - self.last_scroll_offset).abs() > f32::EPSILON {
            self.menu.hide();
        }
        self.last_scroll_offset = offset;

        if let Some((id, pos)) = menu_request {
            self.menu.show(pos, id, ctx.screen_rect());
        }
        match edit_action {
            Some(EditAction::Commit) => self.finish_edit(),
            Some(EditAction::Cancel) => self.cancel_edit(),
            None => {}
        }
        if let Some(id) = remove_id {
            self.delete_item(id);
        }
    }

    fn draw_edit_field(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        rect: egui::Rect,
        delete_rect: egui::Rect,
        id: ItemId,
    ) -> Option<EditAction> {
        let Some(state) = self.edit.state_mut(id) else {
            return None;
        };
        let focus = state.take_focus_request();
        let edit_rect = egui::Rect::from_min_max(
            egui::pos2(rect.min.x + 8.0, rect.min.y + 7.0),
            egui::pos2(delete_rect.min.x - 6.0, rect.max.y - 7.0),
        );

        let output = ui
            .allocate_ui_at_rect(edit_rect, |ui| {
                egui::TextEdit::singleline(&mut state.buffer)
                    .desired_width(f32::INFINITY)
                    .show(ui)
            })
            .inner;

        if focus {
            output.response.request_focus();
            let end = CCursor::new(state.buffer.chars().count());
            let mut text_state = output.state;
            text_state.cursor.set_char_range(Some(CCursorRange::one(end)));
            text_state.store(ctx, output.response.id);
        }

        if output.response.lost_focus() {
            // Escape surrenders focus too, so split on the key that did it;
            // any other focus loss is an implicit confirm.
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                return Some(EditAction::Cancel);
            }
            return Some(EditAction::Commit);
        }
        None
    }

    fn advance_session(&mut self, ctx: &egui::Context) {
        if self.session.is_none() {
            return;
        }
        // Keep repainting while pressed so the long-press deadline is
        // observed even when the pointer never moves.
        ctx.request_repaint_after(Duration::from_millis(16));

        let now = Instant::now();
        let down = ctx.input(|i| i.pointer.primary_down());
        let focused = ctx.input(|i| i.focused);
        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if !down || !focused || escape {
            self.finish_session();
            return;
        }

        let Some(pointer) = ctx.input(|i| i.pointer.hover_pos()) else {
            return;
        };
        let signal = self
            .session
            .as_mut()
            .and_then(|session| session.advance(pointer, now));
        match signal {
            Some(GestureSignal::DragStart) => self.begin_drag(pointer),
            Some(GestureSignal::LongPress) => self.open_menu_at(ctx, pointer),
            None => {}
        }
        self.update_drag(ctx, pointer);
    }

    fn begin_drag(&mut self, pointer: egui::Pos2) {
        let item_top = {
            let Some(session) = self.session.as_ref() else {
                return;
            };
            self.row_rects
                .iter()
                .find(|(id, _)| *id == session.item)
                .map(|(_, rect)| rect.min.y)
                .unwrap_or(pointer.y)
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let placeholder = self.store.index_of(session.item).unwrap_or(0);
        session.drag = Some(DragSession::begin(
            session.item,
            item_top,
            pointer.y,
            placeholder,
        ));
    }

    fn open_menu_at(&mut self, ctx: &egui::Context, pointer: egui::Pos2) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        self.menu.show(pointer, session.item, ctx.screen_rect());
    }

    fn update_drag(&mut self, ctx: &egui::Context, pointer: egui::Pos2) {
        let rows: Vec<egui::Rect> = self.row_rects.iter().map(|(_, rect)| *rect).collect();
        let Some(drag) = self.session.as_mut().and_then(|s| s.drag.as_mut()) else {
            return;
        };
        let slot = placeholder_slot(pointer.y, &rows);
        if drag.retarget(slot) {
            ctx.request_repaint();
        }
    }

    fn handle_menu_dismissal(&mut self, ctx: &egui::Context) {
        if !self.menu.is_open() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.menu.hide();
            return;
        }
        if ctx.input(|i| i.raw_scroll_delta.y != 0.0) {
            self.menu.hide();
            return;
        }
        // A press on the menu itself is the action, not a dismissal.
        if ctx.input(|i| i.pointer.any_pressed()) {
            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                if !self.menu.rect().contains(pos) {
                    self.menu.hide();
                }
            }
        }
    }

    fn draw_context_menu(&mut self, ctx: &egui::Context) {
        let Some(target) = self.menu.target() else {
            return;
        };
        let mut rename_clicked = false;
        egui::Area::new(egui::Id::new("item_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(self.menu.pos())
            .show(ctx, |ui| {
                egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                    ui.set_min_width(MENU_SIZE.x - 16.0);
                    if ui.button("Rename").clicked() {
                        rename_clicked = true;
                    }
                });
            });
        if rename_clicked {
            self.menu.hide();
            self.start_rename(target);
        }
    }

    fn draw_drag_overlay(&mut self, ctx: &egui::Context, theme: &ListTheme) {
        let Some(drag) = self.session.as_ref().and_then(|s| s.drag.as_ref()) else {
            return;
        };
        let Some(pointer) = ctx.input(|i| i.pointer.hover_pos()) else {
            return;
        };
        let Some(text) = self.store.text_of(drag.item) else {
            return;
        };

        let top = drag.float_top(pointer.y);
        let rect = egui::Rect::from_min_size(
            egui::pos2(self.list_rect.min.x, top),
            egui::vec2(self.list_rect.width().max(160.0), ROW_HEIGHT),
        );
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("drag_row"),
        ));
        painter.rect_filled(
            rect.expand(DROP_SHADOW),
            8.0 + DROP_SHADOW,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 32),
        );
        painter.rect_filled(rect, 8.0, theme.row_selected);
        painter.rect_stroke(rect, 8.0, egui::Stroke::new(1.0, theme.drop_hint));
        painter.text(
            egui::pos2(rect.min.x + 12.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            text,
            egui::FontId::proportional(15.0),
            theme.item_text,
        );
        ctx.request_repaint();
    }

    fn draw_warning_overlay(&mut self, ctx: &egui::Context, theme: &ListTheme) {
        if let Some((msg, start_time)) = &self.warning_message {
            let elapsed = start_time.elapsed();
            if elapsed < Duration::from_secs(2) {
                let painter = ctx.layer_painter(egui::LayerId::new(
                    egui::Order::Foreground,
                    egui::Id::new("warning"),
                ));
                let rect = ctx.screen_rect();

                let galley = painter.layout(
                    msg.clone(),
                    egui::FontId::proportional(15.0),
                    theme.toast_text,
                    f32::INFINITY,
                );
                let text_rect = galley.rect;
                let centered_rect = text_rect.translate(rect.center() - text_rect.center());
                painter.rect_filled(centered_rect.expand(10.0), 10.0, theme.toast_bg);
                painter.rect_stroke(
                    centered_rect.expand(10.0),
                    10.0,
                    egui::Stroke::new(1.0, theme.row_border),
                );
                painter.galley(centered_rect.min, galley, theme.toast_text);
                ctx.request_repaint();
            } else {
                self.warning_message = None;
            }
        }
    }
}
