mod style;
mod ui;

use crate::config::AppConfig;
use crate::edit::InlineEdit;
use crate::menu::ContextMenu;
use crate::session::{GesturePhase, InteractionSession};
use crate::storage::{FileStore, LIST_KEY, TTL_DAYS};
use crate::store::{ItemId, ListStore};
use eframe::egui;
use log::warn;
use std::time::Instant;

pub const WINDOW_WIDTH: f32 = 360.0;
pub const WINDOW_HEIGHT: f32 = 560.0;
pub const MIN_WINDOW_WIDTH: f32 = 240.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

pub struct ListApp {
    store: ListStore,
    storage: FileStore,
    config: AppConfig,
    session: Option<InteractionSession>,
    menu: ContextMenu,
    edit: InlineEdit,
    selected: Option<ItemId>,
    new_item_text: String,
    // row geometry of the last drawn frame, visual order, dragged row excluded
    row_rects: Vec<(ItemId, egui::Rect)>,
    list_rect: egui::Rect,
    last_scroll_offset: f32,
    warning_message: Option<(String, Instant)>,
}

impl ListApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load();
        if let Some((x, y)) = config.last_pos {
            cc.egui_ctx
                .send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(x, y)));
        }
        if let Some((w, h)) = config.last_size {
            let restored = sanitize_window_size(egui::vec2(w, h));
            cc.egui_ctx
                .send_viewport_cmd(egui::ViewportCommand::InnerSize(restored));
        }

        let storage = FileStore::open();
        let store = match storage.load(LIST_KEY) {
            Some(texts) => ListStore::from_texts(&texts),
            None => ListStore::default(),
        };

        Self {
            store,
            storage,
            config,
            session: None,
            menu: ContextMenu::default(),
            edit: InlineEdit::default(),
            selected: None,
            new_item_text: String::new(),
            row_rects: Vec::new(),
            list_rect: egui::Rect::ZERO,
            last_scroll_offset: 0.0,
            warning_message: None,
        }
    }

    /// Fire-and-forget: a failed save degrades to the in-memory list and
    /// never rolls back what the user already sees.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(LIST_KEY, &self.store.texts(), TTL_DAYS) {
            warn!("Failed to save list: {err}");
            self.show_warning("Couldn't save list");
        }
    }

    fn add_item(&mut self) {
        let text = std::mem::take(&mut self.new_item_text);
        if self.store.add(&text).is_some() {
            self.persist();
        }
    }

    fn delete_item(&mut self, id: ItemId) {
        if self.edit.is_editing(id) {
            self.edit.cancel();
        }
        if self.menu.target() == Some(id) {
            self.menu.hide();
        }
        if self.store.remove(id) {
            if self.selected == Some(id) {
                self.selected = None;
            }
            self.persist();
        }
    }

    fn start_rename(&mut self, id: ItemId) {
        // a rename on one item implicitly confirms any other edit in flight
        if self.edit.is_active() {
            self.finish_edit();
        }
        if let Some(text) = self.store.text_of(id) {
            let text = text.to_string();
            self.edit.enter(id, text);
        }
    }

    fn finish_edit(&mut self) {
        if let Some((id, text)) = self.edit.commit() {
            if self.store.rename(id, &text) {
                self.persist();
            }
        }
    }

    fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    /// Terminal event for the current interaction: a drag commits its
    /// placeholder slot, a still-pending press was a tap, an armed
    /// long-press leaves the menu standing. Safe with no session active.
    fn finish_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        match session.phase {
            GesturePhase::Dragging => {
                if let Some(drag) = session.drag {
                    self.store.reorder(drag.item, drag.placeholder);
                    self.persist();
                }
            }
            GesturePhase::Pending => {
                self.selected = Some(session.item);
            }
            GesturePhase::LongPressArmed => {}
        }
    }

    fn show_warning<S: Into<String>>(&mut self, message: S) {
        self.warning_message = Some((message.into(), Instant::now()));
    }

    fn track_window_geometry(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.config.last_pos = Some((rect.min.x, rect.min.y));
        }
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.last_size = Some((rect.width(), rect.height()));
        }
    }
}

fn sanitize_window_size(size: egui::Vec2) -> egui::Vec2 {
    let width = if size.x.is_finite() {
        size.x
    } else {
        WINDOW_WIDTH
    };
    let height = if size.y.is_finite() {
        size.y
    } else {
        WINDOW_HEIGHT
    };
    egui::vec2(width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
}

/// A press over a row body may only open an interaction when nothing else
/// is in flight and the row is not in inline edit mode.
fn can_begin_interaction(session_active: bool, item_editing: bool) -> bool {
    !session_active && !item_editing
}
