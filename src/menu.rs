use crate::store::ItemId;
use eframe::egui;

pub const MENU_SIZE: egui::Vec2 = egui::Vec2::new(132.0, 40.0);
pub const MENU_MARGIN: f32 = 8.0;

/// Singleton floating menu. Visibility and target binding are one field, so
/// a visible menu always has a target and showing a new one replaces any
/// prior instance.
#[derive(Default)]
pub struct ContextMenu {
    target: Option<ItemId>,
    pos: egui::Pos2,
}

impl ContextMenu {
    pub fn show(&mut self, at: egui::Pos2, item: ItemId, viewport: egui::Rect) {
        self.pos = clamp_to_viewport(at, MENU_SIZE, viewport, MENU_MARGIN);
        self.target = Some(item);
    }

    pub fn hide(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<ItemId> {
        self.target
    }

    pub fn pos(&self) -> egui::Pos2 {
        self.pos
    }

    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(self.pos, MENU_SIZE)
    }
}

/// Shifts the box left/up by the overflow plus a margin when it would cross
/// the right/bottom edge, then pins it inside the top-left corner.
fn clamp_to_viewport(
    at: egui::Pos2,
    size: egui::Vec2,
    viewport: egui::Rect,
    margin: f32,
) -> egui::Pos2 {
    let mut x = at.x;
    let mut y = at.y;
    if x + size.x > viewport.max.x {
        x = viewport.max.x - size.x - margin;
    }
    if y + size.y > viewport.max.y {
        y = viewport.max.y - size.y - margin;
    }
    egui::pos2(x.max(viewport.min.x), y.max(viewport.min.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(400.0, 600.0))
    }

    #[test]
    fn show_binds_target_and_hide_unbinds() {
        let mut menu = ContextMenu::default();
        assert!(!menu.is_open());

        menu.show(egui::pos2(50.0, 60.0), 7, viewport());
        assert!(menu.is_open());
        assert_eq!(menu.target(), Some(7));
        assert_eq!(menu.pos(), egui::pos2(50.0, 60.0));

        menu.hide();
        assert!(!menu.is_open());
        assert_eq!(menu.target(), None);
        // hiding an already hidden menu is fine
        menu.hide();
        assert!(!menu.is_open());
    }

    #[test]
    fn showing_for_a_new_target_replaces_the_old_binding() {
        let mut menu = ContextMenu::default();
        menu.show(egui::pos2(10.0, 10.0), 1, viewport());
        menu.show(egui::pos2(90.0, 90.0), 2, viewport());
        assert_eq!(menu.target(), Some(2));
        assert_eq!(menu.pos(), egui::pos2(90.0, 90.0));
    }

    #[test]
    fn menu_near_the_bottom_right_is_shifted_inside() {
        let mut menu = ContextMenu::default();
        menu.show(egui::pos2(395.0, 595.0), 1, viewport());
        let rect = menu.rect();
        assert!(viewport().contains_rect(rect), "menu rect {rect:?}");
        assert_eq!(rect.max.x, 400.0 - MENU_MARGIN);
        assert_eq!(rect.max.y, 600.0 - MENU_MARGIN);
    }

    #[test]
    fn menu_is_never_pushed_past_the_top_left() {
        let tiny = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(60.0, 20.0));
        let mut menu = ContextMenu::default();
        menu.show(egui::pos2(50.0, 10.0), 1, tiny);
        assert!(menu.pos().x >= 0.0);
        assert!(menu.pos().y >= 0.0);
    }
}
