use eframe::egui::Color32;

pub const ROW_HEIGHT: f32 = 44.0;
pub const ROW_GAP: f32 = 4.0;
pub const CONTENT_PADDING: f32 = 10.0;
pub const DELETE_SIDE: f32 = 24.0;
pub const DROP_SHADOW: f32 = 6.0;

#[derive(Clone, Copy)]
pub struct ListTheme {
    pub row_bg: Color32,
    pub row_hover: Color32,
    pub row_selected: Color32,
    pub row_border: Color32,
    pub item_text: Color32,
    pub hint_text: Color32,
    pub delete_text: Color32,
    pub delete_hover_bg: Color32,
    pub drop_hint: Color32,
    pub toast_bg: Color32,
    pub toast_text: Color32,
}

impl Default for ListTheme {
    fn default() -> Self {
        Self {
            row_bg: Color32::from_rgba_premultiplied(30, 36, 46, 200),
            row_hover: Color32::from_rgba_premultiplied(41, 50, 64, 220),
            row_selected: Color32::from_rgba_premultiplied(49, 94, 105, 220),
            row_border: Color32::from_rgba_premultiplied(140, 160, 184, 90),
            item_text: Color32::from_rgb(236, 242, 250),
            hint_text: Color32::from_rgba_premultiplied(180, 192, 206, 140),
            delete_text: Color32::from_rgba_premultiplied(186, 196, 210, 150),
            delete_hover_bg: Color32::from_rgba_premultiplied(120, 52, 52, 210),
            drop_hint: Color32::from_rgba_premultiplied(93, 214, 189, 190),
            toast_bg: Color32::from_rgba_premultiplied(10, 14, 20, 235),
            toast_text: Color32::from_rgb(245, 250, 255),
        }
    }
}
