use eframe::egui::Color32;

pub const FIELD_BACKGROUND: Color32 = Color32::from_rgb(0, 0, 128);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 128, 0);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x6c, 0xd9, 0x4a);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0x3f, 0xa3, 0x2b);
pub const SNAKE_EYE: Color32 = Color32::from_rgb(0x10, 0x10, 0x10);
pub const FOOD: Color32 = Color32::from_rgb(0xe0, 0x2f, 0x2f);
pub const FOOD_LEAF: Color32 = Color32::from_rgb(0x2e, 0x8b, 0x22);

/// Translucent red laid over the field right after a game-over.
pub fn game_over_flash(alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(128, 0, 0, alpha)
}
