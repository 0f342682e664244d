use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const GRID_LINE: Color32 = Color32::from_rgb(31, 41, 55);
pub const HEAD: Color32 = Color32::from_rgb(74, 222, 128);
pub const BOOSTED_HEAD: Color32 = Color32::from_rgb(250, 204, 21);
pub const FOOD: Color32 = Color32::from_rgb(239, 68, 68);
pub const POWER_UP: Color32 = Color32::from_rgb(96, 165, 250);
pub const OBSTACLE: Color32 = Color32::from_rgb(107, 114, 128);
pub const OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);

/// Body fades from the head color towards a darker green along the snake.
pub fn body_color(index: usize, len: usize) -> Color32 {
    let t = if len <= 1 {
        0.0
    } else {
        index as f32 / (len - 1) as f32
    };
    let lerp = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * t) as u8;
    Color32::from_rgb(lerp(34, 21), lerp(197, 94), lerp(94, 46))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_color_endpoints() {
        assert_eq!(body_color(0, 5), Color32::from_rgb(34, 197, 94));
        assert_eq!(body_color(4, 5), Color32::from_rgb(21, 94, 46));
        assert_eq!(body_color(0, 1), Color32::from_rgb(34, 197, 94));
    }
}
