use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use top250_explorer::graph::Role;

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

pub const DIRECTOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
pub const ACTOR: Color32 = Color32::from_rgb(0xff, 0x7f, 0x0e);
pub const NODE_OUTLINE: Color32 = Color32::from_rgb(0x2f, 0x4f, 0x4f);

pub fn role_color(role: Role) -> Color32 {
    match role {
        Role::Director => DIRECTOR,
        Role::Actor => ACTOR,
    }
}

// ---------------------------------------------------------------------------
// Generated colours
// ---------------------------------------------------------------------------

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| to_color32(Hsl::new((i as f32 / n as f32) * 360.0, 0.75, 0.55)))
        .collect()
}

/// Grey for an edge: the heavier the edge relative to `max_weight`, the
/// darker the line.
pub fn edge_color(weight: u32, max_weight: u32) -> Color32 {
    let t = if max_weight <= 1 {
        0.0
    } else {
        (weight.saturating_sub(1) as f32 / (max_weight - 1) as f32).clamp(0.0, 1.0)
    };
    to_color32(Hsl::new(0.0, 0.0, 0.72 - 0.4 * t))
}
