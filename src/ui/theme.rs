// BasketMiner - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for error text (load failures).
pub fn error_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(248, 113, 113) // Red 400
    } else {
        Color32::from_rgb(185, 28, 28) // Red 700
    }
}

/// Colour for advisory text (empty outcomes).
pub fn warning_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(253, 186, 116) // Orange 300
    } else {
        Color32::from_rgb(180, 83, 9) // Amber 700
    }
}

/// Colour for a confidence value: stronger rules are greener.
pub fn confidence_colour(confidence: f64, dark_mode: bool) -> Color32 {
    let (strong, weak) = if dark_mode {
        (Color32::from_rgb(74, 222, 128), Color32::from_rgb(209, 213, 219)) // Green 400, Gray 300
    } else {
        (Color32::from_rgb(21, 128, 61), Color32::from_rgb(55, 65, 81)) // Green 700, Gray 700
    };
    if confidence >= 0.8 {
        strong
    } else {
        weak
    }
}

/// Apply the selected theme and font size to the egui context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                egui::TextStyle::Small => font_size * 0.75,
                egui::TextStyle::Heading => font_size * 1.4,
                _ => font_size,
            };
        }
    });
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 290.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const NUMBER_COLUMN_WIDTH: f32 = 110.0;
