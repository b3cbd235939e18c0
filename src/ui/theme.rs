// TestBench - ui/theme.rs
//
// Colours and layout constants. No dependencies on app state or business logic.

use egui::Color32;

/// Activity log colours.
pub const LOG_TIMESTAMP: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500
pub const LOG_ERROR: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Pending-call indicator.
pub const PENDING: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Layout constants.
pub const SECTION_SPACING: f32 = 10.0;
pub const BUFFER_ROWS: usize = 10;
pub const LIST_MAX_HEIGHT: f32 = 180.0;
pub const LOG_MAX_HEIGHT: f32 = 240.0;

/// Apply the configured dark/light visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

/// True for activity log messages produced by a failed call.
pub fn is_error_message(message: &str) -> bool {
    message.contains(" error: ")
}
