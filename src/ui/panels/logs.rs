// TestBench - ui/panels/logs.rs
//
// "Logs" section: the activity log, newest first.

use crate::app::state::SessionState;
use crate::ui::theme;

/// Render the activity log.
pub fn render(ui: &mut egui::Ui, state: &SessionState) {
    ui.horizontal(|ui| {
        ui.heading("Logs");
        ui.weak(format!("{}/{}", state.log.len(), state.log.capacity()));
    });

    if state.log.is_empty() {
        ui.weak("No logs yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("activity_log")
        .max_height(theme::LOG_MAX_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for entry in state.log.iter() {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&entry.timestamp)
                            .monospace()
                            .color(theme::LOG_TIMESTAMP),
                    );
                    let message = egui::RichText::new(&entry.message);
                    if theme::is_error_message(&entry.message) {
                        ui.label(message.color(theme::LOG_ERROR));
                    } else {
                        ui.label(message);
                    }
                });
            }
        });
}
