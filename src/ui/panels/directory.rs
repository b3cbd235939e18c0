// TestBench - ui/panels/directory.rs
//
// "Directory listing" section.

use crate::app::state::{SessionState, UserAction};
use crate::ui::theme;

/// Render the directory section.
pub fn render(ui: &mut egui::Ui, state: &mut SessionState) {
    ui.heading("Directory listing");
    if ui.button("Pick folder & list entries").clicked() {
        state.request(UserAction::PickAndListDir);
    }

    if let Some(ref path) = state.selected_dir {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Folder:").strong());
            ui.code(path.display().to_string());
        });
    }

    if state.dir_entries.is_empty() {
        ui.weak("No entries loaded yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("dir_entries")
        .max_height(theme::LIST_MAX_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for entry in &state.dir_entries {
                ui.label(egui::RichText::new(entry).monospace());
            }
        });
}
