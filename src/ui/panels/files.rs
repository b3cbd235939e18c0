// TestBench - ui/panels/files.rs
//
// "Dialogs + File Read/Write" section: open/save buttons, the selected
// file path, and the editable text buffer.

use crate::app::state::{SessionState, UserAction};
use crate::ui::theme;

/// Render the file section.
pub fn render(ui: &mut egui::Ui, state: &mut SessionState) {
    ui.heading("Dialogs + File Read/Write");
    ui.horizontal_wrapped(|ui| {
        if ui.button("Pick file & read").clicked() {
            state.request(UserAction::PickAndReadFile);
        }
        // Nothing to write until the buffer has content.
        if ui
            .add_enabled(state.can_save(), egui::Button::new("Save as\u{2026}"))
            .clicked()
        {
            state.request(UserAction::SaveFileAs);
        }
    });

    if let Some(ref path) = state.selected_file {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("File:").strong());
            ui.code(path.display().to_string());
        });
    }

    ui.add(
        egui::TextEdit::multiline(&mut state.file_contents)
            .hint_text("File contents will appear here (or type anything and Save as\u{2026}).")
            .desired_rows(theme::BUFFER_ROWS)
            .desired_width(f32::INFINITY)
            .code_editor(),
    );
}
