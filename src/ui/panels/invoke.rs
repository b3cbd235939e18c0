// TestBench - ui/panels/invoke.rs
//
// "Invoke" section: name input and Greet button, plus the last greeting.

use crate::app::state::{SessionState, UserAction};

/// Render the greet form.
pub fn render(ui: &mut egui::Ui, state: &mut SessionState) {
    ui.heading("Invoke (host commands)");
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.name)
                .hint_text("Name\u{2026}")
                .desired_width(240.0),
        );
        // Enter in the input submits like the button does.
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Greet").clicked() || submitted {
            state.request(UserAction::Greet);
        }
    });

    if !state.greeting.is_empty() {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&state.greeting).strong());
    }
}
