// TestBench - gui.rs
//
// Top-level eframe::App implementation.
// Wires the panels together, runs queued user actions, and applies settled
// host calls every frame.

use crate::app::actions::{self, Bridge};
use crate::app::state::SessionState;
use crate::platform::dialogs::Dialogs;
use crate::ui;
use crate::util::constants;

/// The TestBench application.
pub struct TestBenchApp {
    pub state: SessionState,
    pub bridge: Bridge,
    dialogs: Box<dyn Dialogs>,
}

impl TestBenchApp {
    /// Create a new application instance. Issues the startup probe unless
    /// `probe` is false.
    pub fn new(state: SessionState, dialogs: Box<dyn Dialogs>, probe: bool) -> Self {
        let mut bridge = Bridge::new();
        if probe {
            actions::startup_probe(&state, &mut bridge);
        } else {
            tracing::info!("Startup probe disabled");
        }
        Self {
            state,
            bridge,
            dialogs,
        }
    }
}

impl eframe::App for TestBenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results that arrived since the last frame.
        actions::pump(&mut self.state, &mut self.bridge);

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let pending = self.bridge.pending_count();
                if pending > 0 {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new(format!("{pending} call(s) in flight"))
                            .color(ui::theme::PENDING),
                    );
                } else {
                    ui.label("Idle");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!(
                        "{} v{}",
                        constants::APP_NAME,
                        constants::APP_VERSION
                    ));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.heading(format!("{} Test Bench", constants::APP_NAME));
                    ui.weak("Quick buttons to test host calls, dialogs, and filesystem I/O.");
                    ui.add_space(ui::theme::SECTION_SPACING);

                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui::panels::invoke::render(ui, &mut self.state);
                    });
                    ui.add_space(ui::theme::SECTION_SPACING);

                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui::panels::files::render(ui, &mut self.state);
                    });
                    ui.add_space(ui::theme::SECTION_SPACING);

                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui::panels::directory::render(ui, &mut self.state);
                    });
                    ui.add_space(ui::theme::SECTION_SPACING);

                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui::panels::logs::render(ui, &self.state);
                    });
                });
        });

        // Run actions raised by the panels. Dialogs block this thread while
        // open, so this happens after the frame has been laid out.
        for action in self.state.take_requests() {
            actions::dispatch(action, &mut self.state, self.dialogs.as_ref(), &mut self.bridge);
        }

        // Keep polling while calls are outstanding so results appear promptly.
        if self.bridge.has_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                constants::CALL_POLL_INTERVAL_MS,
            ));
        }
    }
}
