// TestBench - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use testbench::app;
pub use testbench::platform;
pub use testbench::ui;
pub use testbench::util;

use clap::Parser;

/// TestBench - desktop bench for exercising host calls, native dialogs,
/// and text file I/O.
#[derive(Parser, Debug)]
#[command(name = "TestBench", version, about)]
struct Cli {
    /// Initial contents of the name input (overrides config).
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Skip the startup ping.
    #[arg(long = "no-probe")]
    no_probe: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists so its level can seed the filter;
    // warnings are replayed once the subscriber is installed.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %platform_paths.config_file().display(),
        "TestBench starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let mut state = app::state::SessionState::new(&config);
    if let Some(name) = cli.name {
        state.name = name;
    }
    let dark_mode = state.dark_mode;
    let probe = !cli.no_probe;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([util::constants::WINDOW_WIDTH, util::constants::WINDOW_HEIGHT])
            .with_min_inner_size([
                util::constants::WINDOW_MIN_WIDTH,
                util::constants::WINDOW_MIN_HEIGHT,
            ]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode);
            Ok(Box::new(gui::TestBenchApp::new(
                state,
                Box::new(platform::dialogs::NativeDialogs),
                probe,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch TestBench GUI: {e}");
        std::process::exit(1);
    }
}
