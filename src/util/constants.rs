// TestBench - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "TestBench";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "TestBench";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Activity log
// =============================================================================

/// Maximum number of entries retained by the activity log.
/// Recording past this evicts the oldest entry.
pub const ACTIVITY_LOG_CAPACITY: usize = 50;

/// chrono format string for activity log timestamps (local wall-clock time).
pub const ACTIVITY_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Flow defaults
// =============================================================================

/// Initial contents of the name input.
pub const DEFAULT_GREET_NAME: &str = "World";

/// Message sent by the one-time startup ping.
pub const DEFAULT_PROBE_MESSAGE: &str = "hello from the UI";

/// File name suggested by "Save as…" when no file has been opened yet.
pub const DEFAULT_SAVE_FILE_NAME: &str = "testbench.txt";

/// Upper bound on the configured default name (characters).
pub const MAX_GREET_NAME_CHARS: usize = 256;

// Dialog titles.
pub const DIALOG_TITLE_READ_FILE: &str = "Pick a text file to read";
pub const DIALOG_TITLE_SAVE_FILE: &str = "Save file as";
pub const DIALOG_TITLE_LIST_DIR: &str = "Pick a folder to list";

// =============================================================================
// Call bridge
// =============================================================================

/// Repaint interval while at least one call is outstanding.
pub const CALL_POLL_INTERVAL_MS: u64 = 50;

// =============================================================================
// Configuration & logging
// =============================================================================

/// Name of the configuration file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Window layout
// =============================================================================

pub const WINDOW_WIDTH: f32 = 820.0;
pub const WINDOW_HEIGHT: f32 = 900.0;
pub const WINDOW_MIN_WIDTH: f32 = 480.0;
pub const WINDOW_MIN_HEIGHT: f32 = 400.0;
