// TestBench - app/state.rs
//
// Session view state. Ephemeral: lives for the process lifetime only and
// is never persisted. Owned by the eframe::App implementation and only
// mutated on the UI thread.

use crate::core::activity_log::ActivityLog;
use crate::platform::config::AppConfig;
use std::path::PathBuf;

/// A button press or form submit raised by a UI panel.
///
/// Panels only queue these; `gui.rs` drains the queue and runs the flows,
/// keeping dialogs and call issuing out of the render code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Greet,
    PickAndReadFile,
    SaveFileAs,
    PickAndListDir,
}

/// Top-level session state.
#[derive(Debug)]
pub struct SessionState {
    /// Current contents of the name input.
    pub name: String,

    /// Reply from the most recent successful greet.
    pub greeting: String,

    /// File most recently chosen in the open dialog.
    pub selected_file: Option<PathBuf>,

    /// Editable text buffer; filled by reads, written by "Save as…".
    pub file_contents: String,

    /// Directory most recently chosen in the folder dialog.
    pub selected_dir: Option<PathBuf>,

    /// Entries from the most recent successful list_dir.
    pub dir_entries: Vec<String>,

    /// On-screen activity log.
    pub log: ActivityLog,

    /// Message sent by the startup ping.
    pub probe_message: String,

    /// File name suggested by "Save as…" when no file is selected.
    pub default_save_name: String,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Actions queued by panels this frame.
    requests: Vec<UserAction>,
}

impl SessionState {
    /// Create initial state from validated configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            name: config.default_name.clone(),
            greeting: String::new(),
            selected_file: None,
            file_contents: String::new(),
            selected_dir: None,
            dir_entries: Vec::new(),
            log: ActivityLog::new(),
            probe_message: config.probe_message.clone(),
            default_save_name: config.default_save_name.clone(),
            dark_mode: config.dark_mode,
            requests: Vec::new(),
        }
    }

    /// "Save as…" is only offered when there is something to write.
    pub fn can_save(&self) -> bool {
        !self.file_contents.is_empty()
    }

    /// Starting point for the save dialog: the opened file, else the default name.
    pub fn save_default_path(&self) -> PathBuf {
        self.selected_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.default_save_name))
    }

    /// Queue an action for the app to run after rendering.
    pub fn request(&mut self, action: UserAction) {
        self.requests.push(action);
    }

    /// Drain queued actions in the order they were raised.
    pub fn take_requests(&mut self) -> Vec<UserAction> {
        std::mem::take(&mut self.requests)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
