// TestBench - platform/dialogs.rs
//
// Native file/folder pickers behind a trait so the flows in app::actions
// can be driven by a scripted implementation in tests.
//
// Every method returns `None` when the user cancels.

use std::path::{Path, PathBuf};

/// Host-provided file and folder pickers.
pub trait Dialogs {
    /// Pick a single existing file to open.
    fn pick_file(&self, title: &str) -> Option<PathBuf>;

    /// Pick a single existing directory.
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;

    /// Choose a destination to save to. `default_path` is either a bare file
    /// name or a full path whose directory the dialog should start in.
    fn save_file(&self, title: &str, default_path: &Path) -> Option<PathBuf>;
}

/// `rfd`-backed native dialogs. Blocks the calling (UI) thread while open.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_file(&self, title: &str) -> Option<PathBuf> {
        let picked = rfd::FileDialog::new().set_title(title).pick_file();
        tracing::debug!(title, picked = ?picked, "File dialog closed");
        picked
    }

    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        let picked = rfd::FileDialog::new().set_title(title).pick_folder();
        tracing::debug!(title, picked = ?picked, "Folder dialog closed");
        picked
    }

    fn save_file(&self, title: &str, default_path: &Path) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title(title);
        if let Some(dir) = default_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = default_path.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }
        let picked = dialog.save_file();
        tracing::debug!(title, picked = ?picked, "Save dialog closed");
        picked
    }
}
