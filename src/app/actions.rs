// TestBench - app/actions.rs
//
// User flows: greet, pick+read file, save-as, pick+list directory, and the
// startup probe.
//
// Each flow is split at its single host call. The first half runs when the
// user acts (dialog, immediate log line, issue the call); the second half
// runs in `apply_settled` when the call comes back. Every settled call
// records exactly one activity log entry, success or failure, except greet
// failures which are traced but not recorded.

use crate::app::bridge::{CallManager, SettledCall};
use crate::app::state::{SessionState, UserAction};
use crate::core::model::{Call, CallValue};
use crate::platform::dialogs::Dialogs;
use crate::util::constants;
use std::path::PathBuf;

/// What to do with a call's result once it settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Greet issued with this name input.
    Greet { name: String },
    /// Startup ping.
    Probe,
    ReadFile { path: PathBuf },
    /// `chars` is the buffer length at the moment "Save as…" was clicked.
    WriteFile { path: PathBuf, chars: usize },
    ListDir { path: PathBuf },
}

/// Bridge specialised to this module's flows.
pub type Bridge = CallManager<PendingAction>;

/// Run a queued UI action.
pub fn dispatch(
    action: UserAction,
    state: &mut SessionState,
    dialogs: &dyn Dialogs,
    bridge: &mut Bridge,
) {
    tracing::debug!(action = ?action, "Dispatching user action");
    match action {
        UserAction::Greet => greet(state, bridge),
        UserAction::PickAndReadFile => pick_and_read_file(state, dialogs, bridge),
        UserAction::SaveFileAs => save_file_as(state, dialogs, bridge),
        UserAction::PickAndListDir => pick_and_list_dir(state, dialogs, bridge),
    }
}

/// Issue `greet` with the current name input.
pub fn greet(state: &SessionState, bridge: &mut Bridge) {
    let name = state.name.clone();
    bridge.issue(
        PendingAction::Greet { name: name.clone() },
        Call::Greet { name },
    );
}

/// One-time startup ping.
pub fn startup_probe(state: &SessionState, bridge: &mut Bridge) {
    bridge.issue(
        PendingAction::Probe,
        Call::Ping {
            message: state.probe_message.clone(),
        },
    );
}

/// Pick a file and read it into the buffer. Cancelling does nothing.
pub fn pick_and_read_file(state: &mut SessionState, dialogs: &dyn Dialogs, bridge: &mut Bridge) {
    let Some(path) = dialogs.pick_file(constants::DIALOG_TITLE_READ_FILE) else {
        tracing::debug!("Open file dialog cancelled");
        return;
    };

    state.selected_file = Some(path.clone());
    state.log.record(format!("dialog open -> {}", path.display()));

    bridge.issue(
        PendingAction::ReadFile { path: path.clone() },
        Call::ReadTextFile { path },
    );
}

/// Write the buffer to a file chosen in the save dialog. Cancelling does nothing.
pub fn save_file_as(state: &mut SessionState, dialogs: &dyn Dialogs, bridge: &mut Bridge) {
    if !state.can_save() {
        tracing::debug!("Save requested with an empty buffer; ignoring");
        return;
    }

    let default_path = state.save_default_path();
    let Some(path) = dialogs.save_file(constants::DIALOG_TITLE_SAVE_FILE, &default_path) else {
        tracing::debug!("Save dialog cancelled");
        return;
    };

    state.log.record(format!("dialog save -> {}", path.display()));

    let contents = state.file_contents.clone();
    bridge.issue(
        PendingAction::WriteFile {
            path: path.clone(),
            chars: contents.chars().count(),
        },
        Call::WriteTextFile { path, contents },
    );
}

/// Pick a folder and list its entries. Cancelling does nothing.
pub fn pick_and_list_dir(state: &mut SessionState, dialogs: &dyn Dialogs, bridge: &mut Bridge) {
    let Some(path) = dialogs.pick_folder(constants::DIALOG_TITLE_LIST_DIR) else {
        tracing::debug!("Folder dialog cancelled");
        return;
    };

    state.selected_dir = Some(path.clone());
    state.log.record(format!("dialog open (dir) -> {}", path.display()));

    bridge.issue(
        PendingAction::ListDir { path: path.clone() },
        Call::ListDir { path },
    );
}

/// Apply one settled call to the session: update view state and record
/// exactly one log entry for it.
pub fn apply_settled(state: &mut SessionState, settled: SettledCall<PendingAction>) {
    match (settled.action, settled.result) {
        (PendingAction::Greet { name }, Ok(value)) => {
            state.greeting = into_text(value);
            state.log.record(format!("invoke greet(\"{name}\")"));
        }
        (PendingAction::Greet { name }, Err(e)) => {
            // Traced only; greet failures never reach the activity log.
            tracing::warn!(name = %name, error = %e, "greet failed");
        }

        (PendingAction::Probe, Ok(value)) => state.log.record(into_text(value)),
        (PendingAction::Probe, Err(e)) => state.log.record(format!("ping error: {e}")),

        (PendingAction::ReadFile { path }, Ok(value)) => {
            let contents = into_text(value);
            let chars = contents.chars().count();
            tracing::info!(file = %path.display(), chars, "File read");
            state.file_contents = contents;
            state.log.record(format!("read_text_file ok ({chars} chars)"));
        }
        (PendingAction::ReadFile { .. }, Err(e)) => {
            state.log.record(format!("read_text_file error: {e}"));
        }

        (PendingAction::WriteFile { path, chars }, Ok(_)) => {
            tracing::info!(file = %path.display(), chars, "File written");
            state.log.record(format!("write_text_file ok ({chars} chars)"));
        }
        (PendingAction::WriteFile { .. }, Err(e)) => {
            state.log.record(format!("write_text_file error: {e}"));
        }

        (PendingAction::ListDir { path }, Ok(value)) => {
            let entries = match value {
                CallValue::Paths(p) => p,
                other => {
                    tracing::warn!(value = %other, "list_dir returned a non-path value");
                    Vec::new()
                }
            };
            tracing::info!(dir = %path.display(), entries = entries.len(), "Directory listed");
            let count = entries.len();
            state.dir_entries = entries;
            state.log.record(format!("list_dir ok ({count} entries)"));
        }
        (PendingAction::ListDir { .. }, Err(e)) => {
            state.log.record(format!("list_dir error: {e}"));
        }
    }
}

/// Poll the bridge and apply every settled call. Returns how many settled.
pub fn pump(state: &mut SessionState, bridge: &mut Bridge) -> usize {
    let settled = bridge.poll();
    let count = settled.len();
    for call in settled {
        apply_settled(state, call);
    }
    count
}

/// Text payload of a command result; other shapes render as their summary.
fn into_text(value: CallValue) -> String {
    match value {
        CallValue::Text(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::bridge::CallResult;
    use crate::util::error::{BenchError, CommandError};
    use std::io;
    use std::time::Duration;

    fn settled(
        action: PendingAction,
        command: &'static str,
        result: CallResult,
    ) -> SettledCall<PendingAction> {
        SettledCall {
            id: 0,
            command,
            action,
            result,
            elapsed: Duration::ZERO,
        }
    }

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn test_greet_success_sets_greeting_and_logs_name() {
        let mut state = SessionState::default();
        apply_settled(
            &mut state,
            settled(
                PendingAction::Greet { name: "Ada".into() },
                "greet",
                Ok(CallValue::Text("Hello, Ada!".into())),
            ),
        );
        assert_eq!(state.greeting, "Hello, Ada!");
        assert_eq!(state.log.latest().unwrap().message, "invoke greet(\"Ada\")");
    }

    #[test]
    fn test_greet_failure_records_nothing() {
        let mut state = SessionState::default();
        apply_settled(
            &mut state,
            settled(
                PendingAction::Greet { name: "Ada".into() },
                "greet",
                Err(BenchError::WorkerLost { command: "greet" }),
            ),
        );
        assert!(state.log.is_empty());
        assert!(state.greeting.is_empty());
    }

    #[test]
    fn test_probe_success_logs_reply_verbatim() {
        let mut state = SessionState::default();
        apply_settled(
            &mut state,
            settled(PendingAction::Probe, "ping", Ok(CallValue::Text("pong: hi".into()))),
        );
        assert_eq!(state.log.latest().unwrap().message, "pong: hi");
    }

    #[test]
    fn test_probe_failure_logs_ping_error() {
        let mut state = SessionState::default();
        apply_settled(
            &mut state,
            settled(
                PendingAction::Probe,
                "ping",
                Err(BenchError::WorkerLost { command: "ping" }),
            ),
        );
        assert_eq!(
            state.log.latest().unwrap().message,
            "ping error: ping worker exited without a result"
        );
    }

    #[test]
    fn test_read_success_replaces_buffer_and_counts_chars() {
        let mut state = SessionState::default();
        state.file_contents = "old".into();
        apply_settled(
            &mut state,
            settled(
                PendingAction::ReadFile { path: "a.txt".into() },
                "read_text_file",
                Ok(CallValue::Text("naïve".into())),
            ),
        );
        assert_eq!(state.file_contents, "naïve");
        assert_eq!(state.log.latest().unwrap().message, "read_text_file ok (5 chars)");
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_read_failure_keeps_buffer_and_logs_error() {
        let mut state = SessionState::default();
        state.file_contents = "keep me".into();
        let path = PathBuf::from("a.txt");
        apply_settled(
            &mut state,
            settled(
                PendingAction::ReadFile { path: path.clone() },
                "read_text_file",
                Err(CommandError::ReadFile { path, source: io_err() }.into()),
            ),
        );
        assert_eq!(state.file_contents, "keep me");
        assert_eq!(
            state.log.latest().unwrap().message,
            "read_text_file error: read_text_file failed: denied"
        );
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_write_outcomes() {
        let mut state = SessionState::default();
        let path = PathBuf::from("out.txt");
        apply_settled(
            &mut state,
            settled(
                PendingAction::WriteFile { path: path.clone(), chars: 12 },
                "write_text_file",
                Ok(CallValue::Unit),
            ),
        );
        assert_eq!(state.log.latest().unwrap().message, "write_text_file ok (12 chars)");

        apply_settled(
            &mut state,
            settled(
                PendingAction::WriteFile { path: path.clone(), chars: 12 },
                "write_text_file",
                Err(CommandError::WriteFile { path, source: io_err() }.into()),
            ),
        );
        assert_eq!(
            state.log.latest().unwrap().message,
            "write_text_file error: write_text_file failed: denied"
        );
        assert_eq!(state.log.len(), 2);
    }

    #[test]
    fn test_list_dir_outcomes() {
        let mut state = SessionState::default();
        apply_settled(
            &mut state,
            settled(
                PendingAction::ListDir { path: "d".into() },
                "list_dir",
                Ok(CallValue::Paths(vec!["d/a".into(), "d/b".into()])),
            ),
        );
        assert_eq!(state.dir_entries, vec!["d/a".to_string(), "d/b".to_string()]);
        assert_eq!(state.log.latest().unwrap().message, "list_dir ok (2 entries)");

        apply_settled(
            &mut state,
            settled(
                PendingAction::ListDir { path: "d".into() },
                "list_dir",
                Err(BenchError::WorkerLost { command: "list_dir" }),
            ),
        );
        assert_eq!(state.dir_entries.len(), 2, "failed listing keeps old entries");
        assert!(state.log.latest().unwrap().message.starts_with("list_dir error: "));
    }

    #[test]
    fn test_save_with_empty_buffer_is_ignored() {
        struct NoDialogs;
        impl Dialogs for NoDialogs {
            fn pick_file(&self, _: &str) -> Option<PathBuf> {
                panic!("not expected")
            }
            fn pick_folder(&self, _: &str) -> Option<PathBuf> {
                panic!("not expected")
            }
            fn save_file(&self, _: &str, _: &std::path::Path) -> Option<PathBuf> {
                panic!("dialog must not open for an empty buffer")
            }
        }

        let mut state = SessionState::default();
        let mut bridge = Bridge::new();
        save_file_as(&mut state, &NoDialogs, &mut bridge);
        assert!(!bridge.has_pending());
        assert!(state.log.is_empty());
    }
}
