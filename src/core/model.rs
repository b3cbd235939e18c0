// TestBench - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Activity log entry
// =============================================================================

/// A single line in the on-screen activity log.
///
/// Entries are created by `ActivityLog::record` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time the entry was recorded, e.g. `14:03:27`.
    pub timestamp: String,

    /// Free-text description of the observed event.
    pub message: String,
}

// =============================================================================
// Host calls
// =============================================================================

/// A request to one of the host commands.
///
/// Arguments are owned so a call can be moved onto a worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Greet { name: String },
    Ping { message: String },
    ReadTextFile { path: PathBuf },
    WriteTextFile { path: PathBuf, contents: String },
    ListDir { path: PathBuf },
}

impl Call {
    /// Wire name of the command this call invokes.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Greet { .. } => "greet",
            Self::Ping { .. } => "ping",
            Self::ReadTextFile { .. } => "read_text_file",
            Self::WriteTextFile { .. } => "write_text_file",
            Self::ListDir { .. } => "list_dir",
        }
    }
}

/// Successful result of a host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallValue {
    /// `greet`, `ping`, `read_text_file`.
    Text(String),
    /// `write_text_file`.
    Unit,
    /// `list_dir`: full child paths, sorted.
    Paths(Vec<String>),
}

impl fmt::Display for CallValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "text ({} chars)", s.chars().count()),
            Self::Unit => write!(f, "()"),
            Self::Paths(p) => write!(f, "{} paths", p.len()),
        }
    }
}

/// Identifier assigned to each issued call, increasing in issue order.
pub type CallId = u64;
