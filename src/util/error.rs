// TestBench - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Errors are only flattened to strings at the call site that records them
// in the activity log.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Top-level error type for a settled host call or startup step.
#[derive(Debug)]
pub enum BenchError {
    /// A host command ran and failed.
    Command(CommandError),

    /// The worker thread for a call went away without reporting a result.
    WorkerLost { command: &'static str },

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Command errors already carry the command name; keep them verbatim
            // so the activity log shows exactly what the host reported.
            Self::Command(e) => write!(f, "{e}"),
            Self::WorkerLost { command } => {
                write!(f, "{command} worker exited without a result")
            }
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Command(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::WorkerLost { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Failures reported by the host commands.
#[derive(Debug)]
pub enum CommandError {
    /// `read_text_file` could not read the file as UTF-8 text.
    ReadFile { path: PathBuf, source: io::Error },

    /// `write_text_file` could not create or write the file.
    WriteFile { path: PathBuf, source: io::Error },

    /// `list_dir` could not open the directory.
    ReadDir { path: PathBuf, source: io::Error },

    /// `list_dir` failed while iterating directory entries.
    DirEntry { path: PathBuf, source: io::Error },
}

impl CommandError {
    /// Path the failing command operated on.
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadFile { path, .. }
            | Self::WriteFile { path, .. }
            | Self::ReadDir { path, .. }
            | Self::DirEntry { path, .. } => path.as_path(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFile { source, .. } => write!(f, "read_text_file failed: {source}"),
            Self::WriteFile { source, .. } => write!(f, "write_text_file failed: {source}"),
            Self::ReadDir { source, .. } => write!(f, "list_dir read_dir failed: {source}"),
            Self::DirEntry { source, .. } => write!(f, "list_dir entry failed: {source}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFile { source, .. }
            | Self::WriteFile { source, .. }
            | Self::ReadDir { source, .. }
            | Self::DirEntry { source, .. } => Some(source),
        }
    }
}

impl From<CommandError> for BenchError {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for TestBench results.
pub type Result<T> = std::result::Result<T, BenchError>;
