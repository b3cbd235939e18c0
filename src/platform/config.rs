// TestBench - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::{ConfigError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for TestBench configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/testbench/ or %APPDATA%\TestBench\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[bench]` section.
    pub bench: BenchSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[bench]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BenchSection {
    /// Initial contents of the name input.
    pub default_name: Option<String>,
    /// Message sent by the startup ping.
    pub probe_message: Option<String>,
    /// File name suggested by "Save as…" before any file is opened.
    pub default_save_name: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    pub default_name: String,
    pub probe_message: String,
    pub default_save_name: String,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            default_name: constants::DEFAULT_GREET_NAME.to_string(),
            probe_message: constants::DEFAULT_PROBE_MESSAGE.to_string(),
            default_save_name: constants::DEFAULT_SAVE_FILE_NAME.to_string(),
            log_level: None,
        }
    }
}

/// Read and parse config.toml without validating field values.
pub fn read_raw_config(config_path: &Path) -> Result<RawConfig> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;
    let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })?;
    Ok(raw)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(&config_path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate each raw field, accumulating one warning per rejected value.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
            )),
        }
    }

    // -- Bench: default_name --
    if let Some(name) = raw.bench.default_name {
        let chars = name.chars().count();
        if (1..=constants::MAX_GREET_NAME_CHARS).contains(&chars) {
            config.default_name = name;
        } else {
            warnings.push(format!(
                "[bench] default_name must be 1-{} characters (got {chars}). Using default (\"{}\").",
                constants::MAX_GREET_NAME_CHARS,
                constants::DEFAULT_GREET_NAME,
            ));
        }
    }

    // -- Bench: probe_message --
    if let Some(message) = raw.bench.probe_message {
        if message.trim().is_empty() {
            warnings.push(format!(
                "[bench] probe_message is empty. Using default (\"{}\").",
                constants::DEFAULT_PROBE_MESSAGE,
            ));
        } else {
            config.probe_message = message;
        }
    }

    // -- Bench: default_save_name --
    if let Some(name) = raw.bench.default_save_name {
        if is_bare_file_name(&name) {
            config.default_save_name = name;
        } else {
            warnings.push(format!(
                "[bench] default_save_name = \"{name}\" must be a bare file name without \
                 directory separators. Using default (\"{}\").",
                constants::DEFAULT_SAVE_FILE_NAME,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    config
}

/// True if `name` is a single non-empty path component.
fn is_bare_file_name(name: &str) -> bool {
    !name.trim().is_empty()
        && !name.contains(['/', '\\'])
        && name != "."
        && name != ".."
}
