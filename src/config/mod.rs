//! Configuration for the runbook viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line arguments (highest priority, applied in main)
//! 2. Environment variables
//! 3. Config file (~/.config/runbook/config.toml)
//! 4. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;


/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long a copied step stays highlighted
const DEFAULT_COPY_FEEDBACK_MS: u64 = 1400;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// External runbook file (JSON or TOML); `None` means built-in content
    pub runbook_path: Option<PathBuf>,

    /// Theme name: "Dark", "Light", "Dracula", "Nord"
    pub theme: String,

    /// Lifetime of the "copied" marker on a step, in milliseconds
    pub copy_feedback_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runbook_path: None,
            theme: "Dark".to_string(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            logging: LoggingConfig::default(),
        }
    }
}

/// Log file rotation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to the TUI buffer)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "runbook" -> "runbook.2024-01-15.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "runbook".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (everything optional; missing keys fall back)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub runbook_path: Option<String>,
    pub theme: Option<String>,
    pub copy_feedback_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Logging settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/runbook/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("runbook").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist.
    /// Called during startup to help users discover configuration options.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write the commented template (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists.
    ///
    /// A missing file is fine (defaults apply). A file that exists but does
    /// not parse is fatal: failing fast with a clear error beats silently
    /// running with defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}", path.display());
                    eprintln!("  {e}");
                    eprintln!("  To reset, delete the file and restart runbook.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Cannot read config file {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    /// Apply file values over defaults (no environment involved; testable)
    pub(crate) fn from_file(file: FileConfig) -> Self {
        let defaults = Self::default();

        Self {
            runbook_path: file.runbook_path.map(PathBuf::from),
            theme: file.theme.unwrap_or(defaults.theme),
            copy_feedback_ms: file.copy_feedback_ms.unwrap_or(defaults.copy_feedback_ms),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Self {
        let mut config = Self::from_file(Self::load_file_config());

        // Runbook file: env > file
        if let Ok(path) = std::env::var("RUNBOOK_FILE") {
            config.runbook_path = Some(PathBuf::from(path));
        }

        // Theme: env > file
        if let Ok(theme) = std::env::var("RUNBOOK_THEME") {
            config.theme = theme;
        }

        config
    }

    /// Marker lifetime as a [`Duration`]
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Serialize to the commented config-file template.
    /// Single source of truth for the config file format.
    pub fn to_toml(&self) -> String {
        let runbook_line = match &self.runbook_path {
            Some(path) => format!("runbook_path = \"{}\"", path.display()),
            None => "# runbook_path = \"/path/to/runbook.json\"".to_string(),
        };

        format!(
            r#"# runbook configuration
# Values here are overridden by RUNBOOK_FILE / RUNBOOK_THEME and CLI flags.
# Delete this file and restart to regenerate the defaults.

# External runbook file (JSON or TOML). Built-in cheat sheets when unset.
{runbook_line}

theme = "{theme}"              # Dark, Light, Dracula, Nord
copy_feedback_ms = {feedback}    # how long a copied step stays highlighted

[logging]
level = "{level}"             # trace, debug, info, warn, error
file_enabled = {file_enabled}        # also write JSON logs to rotating files
file_dir = "{file_dir}"
file_rotation = "{rotation}"    # hourly, daily, never
file_prefix = "{prefix}"
"#,
            runbook_line = runbook_line,
            theme = self.theme,
            feedback = self.copy_feedback_ms,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            rotation = self.logging.file_rotation.as_str(),
            prefix = self.logging.file_prefix,
        )
    }
}
