//! Configuration for the portfolio page
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod contact;
mod logging;
mod profile;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use contact::{ClipboardBackend, ContactConfig, FileContact};
pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use profile::{FileProfile, Profile, Project};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "terminal", "midnight", "paper"
    pub theme: String,

    /// Whether to run the TUI (false = headless demo output)
    pub enable_tui: bool,

    /// Who the page is about
    pub profile: Profile,

    /// Project cards, in display order
    pub projects: Vec<Project>,

    /// Contact widget behavior
    pub contact: ContactConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "terminal".to_string(),
            enable_tui: true,
            profile: Profile::default(),
            projects: Project::samples(),
            contact: ContactConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [profile] section
    pub profile: Option<FileProfile>,

    /// Optional [[projects]] array (replaces the samples entirely)
    pub projects: Option<Vec<Project>>,

    /// Optional [contact] section
    pub contact: Option<FileContact>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse a config file body
    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        toml::from_str(contents).context("Invalid config TOML")
    }

    /// Read and parse the config file at `path`
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse_file_config(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the config file exists but cannot be loaded.
    /// A broken config should fail fast with a clear error, not silently
    /// fall back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match Self::read_file_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Failed to load configuration file            ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {:#}\n", e);
                eprintln!("  Tip: Check for:\n");
                eprintln!("    - Missing quotes around string values");
                eprintln!("    - [[projects]] entries missing a title or description");
                eprintln!("    - Typos in section names\n");
                eprintln!("  To reset, run `folio config --reset`.\n");
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with environment lookups over the defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("FOLIO_THEME")
            .or(file.theme)
            .unwrap_or_else(|| "terminal".to_string());

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("FOLIO_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Email: env > file > default
        let mut profile = Profile::from_file(file.profile);
        if let Some(email) = env("FOLIO_EMAIL").filter(|e| !e.trim().is_empty()) {
            profile.email = email;
        }

        let projects = file.projects.unwrap_or_else(Project::samples);
        let contact = ContactConfig::from_file(file.contact);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            enable_tui,
            profile,
            projects,
            contact,
            logging,
        }
    }
}
