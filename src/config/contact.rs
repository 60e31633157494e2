//! Contact widget configuration
//!
//! Controls what the copy button does when the clipboard refuses a write and
//! which clipboard it writes to.

use crate::widget::CopyPolicy;
use serde::Deserialize;

/// Which clipboard the copy button publishes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClipboardBackend {
    /// Platform clipboard (arboard)
    #[default]
    System,
    /// In-process buffer; nothing leaves the program
    Memory,
}

impl ClipboardBackend {
    /// Parse backend string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "none" => Self::Memory,
            _ => Self::System,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Memory => "memory",
        }
    }
}

/// Contact widget settings
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Heading of the contact section
    pub heading: String,
    /// Line under the heading
    pub blurb: String,
    /// Whether a failed clipboard write still reports success
    pub copy_policy: CopyPolicy,
    /// Clipboard the copy button writes to
    pub clipboard: ClipboardBackend,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Keep In Touch.".to_string(),
            blurb: "Feel free to get in touch and talk more about your projects.".to_string(),
            copy_policy: CopyPolicy::Optimistic,
            clipboard: ClipboardBackend::System,
        }
    }
}

/// Contact settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileContact {
    pub heading: Option<String>,
    pub blurb: Option<String>,
    pub copy_policy: Option<String>,
    pub clipboard: Option<String>,
}

impl ContactConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileContact>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            heading: file.heading.unwrap_or(defaults.heading),
            blurb: file.blurb.unwrap_or(defaults.blurb),
            copy_policy: file
                .copy_policy
                .map(|s| CopyPolicy::from_str(&s))
                .unwrap_or(defaults.copy_policy),
            clipboard: file
                .clipboard
                .map(|s| ClipboardBackend::from_str(&s))
                .unwrap_or(defaults.clipboard),
        }
    }
}
