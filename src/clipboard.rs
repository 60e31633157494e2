//! Clipboard sinks for copying text to the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The system clipboard is created fresh each time to avoid holding resources.
//! `MemoryClipboard` keeps the text in-process for headless runs and tests.

use crate::config::ClipboardBackend;
use anyhow::{bail, Context, Result};
use arboard::Clipboard;
use std::sync::{Arc, Mutex};

/// Anything the copy button can publish text to
pub trait ClipboardSink: Send + Sync {
    /// Write text, replacing the current contents
    ///
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn write_text(&self, text: &str) -> Result<()>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Handle shared by every widget on the page
pub type SharedClipboard = Arc<dyn ClipboardSink>;

/// Build the sink selected in config
pub fn from_backend(backend: ClipboardBackend) -> SharedClipboard {
    match backend {
        ClipboardBackend::System => Arc::new(SystemClipboard),
        ClipboardBackend::Memory => Arc::new(MemoryClipboard::new()),
    }
}

/// Platform clipboard via arboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// In-process clipboard
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// another to the widgets.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    reject_writes: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write, like a denied permission prompt
    pub fn rejecting() -> Self {
        Self {
            contents: Arc::default(),
            reject_writes: true,
        }
    }

    /// Current contents, if anything was written
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.reject_writes {
            bail!("Clipboard write denied");
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| anyhow::anyhow!("Clipboard buffer poisoned"))?;
        *contents = Some(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_buffer() {
        let clipboard = MemoryClipboard::new();
        let handle = clipboard.clone();
        assert_eq!(handle.contents(), None);

        clipboard.write_text("hello@example.com").unwrap();
        assert_eq!(handle.contents().as_deref(), Some("hello@example.com"));

        clipboard.write_text("other@example.com").unwrap();
        assert_eq!(handle.contents().as_deref(), Some("other@example.com"));
    }

    #[test]
    fn test_rejecting_clipboard_errors() {
        let clipboard = MemoryClipboard::rejecting();
        assert!(clipboard.write_text("x").is_err());
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_from_backend_memory() {
        let sink = from_backend(ClipboardBackend::Memory);
        assert_eq!(sink.name(), "memory");
        assert!(sink.write_text("a").is_ok());
    }
}
