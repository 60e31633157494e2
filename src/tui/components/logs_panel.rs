//! Logs pane
//!
//! Shows the tail of the in-memory log buffer so widget transitions and
//! clipboard failures can be watched without leaving the page.

use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Read-only view over the shared log buffer
pub struct LogsPanel<'a> {
    buffer: &'a LogBuffer,
}

impl<'a> LogsPanel<'a> {
    pub fn new(buffer: &'a LogBuffer) -> Self {
        Self { buffer }
    }
}

/// One display line per entry
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S%.3f"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.highlight),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

impl Component for LogsPanel<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        // Border rows take two lines
        let visible = area.height.saturating_sub(2) as usize;

        let items: Vec<ListItem> = self
            .buffer
            .recent(visible)
            .iter()
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Logs "),
        );

        f.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_format_log_entry() {
        let entry = LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Warn,
            target: "folio::widget".to_string(),
            message: "[hero] Clipboard write failed".to_string(),
        };
        let line = format_log_entry(&entry);
        assert!(line.contains("WARN "));
        assert!(line.contains("folio::widget: [hero]"));
        assert!(line.ends_with("[hero] Clipboard write failed"));
    }
}
