//! Email button and disclosure panel
//!
//! Draws one [`ContactWidget`]: a single-line Email button, and while the panel
//! is open an overlay next to it with the address and the copy hint.
//!
//! ```text
//!  [ ✉ Email ▴ ]
//! ╭──────────────────────────────────────╮
//! │ My email                  [c] Copy   │
//! │ hello@example.com                    │
//! ╰──────────────────────────────────────╯
//! ```

use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crate::widget::ContactWidget;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows of the open panel, borders included
pub const PANEL_HEIGHT: u16 = 4;

const PANEL_MAX_WIDTH: u16 = 48;
const MIN_PANEL_WIDTH: u16 = 16;
const COPY_HINT: &str = "[c] Copy";

/// Shorten `text` to fit `max` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Where the open panel goes for a button at `button`, kept inside `bounds`
///
/// Below the button when it fits, otherwise above it, otherwise pinned to
/// the bottom of `bounds`. None when `bounds` cannot hold a panel at all.
pub fn panel_placement(button: Rect, bounds: Rect) -> Option<Rect> {
    let x = button.x.max(bounds.x);
    let width = bounds.right().saturating_sub(x).min(PANEL_MAX_WIDTH);
    if width < MIN_PANEL_WIDTH || bounds.height < PANEL_HEIGHT {
        return None;
    }

    let below = button.bottom();
    let y = if below.saturating_add(PANEL_HEIGHT) <= bounds.bottom() {
        below
    } else if button.y >= bounds.y.saturating_add(PANEL_HEIGHT) {
        button.y - PANEL_HEIGHT
    } else {
        bounds.bottom() - PANEL_HEIGHT
    };
    Some(Rect::new(x, y, width, PANEL_HEIGHT))
}

impl ContactWidget {
    /// Draw the open panel as an overlay anchored to the button row
    ///
    /// Called after the whole page so neighbouring sections cannot paint
    /// over it. Does nothing while the panel is closed.
    pub fn render_panel(&self, f: &mut Frame, button: Rect, bounds: Rect, ctx: &RenderContext) {
        if !self.state().is_panel_open() {
            return;
        }
        let Some(panel_area) = panel_placement(button, bounds) else {
            return;
        };
        let theme = ctx.theme;
        let inner_width = panel_area.width.saturating_sub(4) as usize;

        // Label on the left, copy hint pinned to the right
        let label = "My email";
        let gap = inner_width.saturating_sub(label.width() + COPY_HINT.width());
        let header = Line::from(vec![
            Span::styled(label, Style::default().fg(theme.muted)),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                COPY_HINT,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let address = Line::from(Span::styled(
            truncate_to_width(self.email(), inner_width),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.panel_background));

        f.render_widget(Clear, panel_area);
        f.render_widget(
            Paragraph::new(vec![header, address]).block(block),
            panel_area,
        );
    }
}

impl Component for ContactWidget {
    fn id(&self) -> ComponentId {
        ComponentId::Contact(self.slot())
    }

    /// Draws the one-row Email button; the panel is drawn by [`ContactWidget::render_panel`]
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let arrow = if self.state().is_panel_open() { "▴" } else { "▾" };

        let mut button_style = Style::default().fg(theme.accent);
        if focused {
            button_style = button_style
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("[ ✉ Email {} ]", arrow),
                button_style,
            ))),
            Rect::new(area.x, area.y, area.width, 1),
        );
    }
}

impl Interactive for ContactWidget {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('e') | KeyCode::Char('E') => {
                self.toggle();
                Handled::Yes
            }
            // The copy button only exists inside the open panel
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('y')
                if self.state().is_panel_open() =>
            {
                self.copy();
                Handled::Yes
            }
            KeyCode::Esc if self.state().is_panel_open() => {
                self.toggle();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.state().is_panel_open() {
            Some("c:copy  Enter/Esc:close")
        } else {
            Some("Enter:show email")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{MemoryClipboard, SharedClipboard};
    use crate::theme::Theme;
    use crate::widget::WidgetSlot;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn widget() -> (ContactWidget, MemoryClipboard) {
        let (tx, _rx) = mpsc::channel(4);
        let clipboard = MemoryClipboard::new();
        let shared: SharedClipboard = Arc::new(clipboard.clone());
        (
            ContactWidget::new(WidgetSlot::Hero, "hello@example.com", shared, tx),
            clipboard,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(widget: &ContactWidget) -> String {
        let backend = TestBackend::new(50, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, WidgetSlot::Hero);
                let button = Rect::new(0, 0, f.area().width, 1);
                widget.render(f, button, &ctx);
                widget.render_panel(f, button, f.area(), &ctx);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_panel_below_button_when_room() {
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = panel_placement(Rect::new(2, 9, 76, 1), bounds).unwrap();
        assert_eq!(rect, Rect::new(2, 10, 48, PANEL_HEIGHT));
    }

    #[test]
    fn test_panel_flips_above_near_bottom() {
        let bounds = Rect::new(0, 0, 80, 23);
        let rect = panel_placement(Rect::new(2, 20, 76, 1), bounds).unwrap();
        assert_eq!(rect.y, 16);
        assert!(rect.bottom() <= 20);
    }

    #[test]
    fn test_panel_pinned_when_no_room_either_side() {
        let bounds = Rect::new(0, 0, 40, 5);
        let rect = panel_placement(Rect::new(0, 2, 40, 1), bounds).unwrap();
        assert_eq!(rect.y, 1);
        assert!(rect.bottom() <= bounds.bottom());
    }

    #[test]
    fn test_panel_needs_minimum_space() {
        assert!(panel_placement(Rect::new(0, 0, 80, 1), Rect::new(0, 0, 80, 3)).is_none());
        assert!(panel_placement(Rect::new(70, 0, 10, 1), Rect::new(0, 0, 80, 24)).is_none());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[tokio::test]
    async fn test_keys_drive_widget() {
        let (mut widget, clipboard) = widget();

        // Copy does nothing while the panel is closed
        assert_eq!(widget.handle_key(key(KeyCode::Char('c'))), Handled::No);
        assert_eq!(clipboard.contents(), None);

        assert_eq!(widget.handle_key(key(KeyCode::Enter)), Handled::Yes);
        assert!(widget.state().is_panel_open());

        assert_eq!(widget.handle_key(key(KeyCode::Char('c'))), Handled::Yes);
        assert!(!widget.state().is_panel_open());
        assert!(widget.state().is_notification_visible());
        assert_eq!(clipboard.contents().as_deref(), Some("hello@example.com"));
    }

    #[tokio::test]
    async fn test_esc_closes_open_panel_only() {
        let (mut widget, _) = widget();
        assert_eq!(widget.handle_key(key(KeyCode::Esc)), Handled::No);

        widget.toggle();
        assert_eq!(widget.handle_key(key(KeyCode::Esc)), Handled::Yes);
        assert!(!widget.state().is_panel_open());
    }

    #[tokio::test]
    async fn test_render_closed_hides_address() {
        let (widget, _) = widget();
        let screen = draw(&widget);
        assert!(screen.contains("Email"));
        assert!(!screen.contains("hello@example.com"));
    }

    #[tokio::test]
    async fn test_render_open_shows_address() {
        let (mut widget, _) = widget();
        widget.toggle();
        let screen = draw(&widget);
        assert!(screen.contains("hello@example.com"));
        assert!(screen.contains("Copy"));
    }
}
