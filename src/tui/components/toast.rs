//! Toast notification component
//!
//! A non-blocking overlay in the top-right corner, on top of all other
//! content. The toast has no clock of its own: it is drawn for as long as the
//! owning widget's notice is visible, and the widget's dismiss timer decides
//! when that ends.

use crate::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use crate::widget::{Notice, WidgetSlot};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows one toast occupies, borders included
pub const TOAST_HEIGHT: u16 = 3;

/// A notice from one widget, ready to draw
pub struct Toast {
    pub slot: WidgetSlot,
    pub notice: Notice,
    /// Position in the stack, 0 = topmost
    pub index: u16,
}

impl Toast {
    pub fn new(slot: WidgetSlot, notice: Notice, index: u16) -> Self {
        Self {
            slot,
            notice,
            index,
        }
    }

    /// Where this toast goes inside `area`, or None if it does not fit
    pub fn placement(&self, area: Rect) -> Option<Rect> {
        let message = self.notice.message();
        // Add 4 for padding (1 char each side) and border
        let width = (message.width() as u16 + 4).min(area.width.saturating_sub(2));
        let x = area.right().saturating_sub(width + 2);
        let y = area.y + 1 + self.index * TOAST_HEIGHT;

        if width < 5 || y + TOAST_HEIGHT > area.bottom() {
            return None;
        }
        Some(Rect::new(x, y, width, TOAST_HEIGHT))
    }

    fn border_color(&self, theme: &Theme) -> ratatui::style::Color {
        if self.notice.is_failure() {
            theme.error
        } else {
            theme.accent
        }
    }
}

impl Component for Toast {
    fn id(&self) -> ComponentId {
        ComponentId::Toast
    }

    /// Uses `Clear` so the toast is visible on top of other content.
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let Some(toast_area) = self.placement(area) else {
            return;
        };
        let theme = ctx.theme;

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(self.border_color(theme)))
            .style(Style::default().bg(theme.panel_background));

        let text = Paragraph::new(self.notice.message())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
