// Status bar component
//
// Bottom line: which widget has focus, the keys that do something right now,
// and the clipboard in use.

use crate::tui::app::App;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GLOBAL_HINT: &str = "Tab:focus  l:logs  q:quit";

/// Text of the status line, without styling
pub fn status_text(app: &App) -> (String, String) {
    let focused = app.focused_widget();
    let left = format!(" {} ", focused.slot().name().to_uppercase());
    let widget_hint = focused.focus_hint().unwrap_or_default();
    let right = format!(
        " {}  │  {}  │  clipboard: {} ",
        widget_hint, GLOBAL_HINT, app.clipboard_name
    );
    (left, right)
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let (left, right) = status_text(app);

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(theme.background)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(right, Style::default().fg(theme.muted)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
