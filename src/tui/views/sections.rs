// Page sections
//
// Static content around the two contact widgets. Each function draws one
// section into the area the page layout gave it.

use crate::config::Profile;
use crate::tui::app::App;
use crate::tui::components::disclosure_panel::truncate_to_width;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const PROJECTS_HEIGHT: u16 = 7;
pub const FOOTER_HEIGHT: u16 = 2;

/// Contact section: heading, blurb, blank, links, Email button
pub const CONTACT_HEIGHT: u16 = 5;

/// Rows of hero text above the Email button
pub fn hero_height(profile: &Profile) -> u16 {
    // greeting, name, role, tagline, blank, status lines, blank, links
    let status = u16::try_from(profile.status.len()).unwrap_or(u16::MAX);
    7u16.saturating_add(status)
}

/// One-row slot for the Email button at the bottom of a section
fn button_row(area: Rect) -> Rect {
    let y = area.bottom().saturating_sub(1).max(area.y);
    Rect::new(area.x, y, area.width, area.height.min(1))
}

/// Two columns of left/right margin
fn indent(area: Rect) -> Rect {
    let x = area.x + 2.min(area.width);
    Rect::new(x, area.y, area.width.saturating_sub(4), area.height)
}

/// Social links as `[ Label ] url` pairs
fn links_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for link in &app.profile.links {
        spans.push(Span::styled(
            format!("[ {} ] ", link.label),
            Style::default().fg(app.theme.foreground),
        ));
        spans.push(Span::styled(
            link.url.clone(),
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::UNDERLINED),
        ));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn heading(text: &str, app: &App) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(app.theme.foreground)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draws the hero section and returns the row its Email button occupies
pub fn hero(f: &mut Frame, area: Rect, app: &App, ctx: &RenderContext) -> Rect {
    let theme = &app.theme;
    let profile = &app.profile;
    let inner = indent(area);
    let button = button_row(inner);
    // The button keeps its row; text gives way on short screens
    let text_height = hero_height(profile).min(inner.height.saturating_sub(1));

    let mut lines = vec![
        Line::from(Span::styled(
            profile.greeting.clone(),
            Style::default().fg(theme.accent),
        )),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.role.clone(),
            Style::default().fg(theme.foreground),
        )),
        Line::from(Span::styled(
            profile.tagline.clone(),
            Style::default().fg(theme.muted),
        )),
        Line::default(),
    ];
    lines.extend(
        profile
            .status
            .iter()
            .map(|s| Line::from(Span::styled(s.clone(), Style::default().fg(theme.muted)))),
    );
    lines.push(Line::default());
    lines.push(links_line(app));

    f.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, inner.width, text_height),
    );

    app.hero.render(f, button, ctx);
    button
}

pub fn about(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![heading("About Me", app), Line::default()];
    for paragraph in &app.profile.about {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(app.theme.muted),
        )));
    }

    let inner = indent(area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn projects(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let inner = indent(area);
    if inner.height < 2 {
        return;
    }

    f.render_widget(
        Paragraph::new(heading("Projects", app)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    if app.projects.is_empty() {
        return;
    }

    let grid = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
    let count = app.projects.len() as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); app.projects.len()])
        .split(grid);

    for (project, card) in app.projects.iter().zip(cards.iter()) {
        let text_width = card.width.saturating_sub(2) as usize;
        let mut lines = vec![Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(theme.muted),
        ))];
        if !project.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&project.tags.join(" · "), text_width),
                Style::default().fg(theme.accent),
            )));
        }
        if let Some(url) = &project.url {
            lines.push(Line::from(Span::styled(
                truncate_to_width(url, text_width),
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", truncate_to_width(&project.title, text_width)));

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block),
            *card,
        );
    }
}

/// Draws the contact section and returns the row its Email button occupies
pub fn contact(f: &mut Frame, area: Rect, app: &App, ctx: &RenderContext) -> Rect {
    let inner = indent(area);
    let button = button_row(inner);
    let lines = vec![
        heading(&app.contact_text.heading, app),
        Line::from(Span::styled(
            app.contact_text.blurb.clone(),
            Style::default().fg(app.theme.muted),
        )),
        Line::default(),
        links_line(app),
    ];
    let text_height = (lines.len() as u16).min(inner.height.saturating_sub(1));

    f.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, inner.width, text_height),
    );

    app.contact.render(f, button, ctx);
    button
}

pub fn footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let name = app.profile.name.trim_end_matches('.');
    let lines = vec![
        Line::from(Span::styled(
            format!("Designed and Developed by {}.", name),
            Style::default().fg(theme.foreground),
        )),
        Line::from(vec![
            Span::styled("Built with ", Style::default().fg(theme.muted)),
            Span::styled(app.profile.built_with.clone(), Style::default().fg(theme.accent)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
