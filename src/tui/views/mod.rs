// Views module - screen-level rendering logic
//
// The whole TUI is one page: hero, about, projects, contact and footer
// stacked top to bottom, an optional logs pane and the status bar. Open
// disclosure panels and toasts are overlays drawn after the page so they sit
// on top of everything.

mod sections;

use super::app::App;
use crate::tui::components::{self, LogsPanel, Toast};
use crate::tui::traits::{Component, RenderContext};
use crate::widget::WidgetSlot;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use sections::{CONTACT_HEIGHT, FOOTER_HEIGHT, PROJECTS_HEIGHT};

/// Height of the logs pane when shown
const LOGS_HEIGHT: u16 = 8;

/// About is only worth drawing with at least this many rows
const MIN_ABOUT_HEIGHT: u16 = 3;

fn take_rows(budget: &mut u16, want: u16) -> u16 {
    let got = want.min(*budget);
    *budget -= got;
    got
}

/// Rows given to each page section, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRows {
    pub hero: u16,
    pub about: u16,
    pub projects: u16,
    pub contact: u16,
    pub footer: u16,
}

impl PageRows {
    /// Share `height` rows between the sections
    ///
    /// Both sections holding an Email button are served first so the buttons
    /// stay on screen. Then the footer, then projects; about takes the rest.
    pub fn fit(height: u16, hero_text: u16) -> Self {
        let mut budget = height;

        let contact = take_rows(&mut budget, CONTACT_HEIGHT);
        let hero = take_rows(&mut budget, hero_text.saturating_add(1));
        let footer = if budget >= FOOTER_HEIGHT {
            take_rows(&mut budget, FOOTER_HEIGHT)
        } else {
            0
        };
        let projects = if budget >= PROJECTS_HEIGHT + MIN_ABOUT_HEIGHT {
            take_rows(&mut budget, PROJECTS_HEIGHT)
        } else {
            0
        };
        let about = budget;

        Self {
            hero,
            about,
            projects,
            contact,
            footer,
        }
    }
}

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let ctx = RenderContext::new(&app.theme, app.focus);

    let mut constraints = vec![Constraint::Min(10)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let shell = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let buttons = draw_page(f, shell[0], app, &ctx);

    if app.show_logs {
        LogsPanel::new(&app.log_buffer).render(f, shell[1], &ctx);
    }
    components::status_bar::render(f, shell[shell.len() - 1], app);

    for (slot, button) in buttons {
        app.widget(slot).render_panel(f, button, shell[0], &ctx);
    }

    for toast in visible_toasts(app) {
        toast.render(f, f.area(), &ctx);
    }
}

/// One toast per widget with a visible notice, hero first
pub fn visible_toasts(app: &App) -> Vec<Toast> {
    WidgetSlot::ALL
        .iter()
        .filter_map(|slot| app.widget(*slot).state().notice().map(|n| (*slot, n)))
        .enumerate()
        .map(|(i, (slot, notice))| Toast::new(slot, notice, i as u16))
        .collect()
}

/// Draw the sections and return where each Email button ended up
fn draw_page(
    f: &mut Frame,
    area: Rect,
    app: &App,
    ctx: &RenderContext,
) -> [(WidgetSlot, Rect); 2] {
    let rows = PageRows::fit(area.height, sections::hero_height(&app.profile));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.hero),
            Constraint::Length(rows.about),
            Constraint::Length(rows.projects),
            Constraint::Length(rows.contact),
            Constraint::Length(rows.footer),
        ])
        .split(area);

    let hero_button = sections::hero(f, chunks[0], app, ctx);
    if rows.about > 0 {
        sections::about(f, chunks[1], app);
    }
    if rows.projects > 0 {
        sections::projects(f, chunks[2], app);
    }
    let contact_button = sections::contact(f, chunks[3], app, ctx);
    if rows.footer > 0 {
        sections::footer(f, chunks[4], app);
    }

    [
        (WidgetSlot::Hero, hero_button),
        (WidgetSlot::Contact, contact_button),
    ]
}
