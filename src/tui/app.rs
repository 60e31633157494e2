// TUI application state
//
// Holds the page content, the two contact widgets and the bits of UI state
// around them (focus, logs pane, quit flag).

use super::input::InputHandler;
use super::traits::Interactive;
use crate::clipboard::SharedClipboard;
use crate::config::{Config, ContactConfig, Profile, Project};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crate::widget::{ContactWidget, WidgetSignal, WidgetSlot};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    /// Email button in the hero section
    pub hero: ContactWidget,

    /// Email button in the contact section
    pub contact: ContactWidget,

    /// Which widget receives toggle/copy keys
    pub focus: WidgetSlot,

    pub theme: Theme,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub contact_text: ContactConfig,

    /// Captured logs for the logs pane
    pub log_buffer: LogBuffer,

    /// Whether the logs pane is shown
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Name of the clipboard sink, for the status bar
    pub clipboard_name: &'static str,

    input: InputHandler,
}

impl App {
    /// Build the page from config. Must be called inside a tokio runtime.
    pub fn new(
        config: &Config,
        clipboard: SharedClipboard,
        signals: mpsc::Sender<WidgetSignal>,
        log_buffer: LogBuffer,
    ) -> Self {
        let email = config.profile.email.clone();
        let policy = config.contact.copy_policy;
        let clipboard_name = clipboard.name();

        let hero = ContactWidget::new(
            WidgetSlot::Hero,
            email.clone(),
            clipboard.clone(),
            signals.clone(),
        )
        .with_policy(policy);
        let contact = ContactWidget::new(WidgetSlot::Contact, email, clipboard, signals)
            .with_policy(policy);

        Self {
            hero,
            contact,
            focus: WidgetSlot::Hero,
            theme: Theme::by_name(&config.theme),
            profile: config.profile.clone(),
            projects: config.projects.clone(),
            contact_text: config.contact.clone(),
            log_buffer,
            show_logs: false,
            should_quit: false,
            clipboard_name,
            input: InputHandler::new(),
        }
    }

    pub fn widget(&self, slot: WidgetSlot) -> &ContactWidget {
        match slot {
            WidgetSlot::Hero => &self.hero,
            WidgetSlot::Contact => &self.contact,
        }
    }

    pub fn widget_mut(&mut self, slot: WidgetSlot) -> &mut ContactWidget {
        match slot {
            WidgetSlot::Hero => &mut self.hero,
            WidgetSlot::Contact => &mut self.contact,
        }
    }

    pub fn focused_widget(&self) -> &ContactWidget {
        self.widget(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Deliver a timer signal to the widget it belongs to
    pub fn handle_signal(&mut self, signal: WidgetSignal) -> bool {
        let WidgetSignal::DismissExpired { slot, .. } = signal;
        self.widget_mut(slot).handle_signal(signal)
    }

    /// Layered key dispatch: global keys first, then the focused widget
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Release => {
                self.input.handle_key_release(key.code);
                return;
            }
            KeyEventKind::Press | KeyEventKind::Repeat => {}
        }

        if !self.input.handle_key_press(key.code) {
            return;
        }

        if self.handle_global_key(&key) {
            return;
        }

        let focus = self.focus;
        if !self.widget_mut(focus).handle_key(key).was_handled() {
            tracing::trace!("Unhandled key {:?}", key.code);
        }
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.focus_next(),
            KeyCode::Char('l') | KeyCode::Char('L') => self.show_logs = !self.show_logs,
            _ => return false,
        }
        true
    }

    /// Unmount both widgets so no dismiss timer outlives the page
    pub fn shutdown(&mut self) {
        self.hero.unmount();
        self.contact.unmount();
    }
}
