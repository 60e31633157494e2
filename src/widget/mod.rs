//! Contact disclosure widget
//!
//! The page shows the same interaction twice: an Email button in the hero
//! section and another in the contact section. Pressing it reveals a panel
//! with the address and a copy button; copying closes the panel and shows a
//! notice that hides itself after [`DISMISS_AFTER`].
//!
//! ```text
//! ┌──────────────┐  toggle/copy   ┌─────────────────┐
//! │ ContactWidget│ ─────────────▶ │ DisclosureState │  (pure transitions)
//! │  (one per    │ ◀───────────── │    ::apply      │
//! │   slot)      │  TimerCommand  └─────────────────┘
//! │              │ ── schedule ──▶ DismissTimer ── WidgetSignal ──▶ event loop
//! └──────────────┘                                                  │
//!        ▲                        handle_signal                     │
//!        └──────────────────────────────────────────────────────────┘
//! ```

pub mod state;
pub mod timer;

pub use state::{CopyOutcome, CopyPolicy, DisclosureEvent, DisclosureState, Notice, TimerCommand};
pub use timer::{DismissTimer, WidgetSignal, DISMISS_AFTER};

use crate::clipboard::SharedClipboard;
use std::time::Duration;
use tokio::sync::mpsc;

/// Where on the page a widget instance lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetSlot {
    Hero,
    Contact,
}

impl WidgetSlot {
    pub const ALL: [WidgetSlot; 2] = [WidgetSlot::Hero, WidgetSlot::Contact];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetSlot::Hero => "hero",
            WidgetSlot::Contact => "contact",
        }
    }

    /// Next slot in focus order (Tab behavior)
    pub fn next(self) -> Self {
        match self {
            WidgetSlot::Hero => WidgetSlot::Contact,
            WidgetSlot::Contact => WidgetSlot::Hero,
        }
    }
}

/// One independent occurrence of the email disclosure interaction
pub struct ContactWidget {
    slot: WidgetSlot,
    email: String,
    state: DisclosureState,
    policy: CopyPolicy,
    clipboard: SharedClipboard,
    timer: DismissTimer,
}

impl ContactWidget {
    pub fn new(
        slot: WidgetSlot,
        email: impl Into<String>,
        clipboard: SharedClipboard,
        signals: mpsc::Sender<WidgetSignal>,
    ) -> Self {
        Self::with_delay(slot, email, clipboard, signals, DISMISS_AFTER)
    }

    pub fn with_delay(
        slot: WidgetSlot,
        email: impl Into<String>,
        clipboard: SharedClipboard,
        signals: mpsc::Sender<WidgetSignal>,
        delay: Duration,
    ) -> Self {
        Self {
            slot,
            email: email.into(),
            state: DisclosureState::new(),
            policy: CopyPolicy::default(),
            clipboard,
            timer: DismissTimer::new(slot, delay, signals),
        }
    }

    pub fn with_policy(mut self, policy: CopyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn slot(&self) -> WidgetSlot {
        self.slot
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// Whether an auto-dismiss timer is pending
    pub fn dismiss_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Email button: show or hide the panel
    pub fn toggle(&mut self) {
        self.dispatch(DisclosureEvent::Toggle);
    }

    /// Copy button: publish the address, close the panel, show the notice
    ///
    /// The clipboard write, the state change and the timer restart all happen
    /// before this returns.
    pub fn copy(&mut self) -> CopyOutcome {
        let outcome = match self.clipboard.write_text(&self.email) {
            Ok(()) => CopyOutcome::Written,
            Err(e) => {
                tracing::warn!(
                    "[{}] Clipboard write via {} failed: {:#}",
                    self.slot.name(),
                    self.clipboard.name(),
                    e
                );
                CopyOutcome::Failed
            }
        };
        self.dispatch(DisclosureEvent::Copy { outcome });
        outcome
    }

    /// Route a timer signal. Returns true if it changed this widget.
    pub fn handle_signal(&mut self, signal: WidgetSignal) -> bool {
        let WidgetSignal::DismissExpired { slot, generation } = signal;
        if slot != self.slot {
            return false;
        }
        if !self.timer.accept(generation) {
            tracing::trace!(
                "[{}] Ignoring stale dismiss signal (generation {})",
                self.slot.name(),
                generation
            );
            return false;
        }
        self.dispatch(DisclosureEvent::DismissExpired);
        true
    }

    /// Tear down: no dismiss may fire after this
    pub fn unmount(&mut self) {
        if self.timer.is_pending() {
            tracing::debug!("[{}] Unmounted with pending dismiss", self.slot.name());
        }
        self.timer.cancel();
    }

    fn dispatch(&mut self, event: DisclosureEvent) {
        let before = self.state;
        let transition = before.apply(event, self.policy);
        self.state = transition.state;

        match transition.timer {
            Some(TimerCommand::Schedule) => {
                self.timer.schedule();
            }
            Some(TimerCommand::Cancel) => self.timer.cancel(),
            None => {}
        }

        tracing::debug!(
            "[{}] {:?}: panel {} -> {}, notice {:?} -> {:?}",
            self.slot.name(),
            event,
            before.is_panel_open(),
            self.state.is_panel_open(),
            before.notice(),
            self.state.notice()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::sync::Arc;

    const EMAIL: &str = "hello@example.com";

    struct Page {
        hero: ContactWidget,
        contact: ContactWidget,
        clipboard: MemoryClipboard,
        rx: mpsc::Receiver<WidgetSignal>,
    }

    impl Page {
        fn new() -> Self {
            Self::with_clipboard(MemoryClipboard::new(), CopyPolicy::Optimistic)
        }

        fn with_clipboard(clipboard: MemoryClipboard, policy: CopyPolicy) -> Self {
            let (tx, rx) = mpsc::channel(8);
            let shared: SharedClipboard = Arc::new(clipboard.clone());
            Self {
                hero: ContactWidget::new(WidgetSlot::Hero, EMAIL, shared.clone(), tx.clone())
                    .with_policy(policy),
                contact: ContactWidget::new(WidgetSlot::Contact, EMAIL, shared, tx)
                    .with_policy(policy),
                clipboard,
                rx,
            }
        }

        /// Deliver every signal that has fired so far, like the event loop does
        fn pump(&mut self) {
            while let Ok(signal) = self.rx.try_recv() {
                self.hero.handle_signal(signal);
                self.contact.handle_signal(signal);
            }
        }

        /// Advance virtual time to `ms` after the previous call
        async fn wait(&mut self, ms: u64) {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            self.pump();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_copy_dismiss_scenario() {
        let mut page = Page::new();
        assert_eq!(page.hero.state(), DisclosureState::new());

        page.hero.toggle();
        assert!(page.hero.state().is_panel_open());

        assert_eq!(page.hero.copy(), CopyOutcome::Written);
        assert!(!page.hero.state().is_panel_open());
        assert!(page.hero.state().is_notification_visible());
        assert_eq!(page.clipboard.contents().as_deref(), Some(EMAIL));

        page.wait(2999).await;
        assert!(page.hero.state().is_notification_visible());

        page.wait(2).await;
        assert!(!page.hero.state().is_notification_visible());
        assert!(!page.hero.dismiss_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_copy_restarts_window() {
        let mut page = Page::new();
        page.hero.toggle();
        page.hero.copy();

        page.wait(1000).await;
        page.hero.copy();

        // t = 3500: the first copy's deadline has passed
        page.wait(2500).await;
        assert!(page.hero.state().is_notification_visible());

        // t = 4000 (+1ms to let the timer task run first)
        page.wait(501).await;
        assert!(!page.hero.state().is_notification_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopening_panel_cancels_dismiss() {
        let mut page = Page::new();
        page.hero.toggle();
        page.hero.copy();

        page.wait(1000).await;
        page.hero.toggle();
        assert!(page.hero.state().is_panel_open());
        assert!(!page.hero.state().is_notification_visible());
        assert!(!page.hero.dismiss_pending());

        // Nothing fires later and the panel stays open
        page.wait(5000).await;
        assert!(page.hero.state().is_panel_open());
        assert!(page.rx.try_recv().is_err());

        // A later copy still gets its full window
        page.hero.copy();
        page.wait(2999).await;
        assert!(page.hero.state().is_notification_visible());
        page.wait(2).await;
        assert!(!page.hero.state().is_notification_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_instances_are_independent() {
        let mut page = Page::new();

        page.hero.toggle();
        assert!(page.hero.state().is_panel_open());
        assert_eq!(page.contact.state(), DisclosureState::new());

        page.contact.toggle();
        page.contact.copy();
        assert!(page.hero.state().is_panel_open());
        assert!(page.contact.state().is_notification_visible());

        page.wait(3001).await;
        assert!(page.hero.state().is_panel_open());
        assert!(!page.contact.state().is_notification_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_signal_for_other_slot_ignored() {
        let mut page = Page::new();
        page.hero.copy();
        page.wait(3001).await;

        let stray = WidgetSignal::DismissExpired {
            slot: WidgetSlot::Hero,
            generation: 1,
        };
        assert!(!page.contact.handle_signal(stray));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_pending_dismiss() {
        let mut page = Page::new();
        page.contact.copy();
        assert!(page.contact.dismiss_pending());

        page.contact.unmount();
        assert!(!page.contact.dismiss_pending());

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert!(page.rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_optimistic() {
        let mut page = Page::with_clipboard(MemoryClipboard::rejecting(), CopyPolicy::Optimistic);
        page.hero.toggle();

        assert_eq!(page.hero.copy(), CopyOutcome::Failed);
        assert_eq!(page.hero.state().notice(), Some(Notice::Copied));
        assert!(!page.hero.state().is_panel_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_confirmed() {
        let mut page = Page::with_clipboard(MemoryClipboard::rejecting(), CopyPolicy::Confirmed);
        page.hero.toggle();

        assert_eq!(page.hero.copy(), CopyOutcome::Failed);
        assert_eq!(page.hero.state().notice(), Some(Notice::CopyFailed));

        page.wait(3001).await;
        assert!(!page.hero.state().is_notification_visible());
    }
}
