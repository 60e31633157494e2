//! Disclosure state machine
//!
//! Each widget instance owns one [`DisclosureState`]. All changes go through
//! [`DisclosureState::apply`], a pure function from (state, event) to the next
//! state plus an optional command for the dismiss timer. Nothing here touches
//! the clipboard, the clock or the terminal.
//!
//! ```text
//!   Hidden ──Toggle──▶ Panel ──Copy──▶ Notice ──DismissExpired──▶ Hidden
//!          ◀──Toggle──                 │  ▲
//!                                      │  └── Copy (timer restarts)
//!                                      └───── Toggle ──▶ Panel (timer cancelled)
//! ```

/// Message shown by the transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Email address landed on the clipboard (or is assumed to have)
    Copied,
    /// Clipboard write was rejected and the policy asked to say so
    CopyFailed,
}

impl Notice {
    /// Text for the toast overlay
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Copied => "✓ Email copied to clipboard",
            Notice::CopyFailed => "✗ Could not copy email",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::CopyFailed)
    }
}

/// Result of the platform clipboard write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Written,
    Failed,
}

/// How a copy outcome maps to the notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyPolicy {
    /// Always announce success, whatever the clipboard said
    #[default]
    Optimistic,
    /// Announce success only for confirmed writes; failures get their own notice
    Confirmed,
}

impl CopyPolicy {
    /// Parse policy string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "confirmed" | "strict" => Self::Confirmed,
            _ => Self::Optimistic,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Confirmed => "confirmed",
        }
    }

    fn notice_for(&self, outcome: CopyOutcome) -> Notice {
        match (self, outcome) {
            (Self::Confirmed, CopyOutcome::Failed) => Notice::CopyFailed,
            _ => Notice::Copied,
        }
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// Email button pressed
    Toggle,
    /// Copy button pressed; the clipboard write has already been attempted
    Copy { outcome: CopyOutcome },
    /// The pending auto-dismiss timer fired
    DismissExpired,
}

/// Work the host must do on the dismiss timer after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Drop any pending timer and start a fresh one
    Schedule,
    /// Drop any pending timer
    Cancel,
}

/// Next state plus the timer side effect it requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: DisclosureState,
    pub timer: Option<TimerCommand>,
}

/// Per-instance disclosure state
///
/// Invariant: the panel and the notice are never visible together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisclosureState {
    panel_open: bool,
    notice: Option<Notice>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn is_notification_visible(&self) -> bool {
        self.notice.is_some()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Compute the transition for `event`
    pub fn apply(self, event: DisclosureEvent, policy: CopyPolicy) -> Transition {
        match event {
            DisclosureEvent::Toggle if self.panel_open => Transition {
                state: Self {
                    panel_open: false,
                    notice: None,
                },
                timer: None,
            },
            DisclosureEvent::Toggle => Transition {
                state: Self {
                    panel_open: true,
                    notice: None,
                },
                // Opening the panel hides the notice now; its timer must not fire later
                timer: self.notice.map(|_| TimerCommand::Cancel),
            },
            DisclosureEvent::Copy { outcome } => Transition {
                state: Self {
                    panel_open: false,
                    notice: Some(policy.notice_for(outcome)),
                },
                timer: Some(TimerCommand::Schedule),
            },
            DisclosureEvent::DismissExpired => Transition {
                state: Self {
                    panel_open: self.panel_open,
                    notice: None,
                },
                timer: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: DisclosureEvent = DisclosureEvent::Copy {
        outcome: CopyOutcome::Written,
    };
    const FAILED: DisclosureEvent = DisclosureEvent::Copy {
        outcome: CopyOutcome::Failed,
    };

    fn run(events: &[DisclosureEvent], policy: CopyPolicy) -> DisclosureState {
        events
            .iter()
            .fold(DisclosureState::new(), |s, e| s.apply(*e, policy).state)
    }

    #[test]
    fn test_starts_hidden() {
        let state = DisclosureState::new();
        assert!(!state.is_panel_open());
        assert!(!state.is_notification_visible());
    }

    #[test]
    fn test_toggle_flips_panel() {
        let open = DisclosureState::new().apply(DisclosureEvent::Toggle, CopyPolicy::Optimistic);
        assert!(open.state.is_panel_open());
        assert_eq!(open.timer, None);

        let closed = open
            .state
            .apply(DisclosureEvent::Toggle, CopyPolicy::Optimistic);
        assert!(!closed.state.is_panel_open());
        assert_eq!(closed.timer, None);
    }

    #[test]
    fn test_copy_closes_panel_and_shows_notice() {
        let state = run(&[DisclosureEvent::Toggle], CopyPolicy::Optimistic);
        let t = state.apply(OK, CopyPolicy::Optimistic);

        assert!(!t.state.is_panel_open());
        assert_eq!(t.state.notice(), Some(Notice::Copied));
        assert_eq!(t.timer, Some(TimerCommand::Schedule));
    }

    #[test]
    fn test_copy_with_panel_already_closed() {
        let t = DisclosureState::new().apply(OK, CopyPolicy::Optimistic);
        assert!(!t.state.is_panel_open());
        assert!(t.state.is_notification_visible());
        assert_eq!(t.timer, Some(TimerCommand::Schedule));
    }

    #[test]
    fn test_repeat_copy_reschedules() {
        let state = run(&[DisclosureEvent::Toggle, OK], CopyPolicy::Optimistic);
        let t = state.apply(OK, CopyPolicy::Optimistic);
        assert_eq!(t.state.notice(), Some(Notice::Copied));
        assert_eq!(t.timer, Some(TimerCommand::Schedule));
    }

    #[test]
    fn test_toggle_during_notice_cancels_timer() {
        let state = run(&[DisclosureEvent::Toggle, OK], CopyPolicy::Optimistic);
        let t = state.apply(DisclosureEvent::Toggle, CopyPolicy::Optimistic);

        assert!(t.state.is_panel_open());
        assert!(!t.state.is_notification_visible());
        assert_eq!(t.timer, Some(TimerCommand::Cancel));
    }

    #[test]
    fn test_dismiss_hides_notice_only() {
        let state = run(&[OK], CopyPolicy::Optimistic);
        let t = state.apply(DisclosureEvent::DismissExpired, CopyPolicy::Optimistic);
        assert_eq!(t.state, DisclosureState::new());
        assert_eq!(t.timer, None);
    }

    #[test]
    fn test_optimistic_policy_ignores_failure() {
        let state = run(&[DisclosureEvent::Toggle, FAILED], CopyPolicy::Optimistic);
        assert_eq!(state.notice(), Some(Notice::Copied));
    }

    #[test]
    fn test_confirmed_policy_reports_failure() {
        let state = run(&[DisclosureEvent::Toggle, FAILED], CopyPolicy::Confirmed);
        assert_eq!(state.notice(), Some(Notice::CopyFailed));
        assert!(!state.is_panel_open());

        let state = run(&[DisclosureEvent::Toggle, OK], CopyPolicy::Confirmed);
        assert_eq!(state.notice(), Some(Notice::Copied));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(CopyPolicy::from_str("Confirmed"), CopyPolicy::Confirmed);
        assert_eq!(CopyPolicy::from_str("optimistic"), CopyPolicy::Optimistic);
        assert_eq!(CopyPolicy::from_str("bogus"), CopyPolicy::Optimistic);
    }

    /// Walk every event sequence up to length 7 and check that the panel and
    /// the notice never show together.
    #[test]
    fn test_panel_and_notice_mutually_exclusive() {
        const EVENTS: [DisclosureEvent; 4] = [
            DisclosureEvent::Toggle,
            OK,
            FAILED,
            DisclosureEvent::DismissExpired,
        ];

        fn walk(state: DisclosureState, depth: usize, policy: CopyPolicy) {
            assert!(
                !(state.is_panel_open() && state.is_notification_visible()),
                "panel and notice visible together: {:?}",
                state
            );
            if depth == 0 {
                return;
            }
            for event in EVENTS {
                let t = state.apply(event, policy);
                if matches!(event, DisclosureEvent::Copy { .. }) {
                    assert!(!t.state.is_panel_open());
                    assert!(t.state.is_notification_visible());
                }
                walk(t.state, depth - 1, policy);
            }
        }

        walk(DisclosureState::new(), 7, CopyPolicy::Optimistic);
        walk(DisclosureState::new(), 7, CopyPolicy::Confirmed);
    }
}
