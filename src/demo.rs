// Demo mode: scripted walkthrough of both contact widgets without a terminal
//
// Drives the hero and contact widgets through the interesting timelines
// (copy then auto-dismiss, a second copy restarting the window, reopening the
// panel cancelling the dismiss) on real tokio timers, and prints the state
// after every step.
//
// Run with: folio demo   (or FOLIO_NO_TUI=1 folio)

use crate::clipboard::{MemoryClipboard, SharedClipboard};
use crate::widget::{ContactWidget, CopyPolicy, Notice, WidgetSignal, WidgetSlot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// What a script step does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle(WidgetSlot),
    Copy(WidgetSlot),
    /// Let time pass, delivering any dismiss signals that fire meanwhile
    Wait(u64),
}

/// State of both widgets after one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub at_ms: u64,
    pub action: Action,
    pub hero: (bool, Option<Notice>),
    pub contact: (bool, Option<Notice>),
}

impl Snapshot {
    fn describe((panel_open, notice): (bool, Option<Notice>)) -> String {
        let panel = if panel_open { "open" } else { "closed" };
        let notice = match notice {
            Some(n) => n.message(),
            None => "-",
        };
        format!("panel {:6} notice {}", panel, notice)
    }

    pub fn format_line(&self) -> String {
        let action = match self.action {
            Action::Toggle(slot) => format!("toggle {}", slot.name()),
            Action::Copy(slot) => format!("copy {}", slot.name()),
            Action::Wait(ms) => format!("wait {}ms", ms),
        };
        format!(
            "t={:>5}ms  {:<16} │ hero: {} │ contact: {}",
            self.at_ms,
            action,
            Self::describe(self.hero),
            Self::describe(self.contact)
        )
    }
}

/// The walkthrough, step by step
pub fn demo_script() -> Vec<Action> {
    use Action::*;
    use WidgetSlot::{Contact, Hero};

    vec![
        // Show, copy, auto-dismiss after 3s
        Toggle(Hero),
        Copy(Hero),
        Wait(2900),
        Wait(200),
        // A second copy at +1s keeps the notice until +4s
        Toggle(Contact),
        Copy(Contact),
        Wait(1000),
        Copy(Contact),
        Wait(2500),
        Wait(600),
        // Reopening the panel hides the notice and cancels its timer
        Copy(Hero),
        Wait(1000),
        Toggle(Hero),
        Wait(3000),
        Toggle(Hero),
    ]
}

/// Run `script` against two fresh widgets and collect a snapshot per step
pub async fn run_script(
    script: &[Action],
    clipboard: SharedClipboard,
    policy: CopyPolicy,
    email: &str,
) -> Vec<Snapshot> {
    let (tx, mut rx) = mpsc::channel(16);
    let mut hero = ContactWidget::new(WidgetSlot::Hero, email, clipboard.clone(), tx.clone())
        .with_policy(policy);
    let mut contact =
        ContactWidget::new(WidgetSlot::Contact, email, clipboard, tx).with_policy(policy);

    let started = Instant::now();
    let mut snapshots = Vec::with_capacity(script.len());

    for action in script {
        match *action {
            Action::Toggle(WidgetSlot::Hero) => hero.toggle(),
            Action::Toggle(WidgetSlot::Contact) => contact.toggle(),
            Action::Copy(WidgetSlot::Hero) => {
                hero.copy();
            }
            Action::Copy(WidgetSlot::Contact) => {
                contact.copy();
            }
            Action::Wait(ms) => {
                let deadline = Instant::now() + Duration::from_millis(ms);
                loop {
                    tokio::select! {
                        _ = tokio::time::sleep_until(deadline) => break,
                        Some(signal) = rx.recv() => {
                            let WidgetSignal::DismissExpired { slot, .. } = signal;
                            match slot {
                                WidgetSlot::Hero => hero.handle_signal(signal),
                                WidgetSlot::Contact => contact.handle_signal(signal),
                            };
                        }
                    }
                }
            }
        }

        let snapshot = Snapshot {
            at_ms: started.elapsed().as_millis() as u64,
            action: *action,
            hero: (hero.state().is_panel_open(), hero.state().notice()),
            contact: (contact.state().is_panel_open(), contact.state().notice()),
        };
        tracing::debug!("{}", snapshot.format_line());
        snapshots.push(snapshot);
    }

    hero.unmount();
    contact.unmount();
    snapshots
}

/// Print the walkthrough to stdout
pub async fn run_demo(email: &str, policy: CopyPolicy) {
    let clipboard = MemoryClipboard::new();
    let shared: SharedClipboard = Arc::new(clipboard.clone());

    println!("folio demo: two contact widgets, {} copy policy", policy.as_str());
    println!();

    let snapshots = run_script(&demo_script(), shared, policy, email).await;
    for snapshot in &snapshots {
        println!("{}", snapshot.format_line());
    }

    println!();
    println!(
        "clipboard (in-memory): {}",
        clipboard.contents().unwrap_or_else(|| "<empty>".to_string())
    );
}
