//! Depth-one notification queue with a deadline-driven lifecycle.
//!
//! A notification is `Entering` when shown, `Visible` after
//! [`NOTIFICATION_ENTER_MS`], `Leaving` after [`NOTIFICATION_VISIBLE_MS`] and
//! `Removed` once the exit animation has run. Showing a new notification
//! replaces the current one and discards its pending deadline, so the host
//! only ever needs one scheduled wake-up.

use crate::constants::{NOTIFICATION_ENTER_MS, NOTIFICATION_EXIT_MS, NOTIFICATION_VISIBLE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, #10b981, #059669)",
            Self::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Leaving,
    Removed,
}

impl NotificationPhase {
    /// Phase reached `elapsed_ms` after the notification was shown.
    #[must_use]
    pub const fn at(elapsed_ms: u64) -> Self {
        if elapsed_ms < NOTIFICATION_ENTER_MS {
            Self::Entering
        } else if elapsed_ms < NOTIFICATION_VISIBLE_MS {
            Self::Visible
        } else if elapsed_ms < NOTIFICATION_VISIBLE_MS + NOTIFICATION_EXIT_MS {
            Self::Leaving
        } else {
            Self::Removed
        }
    }

    /// Milliseconds after showing at which the phase after this one begins.
    #[must_use]
    pub const fn ends_at(self) -> Option<u64> {
        match self {
            Self::Entering => Some(NOTIFICATION_ENTER_MS),
            Self::Visible => Some(NOTIFICATION_VISIBLE_MS),
            Self::Leaving => Some(NOTIFICATION_VISIBLE_MS + NOTIFICATION_EXIT_MS),
            Self::Removed => None,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Entering => Self::Visible,
            Self::Visible => Self::Leaving,
            Self::Leaving | Self::Removed => Self::Removed,
        }
    }

    /// CSS transform for the slide-in toast.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Visible => "translateX(0)",
            Self::Entering | Self::Leaving | Self::Removed => "translateX(100%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: NotificationId,
    pub phase: NotificationPhase,
}

#[derive(Debug, Clone)]
struct Active {
    notification: Notification,
    shown_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: u64,
    current: Option<Active>,
}

impl NotificationCenter {
    /// Show a notification at `now_ms`, returning it together with the id of
    /// the notification it replaced.
    pub fn show(
        &mut self,
        text: impl Into<String>,
        severity: Severity,
        now_ms: u64,
    ) -> (Notification, Option<NotificationId>) {
        let replaced = self.current.take().map(|active| active.notification.id);
        self.next_id += 1;
        let notification = Notification {
            id: NotificationId(self.next_id),
            text: text.into(),
            severity,
            phase: NotificationPhase::Entering,
        };
        self.current = Some(Active {
            notification: notification.clone(),
            shown_at: now_ms,
        });
        (notification, replaced)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|active| &active.notification)
    }

    /// Absolute time of the next phase change, if anything is showing.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let active = self.current.as_ref()?;
        active
            .notification
            .phase
            .ends_at()
            .map(|offset| active.shown_at.saturating_add(offset))
    }

    /// Move the current notification forward to `now_ms`, returning every
    /// phase it entered in order. Calling it again at the same time is a no-op.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Transition> {
        let mut transitions = Vec::new();
        let Some(active) = self.current.as_mut() else {
            return transitions;
        };
        let target = NotificationPhase::at(now_ms.saturating_sub(active.shown_at));
        while active.notification.phase < target {
            active.notification.phase = active.notification.phase.next();
            transitions.push(Transition {
                id: active.notification.id,
                phase: active.notification.phase,
            });
        }
        if active.notification.phase == NotificationPhase::Removed {
            self.current = None;
        }
        transitions
    }
}
