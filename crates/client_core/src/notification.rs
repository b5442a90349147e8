//! Transient notifications: shown after a short delay, dismissed automatically.

use std::time::Duration;

use shared::domain::{NotificationId, Severity};
use tokio::{sync::mpsc, time::sleep};
use tracing::debug;

pub const ENTRY_DELAY: Duration = Duration::from_millis(100);
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Attached off-screen.
    Mounted,
    Entering,
    Exiting,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<NotificationEvent>,
}

impl Notifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NotificationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Starts the notification timeline and returns immediately.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId::new();
        let message = message.into();
        let tx = self.tx.clone();
        debug!(?severity, %message, "showing notification");

        tokio::spawn(async move {
            let emit = |phase| {
                let _ = tx.send(NotificationEvent {
                    id,
                    message: message.clone(),
                    severity,
                    phase,
                });
            };

            emit(NotificationPhase::Mounted);
            sleep(ENTRY_DELAY).await;
            emit(NotificationPhase::Entering);
            sleep(DISPLAY_DURATION - ENTRY_DELAY).await;
            emit(NotificationPhase::Exiting);
            sleep(EXIT_ANIMATION).await;
            emit(NotificationPhase::Removed);
        });

        id
    }
}

#[cfg(test)]
#[path = "tests/notification_tests.rs"]
mod tests;
