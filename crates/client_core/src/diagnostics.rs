//! Page-level fallback: failures nothing else caught end up on a diagnostic channel.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UncaughtError,
    UnhandledRejection,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub kind: DiagnosticKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Cheap to clone; every clone feeds the same receiver. Reporting never
/// touches display targets.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    tx: mpsc::UnboundedSender<DiagnosticReport>,
}

impl Diagnostics {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DiagnosticReport>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn report(&self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        error!(?kind, %message, "unhandled failure");
        let _ = self.tx.send(DiagnosticReport {
            kind,
            message,
            at: Utc::now(),
        });
    }

    /// Reports the task if it ends in a panic instead of delivering its result.
    pub fn watch(&self, handle: JoinHandle<()>, context: impl Into<String>) {
        let diagnostics = self.clone();
        let context = context.into();
        tokio::spawn(async move {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    diagnostics.report(
                        DiagnosticKind::UnhandledRejection,
                        format!("{context}: task panicked"),
                    );
                }
            }
        });
    }

    /// Forwards process panics to the channel, then runs the previous hook.
    pub fn install_panic_hook(&self) {
        let diagnostics = self.clone();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            diagnostics.report(DiagnosticKind::UncaughtError, info.to_string());
            previous(info);
        }));
    }
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod tests;
