//! Tracing-backed notifier
//!
//! Fallback `Notifier` for headless embedders: toasts land in the log
//! instead of a UI. Shells with a real toast surface supply their own
//! implementation.

use facture_application::ports::Notifier;
use facture_domain::{Severity, Toast};

/// Notifier that writes toasts to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a new tracing notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, toast: &Toast) {
        match toast.severity {
            Severity::Error => tracing::error!(title = %toast.title, "{}", toast.description),
            Severity::Warning => tracing::warn!(title = %toast.title, "{}", toast.description),
            Severity::Info | Severity::Success => {
                tracing::info!(title = %toast.title, "{}", toast.description);
            }
        }
    }
}
