//! Notification port

use facture_domain::Toast;

/// Port to the UI toast collaborator. Fire-and-forget.
pub trait Notifier: Send + Sync {
    /// Raises one transient notification.
    fn notify(&self, toast: &Toast);
}
