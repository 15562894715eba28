//! Navigation port

/// Port for the forced-logout navigation side effect.
///
/// Injected so the client core can be exercised without a browser or UI
/// shell; the shell's implementation performs a full-page navigation.
pub trait Navigator: Send + Sync {
    /// Navigates to the login entry point.
    fn to_login(&self);
}
