//! In-memory credential cache with expiry tracking.

use std::sync::Arc;

use chrono::Duration;
use facture_domain::Credential;
use tokio::sync::Mutex;

use crate::ports::{AuthGateway, Clock};

/// Single-slot in-memory cache over the auth collaborator.
///
/// `get` returns the cached credential while it is fresh and fetches a new
/// one otherwise; absence is the only failure signal. The slot lock is held
/// across the fetch, so a burst of cold calls issues one network request
/// and every caller sees the same credential.
///
/// Nothing is ever persisted; credentials exist only in this slot.
pub struct CredentialCache {
    gateway: Arc<dyn AuthGateway>,
    clock: Arc<dyn Clock>,
    ttl_seconds: i64,
    slot: Mutex<Option<Credential>>,
}

impl CredentialCache {
    /// Creates an empty cache with the given TTL.
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>, clock: Arc<dyn Clock>, ttl_seconds: i64) -> Self {
        Self {
            gateway,
            clock,
            ttl_seconds,
            slot: Mutex::new(None),
        }
    }

    /// Returns a fresh credential, fetching one if the slot is empty or
    /// stale. Returns `None` if the auth collaborator cannot issue one; the
    /// slot is cleared in that case.
    pub async fn get(&self) -> Option<Credential> {
        let mut slot = self.slot.lock().await;
        if let Some(credential) = slot.as_ref() {
            if credential.is_stale(self.clock.now()) {
                *slot = None;
            } else {
                return Some(credential.clone());
            }
        }
        match self.gateway.fetch_token().await {
            Ok(issued) => {
                let expires_at = self.clock.now() + Duration::seconds(self.ttl_seconds);
                let credential = Credential::new(issued.token, expires_at);
                *slot = Some(credential.clone());
                tracing::debug!("credential cache refilled");
                Some(credential)
            }
            Err(error) => {
                tracing::debug!(%error, "token fetch failed");
                *slot = None;
                None
            }
        }
    }

    /// Unconditionally clears the slot; the next `get` fetches.
    ///
    /// Called on logout and on any action that changes the authorization
    /// context, since a cached token may embed tenant-scoped claims.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::testutil::{ManualClock, ScriptedGateway};
    use std::time::Duration as StdDuration;

    fn cache(gateway: &Arc<ScriptedGateway>, clock: &Arc<ManualClock>) -> CredentialCache {
        CredentialCache::new(
            Arc::clone(gateway) as Arc<dyn AuthGateway>,
            Arc::clone(clock) as Arc<dyn Clock>,
            240,
        )
    }

    #[tokio::test]
    async fn test_second_get_within_ttl_hits_cache() {
        let gateway = Arc::new(ScriptedGateway::issuing());
        let clock = Arc::new(ManualClock::default());
        let cache = cache(&gateway, &clock);

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(gateway.fetches(), 1);
    }

    #[tokio::test]
    async fn test_get_after_ttl_fetches_again() {
        let gateway = Arc::new(ScriptedGateway::issuing());
        let clock = Arc::new(ManualClock::default());
        let cache = cache(&gateway, &clock);

        let first = cache.get().await.unwrap();
        clock.advance(Duration::seconds(241));
        let second = cache.get().await.unwrap();

        assert_ne!(first.token, second.token);
        assert_eq!(gateway.fetches(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch_even_when_fresh() {
        let gateway = Arc::new(ScriptedGateway::issuing());
        let clock = Arc::new(ManualClock::default());
        let cache = cache(&gateway, &clock);

        cache.get().await.unwrap();
        cache.invalidate().await;
        cache.get().await.unwrap();

        assert_eq!(gateway.fetches(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_none_and_clears_slot() {
        let gateway = Arc::new(ScriptedGateway::failing_after(1));
        let clock = Arc::new(ManualClock::default());
        let cache = cache(&gateway, &clock);

        cache.get().await.unwrap();
        clock.advance(Duration::seconds(241));
        assert!(cache.get().await.is_none());
        // the stale credential must not resurface
        assert!(cache.get().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_cold_gets_issue_one_fetch() {
        let gateway = Arc::new(
            ScriptedGateway::issuing().with_delay(StdDuration::from_millis(50)),
        );
        let clock = Arc::new(ManualClock::default());
        let cache = cache(&gateway, &clock);

        let (a, b, c) = tokio::join!(cache.get(), cache.get(), cache.get());

        assert_eq!(gateway.fetches(), 1);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
