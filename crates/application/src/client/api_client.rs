//! Authenticated HTTP client.
//!
//! However many requests fail authorization at once, exactly one credential
//! refresh runs; every request that failed while it was in flight queues,
//! then replays once against the refreshed credential. A request is never
//! replayed twice: a second rejection is terminal and forces a logout.

use std::sync::{Arc, Mutex, PoisonError};

use facture_domain::{ApiError, ApiRequest, ApiResponse, Credential};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::auth::CredentialCache;
use crate::client::normalizer::ErrorNormalizer;
use crate::client::refresh::{RefreshState, RefreshTicket};
use crate::config::ClientConfig;
use crate::ports::{AuthGateway, Clock, Navigator, Notifier, Transport};

/// Authenticated HTTP client for the Facture backend.
///
/// Owns the credential cache and the refresh state; nothing outside this
/// type mutates either. Cheap to share behind an `Arc`; all methods take
/// `&self`.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    gateway: Arc<dyn AuthGateway>,
    navigator: Arc<dyn Navigator>,
    credentials: CredentialCache,
    normalizer: ErrorNormalizer,
    refresh: Mutex<RefreshState>,
}

impl ApiClient {
    /// Wires the client from its collaborators.
    #[must_use]
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        gateway: Arc<dyn AuthGateway>,
        clock: Arc<dyn Clock>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            credentials: CredentialCache::new(
                Arc::clone(&gateway),
                clock,
                config.credential_ttl_seconds,
            ),
            normalizer: ErrorNormalizer::new(notifier),
            transport,
            gateway,
            navigator,
            refresh: Mutex::new(RefreshState::default()),
        }
    }

    /// Sends one request, transparently healing the first authorization
    /// rejection through a refresh shared with every other failing request.
    ///
    /// # Errors
    /// Returns a normalized [`ApiError`]. All kinds except `Unauthorized`
    /// have already been surfaced to the notifier exactly once.
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let credential = self.credentials.get().await;
        let bearer = credential.as_ref().map(|c| c.token.as_str());
        match self.transport.send(request, bearer).await {
            Ok(response) if response.status == 401 => self.recover_unauthorized(request).await,
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(self.normalizer.status(&response)),
            Err(error) => Err(self.normalizer.transport(&error)),
        }
    }

    /// First 401 for this request: join the refresh cycle, leading it if
    /// nobody else is, then replay exactly once.
    async fn recover_unauthorized(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        // The critical section never suspends; check and set stay atomic.
        let ticket = {
            let mut state = self.refresh.lock().unwrap_or_else(PoisonError::into_inner);
            state.join()
        };
        match ticket {
            RefreshTicket::Leader => self.lead_refresh(request).await,
            RefreshTicket::Waiter(settled) => match settled.await {
                Ok(Some(credential)) => self.replay(request, &credential).await,
                Ok(None) | Err(_) => Err(ApiError::Unauthorized),
            },
        }
    }

    /// Runs the single refresh for this cycle and settles the queue, success
    /// or failure, before replaying the leader's own request.
    async fn lead_refresh(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        tracing::debug!("authorization rejected, refreshing credential");
        self.credentials.invalidate().await;
        let refreshed = self.credentials.get().await;

        let waiters = {
            let mut state = self.refresh.lock().unwrap_or_else(PoisonError::into_inner);
            state.settle()
        };
        for waiter in waiters {
            // a waiter whose caller was cancelled has dropped its receiver
            let _ = waiter.send(refreshed.clone());
        }

        match refreshed {
            Some(credential) => self.replay(request, &credential).await,
            None => {
                tracing::warn!("credential refresh failed, forcing logout");
                self.force_logout().await;
                Err(ApiError::Unauthorized)
            }
        }
    }

    /// Replays a request that already failed authorization once. A second
    /// rejection is terminal; no further refresh is attempted for it.
    async fn replay(
        &self,
        request: &ApiRequest,
        credential: &Credential,
    ) -> Result<ApiResponse, ApiError> {
        let bearer = Some(credential.token.as_str());
        match self.transport.send(request, bearer).await {
            Ok(response) if response.status == 401 => {
                tracing::warn!("replay rejected with a fresh credential, forcing logout");
                self.force_logout().await;
                Err(ApiError::Unauthorized)
            }
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(self.normalizer.status(&response)),
            Err(error) => Err(self.normalizer.transport(&error)),
        }
    }

    /// Clears local auth state, best-effort notifies the auth collaborator,
    /// and navigates to the login entry point.
    pub async fn logout(&self) {
        self.force_logout().await;
    }

    /// Whether the auth collaborator still holds a session for this client.
    pub async fn has_session(&self) -> bool {
        self.gateway.has_session().await
    }

    /// Drops the cached credential so the next request fetches a fresh one.
    ///
    /// Used when the authorization context changes, e.g. after switching
    /// the active organization: the old token embeds tenant-scoped claims.
    pub async fn invalidate_credentials(&self) {
        self.credentials.invalidate().await;
    }

    async fn force_logout(&self) {
        self.credentials.invalidate().await;
        if let Err(error) = self.gateway.sign_out().await {
            tracing::debug!(%error, "sign-out request failed");
        }
        self.navigator.to_login();
    }

    /// Sends and decodes a JSON response.
    ///
    /// # Errors
    /// Propagates the normalized client error; a 2xx body that fails to
    /// decode is a [`ApiError::Server`].
    pub async fn send_json<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response.json().map_err(|e| self.normalizer.decode(&e))
    }

    /// GETs a JSON resource.
    ///
    /// # Errors
    /// Propagates the normalized client error.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(&ApiRequest::get(path)).await
    }

    /// POSTs a JSON payload and decodes the JSON response.
    ///
    /// # Errors
    /// Propagates the normalized client error.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = self.encode(body)?;
        self.send_json(&ApiRequest::post(path, body)).await
    }

    /// PUTs a JSON payload and decodes the JSON response.
    ///
    /// # Errors
    /// Propagates the normalized client error.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = self.encode(body)?;
        self.send_json(&ApiRequest::put(path, body)).await
    }

    /// POSTs with an empty object body, for action endpoints that take no
    /// payload (finalize, convert, switch).
    ///
    /// # Errors
    /// Propagates the normalized client error.
    pub async fn post_action<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(&ApiRequest::post(path, Value::Object(Map::new())))
            .await
    }

    /// DELETEs a resource, ignoring the response body.
    ///
    /// # Errors
    /// Propagates the normalized client error.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(&ApiRequest::delete(path)).await.map(drop)
    }

    /// GETs an opaque byte payload, e.g. a rendered PDF.
    ///
    /// # Errors
    /// Propagates the normalized client error.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        self.send(&ApiRequest::get(path))
            .await
            .map(|response| response.body)
    }

    fn encode<B: Serialize>(&self, body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| self.normalizer.setup(format!("failed to encode body: {e}")))
    }
}
