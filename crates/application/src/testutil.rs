//! Shared in-memory test doubles for the application ports.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use facture_domain::{ApiRequest, ApiResponse, IssuedToken, Toast};

use crate::ports::{
    AuthGateway, AuthGatewayError, Clock, Navigator, Notifier, Transport, TransportError,
};

/// Clock that only moves when told to.
pub struct ManualClock {
    now: StdMutex<DateTime<Utc>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: StdMutex::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
        }
    }
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Real wall clock, for tests that never cross a TTL boundary.
pub struct SystemClockStub;

impl Clock for SystemClockStub {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Gateway issuing `token-1`, `token-2`, ... per fetch, with optional delay
/// and an optional point after which every fetch fails.
pub struct ScriptedGateway {
    fetches: AtomicUsize,
    sign_outs: AtomicUsize,
    fail_after: Option<usize>,
    delay: StdDuration,
}

impl ScriptedGateway {
    /// Issues tokens forever.
    pub const fn issuing() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            sign_outs: AtomicUsize::new(0),
            fail_after: None,
            delay: StdDuration::ZERO,
        }
    }

    /// Issues `limit` tokens, then reports no session.
    pub const fn failing_after(limit: usize) -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            sign_outs: AtomicUsize::new(0),
            fail_after: Some(limit),
            delay: StdDuration::ZERO,
        }
    }

    /// Never issues a token.
    pub const fn never() -> Self {
        Self::failing_after(0)
    }

    /// Adds a delay before each fetch resolves.
    pub const fn with_delay(mut self, delay: StdDuration) -> Self {
        self.delay = delay;
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn sign_outs(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for ScriptedGateway {
    async fn fetch_token(&self) -> Result<IssuedToken, AuthGatewayError> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        if self.delay > StdDuration::ZERO {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail_after.is_some_and(|limit| n > limit) {
            return Err(AuthGatewayError::NoSession);
        }
        Ok(IssuedToken::new(format!("token-{n}")))
    }

    async fn sign_out(&self) -> Result<(), AuthGatewayError> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn has_session(&self) -> bool {
        self.fail_after != Some(0)
    }
}

enum Gate {
    AcceptToken(String),
    AcceptAnyBearer,
    AcceptUnauthenticated,
    RejectAll,
}

/// Transport that answers 200 or 401 purely by looking at the bearer, and
/// records every send.
pub struct GatedTransport {
    gate: Gate,
    log: StdMutex<Vec<(String, Option<String>)>>,
}

impl GatedTransport {
    fn with_gate(gate: Gate) -> Self {
        Self {
            gate,
            log: StdMutex::new(Vec::new()),
        }
    }

    /// 200 only for the given bearer token.
    pub fn accepting(token: &str) -> Self {
        Self::with_gate(Gate::AcceptToken(token.to_string()))
    }

    /// 200 for any bearer token.
    pub fn accept_any() -> Self {
        Self::with_gate(Gate::AcceptAnyBearer)
    }

    /// 200 only for unauthenticated sends.
    pub fn accept_unauthenticated() -> Self {
        Self::with_gate(Gate::AcceptUnauthenticated)
    }

    /// 401 for everything.
    pub fn reject_all() -> Self {
        Self::with_gate(Gate::RejectAll)
    }

    /// Every send so far as `(path, bearer)`, in order.
    pub fn sends(&self) -> Vec<(String, Option<String>)> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, TransportError> {
        // suspend once so overlapping requests are all in flight before any
        // response is observed, as they would be on a real network
        tokio::task::yield_now().await;
        self.log
            .lock()
            .unwrap()
            .push((request.path.clone(), bearer.map(str::to_string)));
        let pass = match &self.gate {
            Gate::AcceptToken(token) => bearer == Some(token.as_str()),
            Gate::AcceptAnyBearer => bearer.is_some(),
            Gate::AcceptUnauthenticated => bearer.is_none(),
            Gate::RejectAll => false,
        };
        let status = if pass { 200 } else { 401 };
        Ok(ApiResponse::new(
            status,
            HashMap::new(),
            br#"{"ok":true}"#.to_vec(),
        ))
    }
}

/// Transport returning one fixed response or failure for every send.
pub struct FixedTransport {
    outcome: Result<(u16, Vec<u8>), TransportError>,
}

impl FixedTransport {
    /// Always answers with the given status and body.
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok((status, body.as_bytes().to_vec())),
        }
    }

    /// Always fails with the given transport error.
    pub fn failing(error: TransportError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl Transport for FixedTransport {
    async fn send(
        &self,
        _request: &ApiRequest,
        _bearer: Option<&str>,
    ) -> Result<ApiResponse, TransportError> {
        match &self.outcome {
            Ok((status, body)) => Ok(ApiResponse::new(*status, HashMap::new(), body.clone())),
            Err(error) => Err(error.clone()),
        }
    }
}

/// Transport replaying a queue of canned JSON responses and recording every
/// request, for exercising the typed resource surface.
#[derive(Default)]
pub struct CannedTransport {
    responses: StdMutex<VecDeque<(u16, Vec<u8>)>>,
    log: StdMutex<Vec<ApiRequest>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self {
            responses: StdMutex::new(VecDeque::new()),
            log: StdMutex::new(Vec::new()),
        }
    }

    /// Queues one response; sends beyond the queue answer 200 `{}`.
    pub fn push(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.as_bytes().to_vec()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        _bearer: Option<&str>,
    ) -> Result<ApiResponse, TransportError> {
        self.log.lock().unwrap().push(request.clone());
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((200, b"{}".to_vec()));
        Ok(ApiResponse::new(status, HashMap::new(), body))
    }
}

/// Wires an [`crate::client::ApiClient`] over a canned transport, for
/// resource-surface tests.
pub fn canned_client() -> (
    std::sync::Arc<crate::client::ApiClient>,
    std::sync::Arc<CannedTransport>,
    std::sync::Arc<ScriptedGateway>,
) {
    use std::sync::Arc;

    let transport = Arc::new(CannedTransport::new());
    let gateway = Arc::new(ScriptedGateway::issuing());
    let config = crate::config::ClientConfig::new("https://api.test").unwrap();
    let client = Arc::new(crate::client::ApiClient::new(
        &config,
        Arc::clone(&transport) as Arc<dyn Transport>,
        Arc::clone(&gateway) as Arc<dyn AuthGateway>,
        Arc::new(SystemClockStub),
        Arc::new(RecordingNavigator::default()),
        Arc::new(RecordingNotifier::default()),
    ));
    (client, transport, gateway)
}

/// Counts forced-logout navigations.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: AtomicUsize,
}

impl RecordingNavigator {
    pub fn visits(&self) -> usize {
        self.visits.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.visits.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every raised toast.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: StdMutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: &Toast) {
        self.toasts.lock().unwrap().push(toast.clone());
    }
}
