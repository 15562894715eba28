//! Refresh-cycle state
//!
//! One guard flag plus a FIFO queue of waiters. Both are mutated only
//! inside synchronous critical sections with no await point between check
//! and set; that is what keeps the single-flight invariant on a cooperative
//! scheduler.

use facture_domain::Credential;
use tokio::sync::oneshot;

/// Completion handle a queued request waits on. Carries the refreshed
/// credential, or `None` when the refresh failed.
pub(crate) type WaiterHandle = oneshot::Sender<Option<Credential>>;

/// Role assigned to a request whose authorization was rejected.
pub(crate) enum RefreshTicket {
    /// This request runs the refresh and settles the queue.
    Leader,
    /// This request waits for the in-flight refresh to settle.
    Waiter(oneshot::Receiver<Option<Credential>>),
}

/// Guard flag and FIFO waiter queue for the single-flight refresh.
#[derive(Default)]
pub(crate) struct RefreshState {
    in_flight: bool,
    waiters: Vec<WaiterHandle>,
}

impl RefreshState {
    /// Joins the current refresh cycle, starting one if none is in flight.
    pub(crate) fn join(&mut self) -> RefreshTicket {
        if self.in_flight {
            let (tx, rx) = oneshot::channel();
            self.waiters.push(tx);
            RefreshTicket::Waiter(rx)
        } else {
            self.in_flight = true;
            RefreshTicket::Leader
        }
    }

    /// Ends the cycle, handing back the queued waiters in arrival order.
    pub(crate) fn settle(&mut self) -> Vec<WaiterHandle> {
        self.in_flight = false;
        std::mem::take(&mut self.waiters)
    }
}
