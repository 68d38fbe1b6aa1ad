//! Turns routed requests and asynchronously delivered responses into a
//! single awaited call.

use crate::discovery::ports::IqRouter;
use crate::stanza::Iq;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Errors returned by [`Correlator::send`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CorrelatorError {
    /// Only `get` and `set` stanzas expect an answer.
    #[error("stanza {id} is not a request")]
    NotARequest {
        /// Id of the rejected stanza.
        id: String,
    },

    /// A request with the same correlation id is still awaiting its answer.
    #[error("correlation id {0} is already in flight")]
    DuplicateCorrelationId(String),

    /// The exchange registry lock was poisoned.
    #[error("pending exchange registry is unavailable: {0}")]
    RegistryUnavailable(String),
}

/// Result type for correlator operations.
pub type CorrelatorResult<T> = Result<T, CorrelatorError>;

/// Inboxes of every request currently awaiting an answer, keyed by
/// correlation id.
///
/// The routing fabric calls [`PendingExchanges::deliver`] for every
/// response it receives. Delivery never blocks: an inbox that is full, or
/// an id nobody waits for, drops the response.
#[derive(Debug)]
pub struct PendingExchanges {
    inboxes: RwLock<HashMap<String, mpsc::Sender<Iq>>>,
    capacity: usize,
}

impl PendingExchanges {
    /// Creates an empty registry whose inboxes hold up to `capacity`
    /// responses (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inboxes: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Returns the inbox capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of exchanges awaiting an answer.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.inboxes.read() {
            Ok(inboxes) => inboxes.len(),
            Err(err) => {
                debug!(%err, "pending exchange registry is poisoned");
                0
            }
        }
    }

    /// Returns `true` if no exchange awaits an answer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an exchange awaits an answer for `correlation_id`.
    #[must_use]
    pub fn is_pending(&self, correlation_id: &str) -> bool {
        match self.inboxes.read() {
            Ok(inboxes) => inboxes.contains_key(correlation_id),
            Err(err) => {
                debug!(%correlation_id, %err, "pending exchange registry is poisoned");
                false
            }
        }
    }

    /// Hands a response to the exchange awaiting its id.
    ///
    /// Returns `false` when the response was dropped: it is not a
    /// response, nobody awaits its id (a late answer after a timeout, for
    /// instance), or the inbox is full.
    #[must_use]
    pub fn deliver(&self, response: Iq) -> bool {
        if !response.is_response() {
            debug!(id = response.id(), "refusing to deliver a request stanza");
            return false;
        }

        let Ok(inboxes) = self.inboxes.read() else {
            debug!(id = response.id(), "pending exchange registry is poisoned");
            return false;
        };
        let Some(inbox) = inboxes.get(response.id()) else {
            debug!(
                id = response.id(),
                "no exchange awaits this response; dropping it"
            );
            return false;
        };

        let id = response.id().to_owned();
        match inbox.try_send(response) {
            Ok(()) => {
                trace!(%id, "delivered response");
                true
            }
            Err(err) => {
                debug!(%id, %err, "inbox did not accept response; dropping it");
                false
            }
        }
    }

    fn register(self: &Arc<Self>, correlation_id: &str) -> CorrelatorResult<PendingExchange> {
        let mut inboxes = self
            .inboxes
            .write()
            .map_err(|err| CorrelatorError::RegistryUnavailable(err.to_string()))?;
        if inboxes.contains_key(correlation_id) {
            return Err(CorrelatorError::DuplicateCorrelationId(
                correlation_id.to_owned(),
            ));
        }

        let (sender, inbox) = mpsc::channel(self.capacity);
        inboxes.insert(correlation_id.to_owned(), sender);
        Ok(PendingExchange {
            correlation_id: correlation_id.to_owned(),
            inbox,
            registry: Arc::clone(self),
        })
    }

    fn deregister(&self, correlation_id: &str) {
        match self.inboxes.write() {
            Ok(mut inboxes) => {
                inboxes.remove(correlation_id);
            }
            Err(err) => debug!(%correlation_id, %err, "could not deregister exchange"),
        }
    }
}

impl Default for PendingExchanges {
    fn default() -> Self {
        Self::new(DEFAULT_INBOX_CAPACITY)
    }
}

/// Inbox capacity used by [`PendingExchanges::default`].
pub const DEFAULT_INBOX_CAPACITY: usize = 8;

/// One request awaiting its answer. Deregisters itself when dropped.
struct PendingExchange {
    correlation_id: String,
    inbox: mpsc::Receiver<Iq>,
    registry: Arc<PendingExchanges>,
}

impl Drop for PendingExchange {
    fn drop(&mut self) {
        self.registry.deregister(&self.correlation_id);
    }
}

/// Sends requests through an [`IqRouter`] and awaits the correlated answer.
pub struct Correlator<R>
where
    R: IqRouter,
{
    router: Arc<R>,
    exchanges: Arc<PendingExchanges>,
    timeout: Duration,
    cancellation: watch::Sender<u64>,
}

impl<R> Correlator<R>
where
    R: IqRouter,
{
    /// Creates a correlator.
    ///
    /// `exchanges` must be the registry the router's fabric delivers
    /// responses to.
    #[must_use]
    pub fn new(router: Arc<R>, exchanges: Arc<PendingExchanges>, timeout: Duration) -> Self {
        let (cancellation, _) = watch::channel(0);
        Self {
            router,
            exchanges,
            timeout,
            cancellation,
        }
    }

    /// Returns the registry responses are delivered to.
    #[must_use]
    pub const fn exchanges(&self) -> &Arc<PendingExchanges> {
        &self.exchanges
    }

    /// Routes `request` and waits for its answer.
    ///
    /// The request id is the correlation id; an empty id is replaced by a
    /// fresh one. The exchange is registered before the request is routed
    /// and removed again however the wait ends.
    ///
    /// Returns `Ok(None)` when no answer arrives within the ceiling or the
    /// wait is cancelled through [`Correlator::cancel_all`].
    ///
    /// # Errors
    ///
    /// Returns [`CorrelatorError::NotARequest`] for `result` and `error`
    /// stanzas, and [`CorrelatorError::DuplicateCorrelationId`] when the id
    /// is already awaiting an answer.
    pub async fn send(&self, request: Iq) -> CorrelatorResult<Option<Iq>> {
        if !request.is_request() {
            return Err(CorrelatorError::NotARequest {
                id: request.id().to_owned(),
            });
        }

        let outbound = if request.id().is_empty() {
            request.with_id(Uuid::new_v4().to_string())
        } else {
            request
        };
        let correlation_id = outbound.id().to_owned();
        let recipient = outbound.to().map(ToString::to_string);

        let mut cancelled = self.cancellation.subscribe();
        let mut exchange = self.exchanges.register(&correlation_id)?;

        trace!(%correlation_id, ?recipient, "querying external entity");
        self.router.route(outbound);

        tokio::select! {
            outcome = time::timeout(self.timeout, exchange.inbox.recv()) => match outcome {
                Ok(answer) => Ok(answer),
                Err(_) => {
                    warn!(
                        %correlation_id,
                        ?recipient,
                        "an answer to a previously sent IQ stanza was never received"
                    );
                    Ok(None)
                }
            },
            _ = cancelled.changed() => {
                debug!(%correlation_id, "wait for answer cancelled");
                Ok(None)
            }
        }
    }

    /// Ends every wait in flight; each behaves as if it had timed out.
    ///
    /// Requests sent afterwards are unaffected.
    pub fn cancel_all(&self) {
        self.cancellation
            .send_modify(|generation| *generation = generation.wrapping_add(1));
    }
}
