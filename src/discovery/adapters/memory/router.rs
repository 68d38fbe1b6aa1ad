//! In-memory routing fabric for tests and single-process wiring.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::debug;

use crate::discovery::{
    ports::{IqHandler, IqRouter},
    services::PendingExchanges,
};
use crate::stanza::Iq;

/// Routes stanzas to in-process responders keyed by recipient domain.
///
/// Each routed request is answered on a spawned task, optionally after a
/// fixed delay, and the answer is delivered to the shared
/// [`PendingExchanges`]. Stanzas for domains without a responder are
/// recorded and dropped. Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct InMemoryIqRouter {
    exchanges: Arc<PendingExchanges>,
    state: Arc<RwLock<RouterState>>,
}

#[derive(Default)]
struct RouterState {
    responders: HashMap<String, Arc<dyn IqHandler>>,
    routed: Vec<Iq>,
    response_delay: Option<Duration>,
}

impl InMemoryIqRouter {
    /// Creates a router delivering answers to `exchanges`.
    #[must_use]
    pub fn new(exchanges: Arc<PendingExchanges>) -> Self {
        Self {
            exchanges,
            state: Arc::new(RwLock::new(RouterState::default())),
        }
    }

    /// Makes `responder` answer every stanza addressed to `domain`.
    pub fn add_responder(&self, domain: impl Into<String>, responder: Arc<dyn IqHandler>) {
        if let Ok(mut state) = self.state.write() {
            state.responders.insert(domain.into().to_lowercase(), responder);
        }
    }

    /// Delays every answer by `delay` before delivery.
    pub fn set_response_delay(&self, delay: Duration) {
        if let Ok(mut state) = self.state.write() {
            state.response_delay = Some(delay);
        }
    }

    /// Returns every stanza routed so far, oldest first.
    #[must_use]
    pub fn routed(&self) -> Vec<Iq> {
        self.state
            .read()
            .map(|state| state.routed.clone())
            .unwrap_or_default()
    }
}

impl IqRouter for InMemoryIqRouter {
    fn route(&self, stanza: Iq) {
        let Ok(mut state) = self.state.write() else {
            debug!(id = stanza.id(), "router state is poisoned; dropping stanza");
            return;
        };
        state.routed.push(stanza.clone());

        let matched = stanza
            .to()
            .and_then(|to| state.responders.get(to.domain()))
            .cloned();
        let Some(responder) = matched else {
            debug!(id = stanza.id(), to = ?stanza.to(), "no route to recipient; dropping stanza");
            return;
        };
        let delay = state.response_delay;
        drop(state);

        let exchanges = Arc::clone(&self.exchanges);
        tokio::spawn(async move {
            if let Some(pause) = delay {
                tokio::time::sleep(pause).await;
            }
            if let Some(answer) = responder.handle_iq(stanza).await {
                let id = answer.id().to_owned();
                if !exchanges.deliver(answer) {
                    debug!(%id, "answer was not accepted by any pending exchange");
                }
            }
        });
    }
}
