//! IQ handler answering `jabber:iq:agents` queries.

use super::{Correlator, DiscoveryWalker, PendingExchanges};
use crate::config::AgentInformationConfig;
use crate::discovery::{
    domain::NAMESPACE_AGENTS,
    ports::{IqHandler, IqHandlerInfo, IqRouter, SessionRegistry},
};
use crate::stanza::{Element, ErrorCondition, Iq, IqType, StanzaError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};

/// Answers Agent Information (XEP-0094) requests with the agents found by
/// a [`DiscoveryWalker`].
///
/// The protocol is read-only: `set` requests are refused with
/// `feature-not-implemented`, and responses addressed to the handler are
/// ignored.
pub struct AgentInformationHandler<R, S, L>
where
    R: IqRouter,
    S: SessionRegistry,
    L: IqHandler,
{
    walker: DiscoveryWalker<R, S, L>,
    info: IqHandlerInfo,
}

impl<R, S, L> AgentInformationHandler<R, S, L>
where
    R: IqRouter,
    S: SessionRegistry,
    L: IqHandler,
{
    /// Creates a handler backed by `walker`.
    #[must_use]
    pub fn new(walker: DiscoveryWalker<R, S, L>) -> Self {
        Self {
            walker,
            info: IqHandlerInfo::new("query", NAMESPACE_AGENTS),
        }
    }

    /// Wires a handler from `config` and the host collaborators.
    ///
    /// `exchanges` must be the registry the router's fabric delivers
    /// answers to; it is usually created with
    /// [`PendingExchanges::new`] from [`AgentInformationConfig::inbox_capacity`].
    #[must_use]
    pub fn from_config(
        config: &AgentInformationConfig,
        router: Arc<R>,
        exchanges: Arc<PendingExchanges>,
        sessions: Arc<S>,
        local: Arc<L>,
    ) -> Self {
        let correlator = Correlator::new(router, exchanges, config.query_timeout());
        Self::new(DiscoveryWalker::new(
            Arc::new(correlator),
            sessions,
            local,
            config.server_domain().clone(),
        ))
    }

    /// Returns the walker used to resolve agents.
    #[must_use]
    pub const fn walker(&self) -> &DiscoveryWalker<R, S, L> {
        &self.walker
    }
}

#[async_trait]
impl<R, S, L> IqHandler for AgentInformationHandler<R, S, L>
where
    R: IqRouter,
    S: SessionRegistry,
    L: IqHandler,
{
    fn info(&self) -> IqHandlerInfo {
        self.info.clone()
    }

    fn features(&self) -> Vec<String> {
        vec![NAMESPACE_AGENTS.to_owned()]
    }

    async fn handle_iq(&self, stanza: Iq) -> Option<Iq> {
        trace!(from = ?stanza.from(), "processing agent information request");
        if stanza.is_response() {
            debug!(from = ?stanza.from(), "silently ignoring IQ response stanza");
            return None;
        }

        let query = stanza
            .child()
            .cloned()
            .unwrap_or_else(|| Element::namespaced("query", NAMESPACE_AGENTS));
        let reply = Iq::result_for(&stanza);

        if stanza.kind() == IqType::Set {
            debug!(from = ?stanza.from(), "refusing request of incorrect IQ type");
            return Some(
                reply
                    .with_child(query)
                    .into_error(StanzaError::new(ErrorCondition::FeatureNotImplemented)),
            );
        }

        let target = stanza
            .to()
            .unwrap_or_else(|| self.walker.server_domain())
            .clone();
        let agents = self.walker.find_agents(&target, stanza.from()).await;
        debug!(%target, count = agents.len(), "answering agent information request");

        let payload = agents
            .iter()
            .fold(query, |payload, agent| payload.with_child(agent.to_element()));
        Some(reply.with_child(payload))
    }
}
