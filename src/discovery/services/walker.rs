//! Two-phase service discovery walk producing legacy agent records.

use super::Correlator;
use crate::discovery::{
    domain::{AgentRecord, DiscoveredItem, NAMESPACE_DISCO_INFO, NAMESPACE_DISCO_ITEMS, ProbeResult},
    ports::{IqHandler, IqRouter, SessionRegistry},
};
use crate::stanza::{Element, Iq, IqType, Jid};
use futures::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Finds the agents of an entity by enumerating its disco items and
/// probing each one for its identities and features.
///
/// Probes addressed to the server itself, or to domains without an
/// external component session, are answered by the local discovery handler
/// without a network round trip. Every other probe goes through the
/// [`Correlator`].
pub struct DiscoveryWalker<R, S, L>
where
    R: IqRouter,
    S: SessionRegistry,
    L: IqHandler,
{
    correlator: Arc<Correlator<R>>,
    sessions: Arc<S>,
    local: Arc<L>,
    server_domain: Jid,
}

impl<R, S, L> DiscoveryWalker<R, S, L>
where
    R: IqRouter,
    S: SessionRegistry,
    L: IqHandler,
{
    /// Creates a walker for the server at `server_domain`.
    #[must_use]
    pub const fn new(
        correlator: Arc<Correlator<R>>,
        sessions: Arc<S>,
        local: Arc<L>,
        server_domain: Jid,
    ) -> Self {
        Self {
            correlator,
            sessions,
            local,
            server_domain,
        }
    }

    /// Returns the server's own address.
    #[must_use]
    pub const fn server_domain(&self) -> &Jid {
        &self.server_domain
    }

    /// Returns the correlator used for remote probes.
    #[must_use]
    pub const fn correlator(&self) -> &Arc<Correlator<R>> {
        &self.correlator
    }

    /// Returns `true` when probes to `address` are answered in-process.
    #[must_use]
    pub fn is_local(&self, address: &Jid) -> bool {
        *address == self.server_domain || !self.sessions.has_external_session(address.domain())
    }

    /// Finds the agents of `target` on behalf of `requester`.
    ///
    /// Failures never surface: an unanswered or unusable enumeration gives
    /// an empty set, items with malformed addresses are skipped, and items
    /// whose probe fails still yield a minimally populated record. Records
    /// with identical attributes collapse into one.
    pub async fn find_agents(
        &self,
        target: &Jid,
        requester: Option<&Jid>,
    ) -> BTreeSet<AgentRecord> {
        trace!(%target, ?requester, "finding agents");

        let items = self
            .disco_items(target, requester)
            .await
            .iter()
            .filter_map(|element| match DiscoveredItem::from_element(element) {
                Ok(item) => Some(item),
                Err(err) => {
                    debug!(
                        %target,
                        item = %element,
                        %err,
                        "ignoring disco item with an invalid address"
                    );
                    None
                }
            })
            .collect::<Vec<_>>();

        let probes = items.into_iter().map(|item| async move {
            let probe = self.disco_info(item.address(), requester).await;
            AgentRecord::from_probe(item, probe.as_ref())
        });

        join_all(probes).await.into_iter().collect()
    }

    /// Performs a disco#items probe and returns the raw `<item/>` elements.
    ///
    /// Returns an empty list when the probe is unanswered, answered with an
    /// error, or answered with an unexpected payload.
    pub async fn disco_items(&self, target: &Jid, requester: Option<&Jid>) -> Vec<Element> {
        trace!(%target, ?requester, "performing disco#items request");

        let response = self
            .query(probe_request(target, requester, NAMESPACE_DISCO_ITEMS))
            .await;
        usable_payload(response, target, NAMESPACE_DISCO_ITEMS)
            .map(|query| query.children_named("item").cloned().collect())
            .unwrap_or_default()
    }

    /// Performs a disco#info probe.
    ///
    /// Returns `None` when the probe is unanswered, answered with an
    /// error, or answered with an unexpected payload.
    pub async fn disco_info(&self, target: &Jid, requester: Option<&Jid>) -> Option<ProbeResult> {
        trace!(%target, ?requester, "performing disco#info request");

        let response = self
            .query(probe_request(target, requester, NAMESPACE_DISCO_INFO))
            .await;
        usable_payload(response, target, NAMESPACE_DISCO_INFO)
            .map(|query| ProbeResult::from_query(&query))
    }

    async fn query(&self, request: Iq) -> Option<Iq> {
        let local = request.to().is_none_or(|to| self.is_local(to));
        if local {
            return self.local.handle_iq(request).await;
        }

        match self.correlator.send(request).await {
            Ok(response) => response,
            Err(err) => {
                debug!(%err, "remote probe could not be sent");
                None
            }
        }
    }
}

fn probe_request(target: &Jid, requester: Option<&Jid>, namespace: &str) -> Iq {
    Iq::new(IqType::Get)
        .with_to(target.clone())
        .with_optional_from(requester.cloned())
        .with_child(Element::namespaced("query", namespace))
}

fn usable_payload(response: Option<Iq>, target: &Jid, namespace: &str) -> Option<Element> {
    let Some(stanza) = response else {
        debug!(%target, namespace, "probe was not responded to");
        return None;
    };

    if let Some(error) = stanza.error() {
        debug!(%target, namespace, %error, "probe was responded to with an error");
        return None;
    }
    if stanza.kind() == IqType::Error {
        debug!(%target, namespace, "probe was responded to with an error");
        return None;
    }

    match stanza.into_child() {
        Some(query) if query.is("query", namespace) => Some(query),
        Some(other) => {
            debug!(
                %target,
                namespace,
                payload = %other,
                "probe was responded to with an unexpected payload"
            );
            None
        }
        None => {
            debug!(%target, namespace, "probe was responded to without a payload");
            None
        }
    }
}
