//! Legacy agent entries returned to Agent Information requesters.

use super::{Classification, DiscoveredItem, NAMESPACE_AGENTS, ProbeResult, classify};
use crate::stanza::{Element, Jid};

/// One `<agent/>` entry of a `jabber:iq:agents` result.
///
/// Records compare by value over every attribute, so two discovery items
/// that resolve to identical data collapse into one set entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentRecord {
    address: Jid,
    name: Option<String>,
    description: Option<String>,
    is_transport: bool,
    is_groupchat: bool,
    service: Option<String>,
    supports_registration: bool,
    supports_search: bool,
}

impl AgentRecord {
    /// Builds a record from an enumerated item and its classification.
    #[must_use]
    pub fn new(item: DiscoveredItem, classification: Classification) -> Self {
        let (address, name) = item.into_parts();
        let Classification {
            description,
            is_transport,
            is_groupchat,
            service,
            supports_registration,
            supports_search,
        } = classification;
        Self {
            address,
            name,
            description,
            is_transport,
            is_groupchat,
            service,
            supports_registration,
            supports_search,
        }
    }

    /// Builds a record from an enumerated item and its (possibly absent)
    /// capability probe result.
    #[must_use]
    pub fn from_probe(item: DiscoveredItem, probe: Option<&ProbeResult>) -> Self {
        Self::new(item, classify(probe))
    }

    /// Returns the agent address.
    #[must_use]
    pub const fn address(&self) -> &Jid {
        &self.address
    }

    /// Returns the display name from the enumeration probe.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the registry description of the agent's identity.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns `true` when the agent is a gateway.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        self.is_transport
    }

    /// Returns `true` when the agent hosts conferences.
    #[must_use]
    pub const fn is_groupchat(&self) -> bool {
        self.is_groupchat
    }

    /// Returns the legacy service name.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Returns `true` when the agent accepts registration.
    #[must_use]
    pub const fn supports_registration(&self) -> bool {
        self.supports_registration
    }

    /// Returns `true` when the agent accepts searches.
    #[must_use]
    pub const fn supports_search(&self) -> bool {
        self.supports_search
    }

    /// Renders the `<agent/>` element.
    ///
    /// Optional values and flags only produce a child when present or set.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut agent = Element::namespaced("agent", NAMESPACE_AGENTS)
            .with_attribute("jid", self.address.to_string());
        if let Some(name) = &self.name {
            agent.push_child(Element::new("name").with_text(name));
        }
        if let Some(description) = &self.description {
            agent.push_child(Element::new("description").with_text(description));
        }
        if self.is_transport {
            agent.push_child(Element::new("transport"));
        }
        if self.is_groupchat {
            agent.push_child(Element::new("groupchat"));
        }
        if let Some(service) = &self.service {
            agent.push_child(Element::new("service").with_text(service));
        }
        if self.supports_registration {
            agent.push_child(Element::new("register"));
        }
        if self.supports_search {
            agent.push_child(Element::new("search"));
        }
        agent
    }
}
