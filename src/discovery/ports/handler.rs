//! Port for in-process IQ handlers.

use crate::stanza::{Element, Iq};
use async_trait::async_trait;
use std::fmt;

/// The payload element an [`IqHandler`] claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IqHandlerInfo {
    name: String,
    namespace: String,
}

impl IqHandlerInfo {
    /// Creates handler info for `<name xmlns="namespace"/>` payloads.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Returns the claimed element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the claimed namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns `true` when `payload` is the element this handler claims.
    #[must_use]
    pub fn matches(&self, payload: &Element) -> bool {
        payload.is(&self.name, &self.namespace)
    }
}

impl fmt::Display for IqHandlerInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({})", self.name, self.namespace)
    }
}

/// A handler the host invokes for IQ stanzas carrying its payload.
///
/// The host's own service discovery handler is consumed through this port
/// for local probes, and the Agent Information handler implements it to be
/// installed into the host.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IqHandler: Send + Sync {
    /// Returns the payload element this handler claims.
    fn info(&self) -> IqHandlerInfo;

    /// Returns the features the handler adds to the host's own disco#info.
    fn features(&self) -> Vec<String> {
        Vec::new()
    }

    /// Handles one stanza.
    ///
    /// Returns the reply to send, or `None` when nothing should be sent.
    async fn handle_iq(&self, stanza: Iq) -> Option<Iq>;
}
