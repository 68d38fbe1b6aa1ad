//! In-memory implementation of the `SessionRegistry` port.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::discovery::ports::SessionRegistry;

/// In-memory set of domains served over external component sessions.
///
/// Thread-safe via internal [`RwLock`]. A poisoned lock reads as "no
/// session", which routes probes to the local handler.
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionRegistry {
    domains: Arc<RwLock<HashSet<String>>>,
}

impl InMemorySessionRegistry {
    /// Creates a registry without sessions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `domain` as served by an external component.
    pub fn open_session(&self, domain: impl Into<String>) {
        if let Ok(mut guard) = self.domains.write() {
            guard.insert(domain.into().to_lowercase());
        }
    }

    /// Removes the external session of `domain`.
    pub fn close_session(&self, domain: &str) {
        if let Ok(mut guard) = self.domains.write() {
            guard.remove(&domain.to_lowercase());
        }
    }
}

impl SessionRegistry for InMemorySessionRegistry {
    fn has_external_session(&self, domain: &str) -> bool {
        self.domains
            .read()
            .map(|guard| guard.contains(domain))
            .unwrap_or(false)
    }
}
