//! In-memory implementation of the `HandlerRegistry` port.

use std::sync::{Arc, RwLock};

use crate::discovery::ports::{
    HandlerRegistry, HandlerRegistryError, HandlerRegistryResult, IqHandler, IqHandlerInfo,
};
use crate::stanza::{ErrorCondition, Iq, StanzaError};

/// In-memory handler table with a minimal dispatcher.
///
/// Thread-safe via internal [`RwLock`]. Suitable for tests and for wiring
/// the handler into a single-process host.
#[derive(Default, Clone)]
pub struct InMemoryHandlerRegistry {
    handlers: Arc<RwLock<Vec<Arc<dyn IqHandler>>>>,
}

impl InMemoryHandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of installed handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no handler is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the features advertised by all installed handlers.
    #[must_use]
    pub fn features(&self) -> Vec<String> {
        self.handlers
            .read()
            .map(|guard| guard.iter().flat_map(|handler| handler.features()).collect())
            .unwrap_or_default()
    }

    /// Dispatches `stanza` to the handler claiming its payload.
    ///
    /// Requests nobody claims are answered with `service-unavailable`;
    /// unclaimed responses are dropped.
    pub async fn dispatch(&self, stanza: Iq) -> Option<Iq> {
        let claimed = self.handlers.read().ok().and_then(|guard| {
            stanza.child().and_then(|payload| {
                guard
                    .iter()
                    .find(|handler| handler.info().matches(payload))
                    .cloned()
            })
        });

        match claimed {
            Some(handler) => handler.handle_iq(stanza).await,
            None if stanza.is_request() => Some(Iq::error_for(
                &stanza,
                StanzaError::new(ErrorCondition::ServiceUnavailable),
            )),
            None => None,
        }
    }

    fn write_handlers(
        &self,
    ) -> HandlerRegistryResult<std::sync::RwLockWriteGuard<'_, Vec<Arc<dyn IqHandler>>>> {
        self.handlers
            .write()
            .map_err(|err| HandlerRegistryError::runtime(std::io::Error::other(err.to_string())))
    }
}

impl HandlerRegistry for InMemoryHandlerRegistry {
    fn add_handler(&self, handler: Arc<dyn IqHandler>) -> HandlerRegistryResult<()> {
        let mut handlers = self.write_handlers()?;
        let info = handler.info();
        if handlers.iter().any(|installed| installed.info() == info) {
            return Err(HandlerRegistryError::Duplicate(info));
        }
        handlers.push(handler);
        Ok(())
    }

    fn remove_handler(&self, info: &IqHandlerInfo) -> HandlerRegistryResult<()> {
        let mut handlers = self.write_handlers()?;
        let before = handlers.len();
        handlers.retain(|installed| installed.info() != *info);
        if handlers.len() == before {
            return Err(HandlerRegistryError::NotRegistered(info.clone()));
        }
        Ok(())
    }
}
