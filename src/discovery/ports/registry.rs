//! Port for installing handlers into the host.

use super::{IqHandler, IqHandlerInfo};
use std::sync::Arc;
use thiserror::Error;

/// Result type for handler registry operations.
pub type HandlerRegistryResult<T> = Result<T, HandlerRegistryError>;

/// Registry of the handlers the host dispatches IQ stanzas to.
pub trait HandlerRegistry: Send + Sync {
    /// Installs a handler for the payload named by its [`IqHandlerInfo`].
    ///
    /// # Errors
    ///
    /// Returns [`HandlerRegistryError::Duplicate`] when that payload is
    /// already claimed.
    fn add_handler(&self, handler: Arc<dyn IqHandler>) -> HandlerRegistryResult<()>;

    /// Removes the handler claiming `info`.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerRegistryError::NotRegistered`] when no handler
    /// claims that payload.
    fn remove_handler(&self, info: &IqHandlerInfo) -> HandlerRegistryResult<()>;
}

/// Errors returned by handler registry adapters.
#[derive(Debug, Clone, Error)]
pub enum HandlerRegistryError {
    /// Another handler already claims the payload.
    #[error("a handler for {0} is already registered")]
    Duplicate(IqHandlerInfo),

    /// No handler claims the payload.
    #[error("no handler for {0} is registered")]
    NotRegistered(IqHandlerInfo),

    /// Generic registry failure.
    #[error("handler registry error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl HandlerRegistryError {
    /// Wraps a runtime error from the registry adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
