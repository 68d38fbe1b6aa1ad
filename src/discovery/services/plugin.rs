//! Installs and removes the Agent Information handler.

use crate::discovery::ports::{
    HandlerRegistry, HandlerRegistryError, HandlerRegistryResult, IqHandler, IqHandlerInfo,
};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Lifecycle of the Agent Information handler within a host.
///
/// [`initialize`](Self::initialize) registers the handler and
/// [`destroy`](Self::destroy) removes it again. Destroying a plugin that
/// is not installed does nothing.
pub struct AgentInformationPlugin<H>
where
    H: HandlerRegistry,
{
    registry: Arc<H>,
    installed: Mutex<Option<IqHandlerInfo>>,
}

impl<H> AgentInformationPlugin<H>
where
    H: HandlerRegistry,
{
    /// Creates a plugin for the host's handler registry.
    #[must_use]
    pub const fn new(registry: Arc<H>) -> Self {
        Self {
            registry,
            installed: Mutex::new(None),
        }
    }

    /// Registers `handler` with the host.
    ///
    /// A handler installed earlier by this plugin is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerRegistryError`] when the registry refuses the
    /// handler.
    pub fn initialize(&self, handler: Arc<dyn IqHandler>) -> HandlerRegistryResult<()> {
        let mut installed = self.installed.lock().map_err(|err| {
            HandlerRegistryError::runtime(std::io::Error::other(err.to_string()))
        })?;
        if let Some(previous) = installed.take() {
            self.registry.remove_handler(&previous)?;
        }

        let info = handler.info();
        self.registry.add_handler(handler)?;
        debug!(%info, "agent information handler installed");
        *installed = Some(info);
        Ok(())
    }

    /// Removes the installed handler, if any.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerRegistryError`] when the registry fails to remove
    /// the handler.
    pub fn destroy(&self) -> HandlerRegistryResult<()> {
        let mut installed = self.installed.lock().map_err(|err| {
            HandlerRegistryError::runtime(std::io::Error::other(err.to_string()))
        })?;
        if let Some(info) = installed.take() {
            self.registry.remove_handler(&info)?;
            debug!(%info, "agent information handler removed");
        }
        Ok(())
    }

    /// Returns `true` while a handler is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}
