//! Port contracts for the host collaborators of agent discovery.

mod handler;
mod registry;
mod router;
mod session;

pub use handler::{IqHandler, IqHandlerInfo};
pub use registry::{HandlerRegistry, HandlerRegistryError, HandlerRegistryResult};
pub use router::IqRouter;
pub use session::SessionRegistry;

#[cfg(test)]
pub use handler::MockIqHandler;
#[cfg(test)]
pub use router::MockIqRouter;
#[cfg(test)]
pub use session::MockSessionRegistry;
