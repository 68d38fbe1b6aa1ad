//! Service layer for agent discovery.
//!
//! - [`Correlator`] bridges routed requests and their asynchronous answers.
//! - [`DiscoveryWalker`] runs the enumerate-then-probe walk.
//! - [`AgentInformationHandler`] answers `jabber:iq:agents` requests.
//! - [`AgentInformationPlugin`] installs the handler into a host.

mod correlator;
mod handler;
mod plugin;
mod walker;

pub use correlator::{
    Correlator, CorrelatorError, CorrelatorResult, DEFAULT_INBOX_CAPACITY, PendingExchanges,
};
pub use handler::AgentInformationHandler;
pub use plugin::AgentInformationPlugin;
pub use walker::DiscoveryWalker;
