//! Agent discovery: answering `jabber:iq:agents` through service discovery.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the classifier in [`domain`]
//! - Port contracts for host collaborators in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use agent_information::discovery::{
//!     adapters::memory::{InMemoryDiscoService, InMemoryIqRouter, InMemorySessionRegistry},
//!     services::{Correlator, DiscoveryWalker, PendingExchanges},
//! };
//! use agent_information::stanza::Jid;
//!
//! # let runtime = tokio::runtime::Runtime::new().expect("runtime");
//! # runtime.block_on(async {
//! let server = Jid::parse("example.org").expect("valid address");
//! let local = InMemoryDiscoService::new()
//!     .with_item("example.org", "irc.example.org", Some("IRC"))
//!     .with_identity("irc.example.org", "gateway", "irc");
//!
//! let exchanges = Arc::new(PendingExchanges::default());
//! let router = Arc::new(InMemoryIqRouter::new(exchanges.clone()));
//! let correlator = Arc::new(Correlator::new(router, exchanges, Duration::from_secs(5)));
//! let walker = DiscoveryWalker::new(
//!     correlator,
//!     Arc::new(InMemorySessionRegistry::new()),
//!     Arc::new(local),
//!     server.clone(),
//! );
//!
//! let agents = walker.find_agents(&server, None).await;
//! let agent = agents.first().expect("one agent");
//! assert!(agent.is_transport());
//! assert_eq!(agent.service(), Some("irc"));
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
