//! Agent Information: legacy `jabber:iq:agents` answers from service
//! discovery.
//!
//! This crate answers XEP-0094 Agent Information queries by walking the
//! target entity with XEP-0030 Service Discovery (enumerate its items,
//! probe each item's identities and features) and mapping what it finds
//! onto the legacy agent vocabulary.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: pure data and classification with no I/O
//! - **Ports**: trait interfaces for the host (routing fabric, session
//!   registry, in-process handlers, handler registry)
//! - **Adapters**: in-memory implementations of those ports
//! - **Services**: correlation of asynchronous answers, the discovery walk,
//!   the IQ handler and its install/uninstall lifecycle
//!
//! # Modules
//!
//! - [`stanza`]: addresses, payload elements, IQ envelopes and errors
//! - [`discovery`]: the discovery engine and the Agent Information handler
//! - [`config`]: runtime settings

pub mod config;
pub mod discovery;
pub mod stanza;
