//! Domain model for agent discovery.
//!
//! Enumerated items, decoded capability probes, the identity description
//! registry, the classifier that maps probes onto legacy attributes, and
//! the resulting agent records. Nothing here performs I/O.

mod agent;
mod classifier;
mod item;
mod namespaces;
mod probe;
mod registry;

pub use agent::AgentRecord;
pub use classifier::{Classification, classify, describe};
pub use item::DiscoveredItem;
pub use namespaces::{
    FEATURE_REGISTER, FEATURE_SEARCH, NAMESPACE_AGENTS, NAMESPACE_DISCO_INFO,
    NAMESPACE_DISCO_ITEMS, USER_DIRECTORY_SERVICE,
};
pub use probe::{Identity, ProbeResult};
pub use registry::{IDENTITY_REGISTRY, identity_description};
