//! Protocol namespaces and well-known capability strings.

/// Namespace of the legacy Agent Information protocol.
pub const NAMESPACE_AGENTS: &str = "jabber:iq:agents";

/// Namespace of service discovery item enumeration.
pub const NAMESPACE_DISCO_ITEMS: &str = "http://jabber.org/protocol/disco#items";

/// Namespace of service discovery capability probes.
pub const NAMESPACE_DISCO_INFO: &str = "http://jabber.org/protocol/disco#info";

/// Feature advertised by entities that accept in-band registration.
pub const FEATURE_REGISTER: &str = "jabber:iq:register";

/// Feature advertised by entities that accept search requests.
pub const FEATURE_SEARCH: &str = "jabber:iq:search";

/// Legacy service name reported for user directories.
pub const USER_DIRECTORY_SERVICE: &str = "jud";
