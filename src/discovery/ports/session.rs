//! Port for the host's session registry.

/// Answers which domains are served over external component sessions.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRegistry: Send + Sync {
    /// Returns `true` when `domain` has an active external session.
    ///
    /// Domains without one are served in-process by the host.
    fn has_external_session(&self, domain: &str) -> bool;
}
