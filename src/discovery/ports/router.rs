//! Port for the stanza routing fabric.

use crate::stanza::Iq;

/// Delivers stanzas to their recipients.
///
/// Routing is fire-and-forget: responses come back asynchronously and are
/// handed to [`crate::discovery::services::PendingExchanges::deliver`] by
/// the fabric.
#[cfg_attr(test, mockall::automock)]
pub trait IqRouter: Send + Sync {
    /// Routes `stanza` towards its `to` address without waiting.
    fn route(&self, stanza: Iq);
}
