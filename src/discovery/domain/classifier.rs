//! Maps capability probe results onto the legacy agent vocabulary.

use super::{
    FEATURE_REGISTER, FEATURE_SEARCH, Identity, ProbeResult, USER_DIRECTORY_SERVICE,
    identity_description,
};
use tracing::trace;

const GATEWAY_CATEGORY: &str = "gateway";
const CONFERENCE_CATEGORY: &str = "conference";

/// Legacy attributes derived from one probe result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Description of the first identity found in the registry.
    pub description: Option<String>,
    /// Whether the entity is a gateway to another network.
    pub is_transport: bool,
    /// Whether the entity hosts conferences.
    pub is_groupchat: bool,
    /// Gateway subtype, or the user directory service name.
    pub service: Option<String>,
    /// Whether the entity accepts in-band registration.
    pub supports_registration: bool,
    /// Whether the entity accepts search requests.
    pub supports_search: bool,
}

/// Classifies a probe result.
///
/// An absent result (failed or timed out probe) classifies as
/// [`Classification::default`].
#[must_use]
pub fn classify(probe: Option<&ProbeResult>) -> Classification {
    let Some(result) = probe else {
        trace!("no capability data available; using empty classification");
        return Classification::default();
    };

    let is_transport = result.has_category(GATEWAY_CATEGORY);
    let is_groupchat = result.has_category(CONFERENCE_CATEGORY);
    let service = if is_transport {
        result
            .first_of_category(GATEWAY_CATEGORY)
            .and_then(Identity::kind)
            .map(str::to_owned)
    } else if result.has_identity("directory", "user") {
        Some(USER_DIRECTORY_SERVICE.to_owned())
    } else {
        // Conference services used to report 'public' or 'private' here;
        // modern ones carry nothing equivalent.
        None
    };

    let classification = Classification {
        description: describe(result),
        is_transport,
        is_groupchat,
        service,
        supports_registration: result.supports(FEATURE_REGISTER),
        supports_search: result.supports(FEATURE_SEARCH),
    };
    trace!(?classification, "classified capability data");
    classification
}

/// Returns the description of the first registered identity.
#[must_use]
pub fn describe(probe: &ProbeResult) -> Option<String> {
    probe
        .identities()
        .iter()
        .find_map(|identity| {
            identity
                .kind()
                .and_then(|kind| identity_description(identity.category(), kind))
        })
        .map(str::to_owned)
}
