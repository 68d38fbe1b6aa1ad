//! In-memory service discovery responder.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::discovery::{
    domain::{Identity, NAMESPACE_DISCO_INFO, NAMESPACE_DISCO_ITEMS},
    ports::{IqHandler, IqHandlerInfo},
};
use crate::stanza::{Element, ErrorCondition, Iq, StanzaError};

/// Answers disco#items and disco#info requests from a fixed entity table.
///
/// Serves as the host's local discovery handler in tests, and as the far
/// end of remote entities behind an
/// [`InMemoryIqRouter`](super::InMemoryIqRouter). Entities can be set up to
/// fail in each of the ways a real one might: with an error reply, with an
/// unexpected payload, or by never answering.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiscoService {
    entities: HashMap<String, DiscoEntity>,
}

#[derive(Debug, Clone, Default)]
struct DiscoEntity {
    items: Vec<Element>,
    identities: Vec<Identity>,
    features: BTreeSet<String>,
    failure: Option<Failure>,
}

#[derive(Debug, Clone, Copy)]
enum Failure {
    Error(ErrorCondition),
    UnexpectedPayload,
    Silent,
}

impl InMemoryDiscoService {
    /// Creates a responder that knows no entities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists an item under `owner`.
    ///
    /// `address` is kept verbatim, so malformed addresses can be served.
    #[must_use]
    pub fn with_item(mut self, owner: &str, address: &str, name: Option<&str>) -> Self {
        let item = Element::new("item").with_attribute("jid", address);
        let element = match name {
            Some(display_name) => item.with_attribute("name", display_name),
            None => item,
        };
        self.entity(owner).items.push(element);
        self
    }

    /// Declares an identity of `owner`.
    #[must_use]
    pub fn with_identity(mut self, owner: &str, category: &str, kind: &str) -> Self {
        self.entity(owner)
            .identities
            .push(Identity::new(category, kind));
        self
    }

    /// Declares a feature of `owner`.
    #[must_use]
    pub fn with_feature(mut self, owner: &str, feature: &str) -> Self {
        self.entity(owner).features.insert(feature.to_owned());
        self
    }

    /// Makes `owner` answer every request with `condition`.
    #[must_use]
    pub fn with_error(mut self, owner: &str, condition: ErrorCondition) -> Self {
        self.entity(owner).failure = Some(Failure::Error(condition));
        self
    }

    /// Makes `owner` answer with a payload in a foreign namespace.
    #[must_use]
    pub fn with_unexpected_payload(mut self, owner: &str) -> Self {
        self.entity(owner).failure = Some(Failure::UnexpectedPayload);
        self
    }

    /// Makes `owner` never answer.
    #[must_use]
    pub fn with_silence(mut self, owner: &str) -> Self {
        self.entity(owner).failure = Some(Failure::Silent);
        self
    }

    fn entity(&mut self, owner: &str) -> &mut DiscoEntity {
        self.entities.entry(owner.to_owned()).or_default()
    }

    fn items_payload(entity: &DiscoEntity) -> Element {
        entity.items.iter().cloned().fold(
            Element::namespaced("query", NAMESPACE_DISCO_ITEMS),
            Element::with_child,
        )
    }

    fn info_payload(entity: &DiscoEntity) -> Element {
        let with_identities = entity.identities.iter().map(Identity::to_element).fold(
            Element::namespaced("query", NAMESPACE_DISCO_INFO),
            Element::with_child,
        );
        entity.features.iter().fold(with_identities, |query, feature| {
            query.with_child(Element::new("feature").with_attribute("var", feature))
        })
    }
}

#[async_trait]
impl IqHandler for InMemoryDiscoService {
    fn info(&self) -> IqHandlerInfo {
        IqHandlerInfo::new("query", NAMESPACE_DISCO_INFO)
    }

    async fn handle_iq(&self, stanza: Iq) -> Option<Iq> {
        if !stanza.is_request() {
            return None;
        }

        let Some(owner) = stanza.to().map(ToString::to_string) else {
            return Some(Iq::error_for(
                &stanza,
                StanzaError::new(ErrorCondition::BadRequest),
            ));
        };
        let Some(entity) = self.entities.get(&owner) else {
            return Some(Iq::error_for(
                &stanza,
                StanzaError::new(ErrorCondition::ItemNotFound),
            ));
        };

        match entity.failure {
            Some(Failure::Silent) => return None,
            Some(Failure::Error(condition)) => {
                return Some(Iq::error_for(&stanza, StanzaError::new(condition)));
            }
            Some(Failure::UnexpectedPayload) => {
                return Some(
                    Iq::result_for(&stanza)
                        .with_child(Element::namespaced("query", "urn:example:unexpected")),
                );
            }
            None => {}
        }

        let payload = match stanza.child().and_then(Element::namespace) {
            Some(NAMESPACE_DISCO_ITEMS) => Self::items_payload(entity),
            Some(NAMESPACE_DISCO_INFO) => Self::info_payload(entity),
            _ => {
                return Some(Iq::error_for(
                    &stanza,
                    StanzaError::new(ErrorCondition::ServiceUnavailable),
                ));
            }
        };
        Some(Iq::result_for(&stanza).with_child(payload))
    }
}
