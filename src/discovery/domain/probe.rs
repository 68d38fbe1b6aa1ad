//! Decoded capability probe responses.

use crate::stanza::Element;
use std::collections::BTreeSet;

/// One `(category, type)` facet an entity declares about itself.
///
/// The type is optional on the wire. An identity without one still counts
/// towards its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    category: String,
    kind: Option<String>,
}

impl Identity {
    /// Creates an identity.
    #[must_use]
    pub fn new(category: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            kind: Some(kind.into()),
        }
    }

    /// Creates an identity that declares no type.
    #[must_use]
    pub fn untyped(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            kind: None,
        }
    }

    /// Reads an `<identity category="..." type="..."/>` element.
    ///
    /// Returns `None` when the category is missing.
    #[must_use]
    pub fn from_element(element: &Element) -> Option<Self> {
        let category = element.attribute("category")?;
        Some(element.attribute("type").map_or_else(
            || Self::untyped(category),
            |kind| Self::new(category, kind),
        ))
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the type within the category, if declared.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Renders the identity as a disco#info child element.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let element = Element::new("identity").with_attribute("category", &self.category);
        match &self.kind {
            Some(kind) => element.with_attribute("type", kind),
            None => element,
        }
    }
}

/// Identities and features declared in answer to a capability probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    identities: Vec<Identity>,
    features: BTreeSet<String>,
}

impl ProbeResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an identity; declaration order is preserved.
    #[must_use]
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identities.push(identity);
        self
    }

    /// Adds a supported feature.
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    /// Decodes the `<query/>` payload of a disco#info response.
    ///
    /// Identities lacking a category are skipped, as are features without
    /// a `var` attribute.
    #[must_use]
    pub fn from_query(query: &Element) -> Self {
        Self {
            identities: query
                .children_named("identity")
                .filter_map(Identity::from_element)
                .collect(),
            features: query
                .children_named("feature")
                .filter_map(|feature| feature.attribute("var"))
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Returns identities in declaration order.
    #[must_use]
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    /// Returns the declared features.
    #[must_use]
    pub const fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Returns `true` when any identity has `category`.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.identities
            .iter()
            .any(|identity| identity.category == category)
    }

    /// Returns the first identity with `category`.
    #[must_use]
    pub fn first_of_category(&self, category: &str) -> Option<&Identity> {
        self.identities
            .iter()
            .find(|identity| identity.category == category)
    }

    /// Returns `true` when an identity matches both `category` and `kind`.
    #[must_use]
    pub fn has_identity(&self, category: &str, kind: &str) -> bool {
        self.identities
            .iter()
            .any(|identity| identity.category == category && identity.kind() == Some(kind))
    }

    /// Returns `true` when `feature` was declared.
    #[must_use]
    pub fn supports(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}
