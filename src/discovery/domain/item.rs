//! Items returned by an enumeration probe.

use crate::stanza::{Element, Jid, JidError};

/// A candidate agent listed by the enumeration probe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveredItem {
    address: Jid,
    name: Option<String>,
}

impl DiscoveredItem {
    /// Creates an item from an already parsed address.
    #[must_use]
    pub const fn new(address: Jid, name: Option<String>) -> Self {
        Self { address, name }
    }

    /// Reads an `<item jid="..." name="..."/>` element.
    ///
    /// # Errors
    ///
    /// Returns [`JidError`] when the `jid` attribute is missing or is not
    /// a valid address.
    pub fn from_element(element: &Element) -> Result<Self, JidError> {
        let address = Jid::parse(element.attribute("jid").unwrap_or_default())?;
        Ok(Self {
            address,
            name: element.attribute("name").map(str::to_owned),
        })
    }

    /// Returns the item address.
    #[must_use]
    pub const fn address(&self) -> &Jid {
        &self.address
    }

    /// Returns the human-readable name, if the item carried one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Splits the item into its address and name.
    #[must_use]
    pub fn into_parts(self) -> (Jid, Option<String>) {
        (self.address, self.name)
    }
}
