//! Addresses of XMPP entities (`node@domain/resource`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length, in bytes, of each address part.
const MAX_PART_LENGTH: usize = 1023;

/// Characters that may not appear in the node part of an address.
const FORBIDDEN_NODE_CHARACTERS: [char; 8] = ['"', '&', '\'', '/', ':', '<', '>', '@'];

/// Errors returned while parsing an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JidError {
    /// The input string is empty.
    #[error("address must not be empty")]
    Empty,

    /// The domain part is empty.
    #[error("address '{0}' has an empty domain")]
    EmptyDomain(String),

    /// An `@` separator is present but the node before it is empty.
    #[error("address '{0}' has an empty node before '@'")]
    EmptyNode(String),

    /// A `/` separator is present but the resource after it is empty.
    #[error("address '{0}' has an empty resource after '/'")]
    EmptyResource(String),

    /// One part exceeds the 1023 byte limit.
    #[error("{part} of address '{address}' exceeds {MAX_PART_LENGTH} bytes")]
    PartTooLong {
        /// Name of the offending part.
        part: &'static str,
        /// The rejected input.
        address: String,
    },

    /// One part contains a character it may not hold.
    #[error("{part} of address '{address}' contains invalid character {character:?}")]
    InvalidCharacter {
        /// Name of the offending part.
        part: &'static str,
        /// The rejected input.
        address: String,
        /// The first invalid character found.
        character: char,
    },
}

/// A parsed, normalised entity address.
///
/// Addresses compare, hash and order by value, so they can key maps and
/// sets directly. The domain is stored lowercased without a trailing dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Jid {
    node: Option<String>,
    domain: String,
    resource: Option<String>,
}

impl Jid {
    /// Parses an address of the form `[node@]domain[/resource]`.
    ///
    /// # Errors
    ///
    /// Returns [`JidError`] when a part is empty, too long, or holds a
    /// character that is not allowed in that part.
    pub fn parse(value: &str) -> Result<Self, JidError> {
        if value.is_empty() {
            return Err(JidError::Empty);
        }

        let (bare, resource) = value
            .split_once('/')
            .map_or((value, None), |(bare, resource)| (bare, Some(resource)));
        let (node, raw_domain) = bare
            .split_once('@')
            .map_or((None, bare), |(node, domain)| (Some(node), domain));

        let domain = raw_domain
            .strip_suffix('.')
            .unwrap_or(raw_domain)
            .to_lowercase();
        if domain.is_empty() {
            return Err(JidError::EmptyDomain(value.to_owned()));
        }
        check_part("domain", &domain, value, |character| {
            character == '@' || character.is_whitespace() || character.is_control()
        })?;

        if let Some(node_part) = node {
            if node_part.is_empty() {
                return Err(JidError::EmptyNode(value.to_owned()));
            }
            check_part("node", node_part, value, |character| {
                FORBIDDEN_NODE_CHARACTERS.contains(&character)
                    || character.is_whitespace()
                    || character.is_control()
            })?;
        }

        if let Some(resource_part) = resource {
            if resource_part.is_empty() {
                return Err(JidError::EmptyResource(value.to_owned()));
            }
            check_part("resource", resource_part, value, char::is_control)?;
        }

        Ok(Self {
            node: node.map(str::to_owned),
            domain,
            resource: resource.map(str::to_owned),
        })
    }

    /// Returns the node (local) part, if any.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Returns the domain part.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the resource part, if any.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }
}

fn check_part(
    part: &'static str,
    value: &str,
    address: &str,
    is_forbidden: impl Fn(char) -> bool,
) -> Result<(), JidError> {
    if value.len() > MAX_PART_LENGTH {
        return Err(JidError::PartTooLong {
            part,
            address: address.to_owned(),
        });
    }
    match value.chars().find(|character| is_forbidden(*character)) {
        Some(character) => Err(JidError::InvalidCharacter {
            part,
            address: address.to_owned(),
            character,
        }),
        None => Ok(()),
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(node) = &self.node {
            write!(formatter, "{node}@")?;
        }
        formatter.write_str(&self.domain)?;
        if let Some(resource) = &self.resource {
            write!(formatter, "/{resource}")?;
        }
        Ok(())
    }
}

impl FromStr for Jid {
    type Err = JidError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Jid {
    type Error = JidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Jid {
    type Error = JidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Jid> for String {
    fn from(value: Jid) -> Self {
        value.to_string()
    }
}
