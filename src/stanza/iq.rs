//! Info/query stanzas: the request/response envelope.

use super::{Element, Jid, StanzaError};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// The `type` discriminator of an IQ stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IqType {
    /// Requests information.
    Get,
    /// Provides data or changes state.
    Set,
    /// Successful response to a `get` or `set`.
    Result,
    /// Failed response to a `get` or `set`.
    Error,
}

impl IqType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Result => "result",
            Self::Error => "error",
        }
    }

    /// Returns `true` for `get` and `set`.
    #[must_use]
    pub const fn is_request(self) -> bool {
        matches!(self, Self::Get | Self::Set)
    }

    /// Returns `true` for `result` and `error`.
    #[must_use]
    pub const fn is_response(self) -> bool {
        !self.is_request()
    }
}

impl fmt::Display for IqType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned while parsing an IQ type from its wire value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown IQ type: {0}")]
pub struct ParseIqTypeError(pub String);

impl TryFrom<&str> for IqType {
    type Error = ParseIqTypeError;

    fn try_from(value: &str) -> Result<Self, ParseIqTypeError> {
        match value {
            "get" => Ok(Self::Get),
            "set" => Ok(Self::Set),
            "result" => Ok(Self::Result),
            "error" => Ok(Self::Error),
            other => Err(ParseIqTypeError(other.to_owned())),
        }
    }
}

/// An IQ stanza.
///
/// The `id` is echoed by the responder and is what correlates a response
/// with its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iq {
    id: String,
    kind: IqType,
    from: Option<Jid>,
    to: Option<Jid>,
    child: Option<Element>,
    error: Option<StanzaError>,
}

impl Iq {
    /// Creates a stanza of the given type with a freshly generated id.
    #[must_use]
    pub fn new(kind: IqType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            from: None,
            to: None,
            child: None,
            error: None,
        }
    }

    /// Creates a `get` request addressed to `to`, carrying `child`.
    #[must_use]
    pub fn get(to: Jid, child: Element) -> Self {
        Self::new(IqType::Get).with_to(to).with_child(child)
    }

    /// Creates an empty `result` answering `request`.
    ///
    /// The id is copied and the addresses are swapped.
    #[must_use]
    pub fn result_for(request: &Self) -> Self {
        Self {
            id: request.id.clone(),
            kind: IqType::Result,
            from: request.to.clone(),
            to: request.from.clone(),
            child: None,
            error: None,
        }
    }

    /// Creates an `error` answering `request`.
    #[must_use]
    pub fn error_for(request: &Self, error: StanzaError) -> Self {
        Self::result_for(request).into_error(error)
    }

    /// Replaces the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the sender address.
    #[must_use]
    pub fn with_from(mut self, from: Jid) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the sender address when one is given.
    #[must_use]
    pub fn with_optional_from(mut self, from: Option<Jid>) -> Self {
        self.from = from;
        self
    }

    /// Sets the recipient address.
    #[must_use]
    pub fn with_to(mut self, to: Jid) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets the payload element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.child = Some(child);
        self
    }

    /// Turns the stanza into an `error` carrying `error`.
    ///
    /// Any payload is kept so the requester can see what was refused.
    #[must_use]
    pub fn into_error(mut self, error: StanzaError) -> Self {
        self.kind = IqType::Error;
        self.error = Some(error);
        self
    }

    /// Returns the stanza id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stanza type.
    #[must_use]
    pub const fn kind(&self) -> IqType {
        self.kind
    }

    /// Returns the sender address.
    #[must_use]
    pub const fn from(&self) -> Option<&Jid> {
        self.from.as_ref()
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn to(&self) -> Option<&Jid> {
        self.to.as_ref()
    }

    /// Returns the payload element.
    #[must_use]
    pub const fn child(&self) -> Option<&Element> {
        self.child.as_ref()
    }

    /// Consumes the stanza and returns its payload element.
    #[must_use]
    pub fn into_child(self) -> Option<Element> {
        self.child
    }

    /// Returns the stanza error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&StanzaError> {
        self.error.as_ref()
    }

    /// Returns `true` for `get` and `set` stanzas.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        self.kind.is_request()
    }

    /// Returns `true` for `result` and `error` stanzas.
    #[must_use]
    pub const fn is_response(&self) -> bool {
        self.kind.is_response()
    }
}
