//! Stanza error conditions (RFC 6120, section 8.3).

use super::Element;
use std::fmt;
use thiserror::Error;

/// Namespace of the defined stanza error conditions.
pub const NAMESPACE_STANZAS: &str = "urn:ietf:params:xml:ns:xmpp-stanzas";

/// Defined stanza error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCondition {
    /// The request was malformed.
    BadRequest,
    /// A resource with that name or address already exists.
    Conflict,
    /// The feature represented by the request is not implemented.
    FeatureNotImplemented,
    /// The requester lacks the permissions to perform the action.
    Forbidden,
    /// The recipient is no longer available at this address.
    Gone,
    /// The server experienced an internal failure.
    InternalServerError,
    /// The addressed item could not be found.
    ItemNotFound,
    /// An address in the request is malformed.
    JidMalformed,
    /// The request violates a local policy or preference.
    NotAcceptable,
    /// No entity is allowed to perform the action.
    NotAllowed,
    /// The requester must authenticate first.
    NotAuthorized,
    /// The request violates a service policy.
    PolicyViolation,
    /// The intended recipient is temporarily unavailable.
    RecipientUnavailable,
    /// The recipient is being redirected elsewhere.
    Redirect,
    /// The requester must register first.
    RegistrationRequired,
    /// A remote server in the address does not exist.
    RemoteServerNotFound,
    /// A remote server could not be reached in time.
    RemoteServerTimeout,
    /// The server lacks the resources to serve the request.
    ResourceConstraint,
    /// The service is not provided by the recipient.
    ServiceUnavailable,
    /// The requester must subscribe first.
    SubscriptionRequired,
    /// A condition not covered by the defined set.
    UndefinedCondition,
    /// The request was understood but not expected at this time.
    UnexpectedRequest,
}

impl ErrorCondition {
    /// Returns the wire name of the condition element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad-request",
            Self::Conflict => "conflict",
            Self::FeatureNotImplemented => "feature-not-implemented",
            Self::Forbidden => "forbidden",
            Self::Gone => "gone",
            Self::InternalServerError => "internal-server-error",
            Self::ItemNotFound => "item-not-found",
            Self::JidMalformed => "jid-malformed",
            Self::NotAcceptable => "not-acceptable",
            Self::NotAllowed => "not-allowed",
            Self::NotAuthorized => "not-authorized",
            Self::PolicyViolation => "policy-violation",
            Self::RecipientUnavailable => "recipient-unavailable",
            Self::Redirect => "redirect",
            Self::RegistrationRequired => "registration-required",
            Self::RemoteServerNotFound => "remote-server-not-found",
            Self::RemoteServerTimeout => "remote-server-timeout",
            Self::ResourceConstraint => "resource-constraint",
            Self::ServiceUnavailable => "service-unavailable",
            Self::SubscriptionRequired => "subscription-required",
            Self::UndefinedCondition => "undefined-condition",
            Self::UnexpectedRequest => "unexpected-request",
        }
    }

    /// Returns the error type RFC 6120 recommends for this condition.
    #[must_use]
    pub const fn default_type(self) -> ErrorType {
        match self {
            Self::BadRequest
            | Self::JidMalformed
            | Self::NotAcceptable
            | Self::PolicyViolation
            | Self::Redirect => ErrorType::Modify,
            Self::Forbidden
            | Self::NotAuthorized
            | Self::RegistrationRequired
            | Self::SubscriptionRequired => ErrorType::Auth,
            Self::RecipientUnavailable
            | Self::RemoteServerTimeout
            | Self::ResourceConstraint
            | Self::UnexpectedRequest => ErrorType::Wait,
            Self::Conflict
            | Self::FeatureNotImplemented
            | Self::Gone
            | Self::InternalServerError
            | Self::ItemNotFound
            | Self::NotAllowed
            | Self::RemoteServerNotFound
            | Self::ServiceUnavailable
            | Self::UndefinedCondition => ErrorType::Cancel,
        }
    }
}

impl fmt::Display for ErrorCondition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// How the requester is expected to react to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Retry after providing credentials.
    Auth,
    /// Do not retry; the error cannot be remedied.
    Cancel,
    /// Proceed; the condition was only a warning.
    Continue,
    /// Retry after changing the data sent.
    Modify,
    /// Retry after waiting.
    Wait,
}

impl ErrorType {
    /// Returns the wire value of the `type` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Cancel => "cancel",
            Self::Continue => "continue",
            Self::Modify => "modify",
            Self::Wait => "wait",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// An error carried by an `error`-type stanza.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{condition} ({kind})")]
pub struct StanzaError {
    condition: ErrorCondition,
    kind: ErrorType,
    text: Option<String>,
}

impl StanzaError {
    /// Creates an error with the condition's recommended type.
    #[must_use]
    pub const fn new(condition: ErrorCondition) -> Self {
        Self {
            condition,
            kind: condition.default_type(),
            text: None,
        }
    }

    /// Overrides the error type.
    #[must_use]
    pub const fn with_type(mut self, kind: ErrorType) -> Self {
        self.kind = kind;
        self
    }

    /// Attaches a human-readable description.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the defined condition.
    #[must_use]
    pub const fn condition(&self) -> ErrorCondition {
        self.condition
    }

    /// Returns the error type.
    #[must_use]
    pub const fn kind(&self) -> ErrorType {
        self.kind
    }

    /// Returns the optional description.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Renders the `<error/>` payload element.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let error = Element::new("error")
            .with_attribute("type", self.kind.as_str())
            .with_child(Element::namespaced(
                self.condition.as_str(),
                NAMESPACE_STANZAS,
            ));
        match &self.text {
            Some(text) => {
                error.with_child(Element::namespaced("text", NAMESPACE_STANZAS).with_text(text))
            }
            None => error,
        }
    }
}
