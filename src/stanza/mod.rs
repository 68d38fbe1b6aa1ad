//! Stanza model shared by every part of the crate.
//!
//! These types stand in for the host's stanza primitives: addresses
//! ([`Jid`]), payload trees ([`Element`]), IQ envelopes ([`Iq`]) and
//! stanza errors ([`StanzaError`]). They carry data only; reading and
//! writing the wire format is left to the transport.

mod element;
mod error;
mod iq;
mod jid;

pub use element::Element;
pub use error::{ErrorCondition, ErrorType, NAMESPACE_STANZAS, StanzaError};
pub use iq::{Iq, IqType, ParseIqTypeError};
pub use jid::{Jid, JidError};
