//! Runtime settings for the Agent Information handler.

use crate::discovery::services::DEFAULT_INBOX_CAPACITY;
use crate::stanza::{Jid, JidError};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default ceiling on the wait for a remote probe answer.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors returned while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be decoded.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The server domain is not a valid address.
    #[error("invalid server domain: {0}")]
    InvalidServerDomain(#[from] JidError),

    /// The inbox capacity must admit at least one answer.
    #[error("inbox capacity must be at least 1")]
    ZeroInboxCapacity,

    /// The query timeout must be positive.
    #[error("query timeout must be greater than zero")]
    ZeroQueryTimeout,
}

/// Settings shared by the correlator, walker and handler.
///
/// # Examples
///
/// ```
/// use agent_information::config::AgentInformationConfig;
/// use std::time::Duration;
///
/// let config = AgentInformationConfig::from_json_str(
///     r#"{ "server_domain": "example.org", "query_timeout_ms": 2500 }"#,
/// )
/// .expect("valid configuration");
///
/// assert_eq!(config.server_domain().domain(), "example.org");
/// assert_eq!(config.query_timeout(), Duration::from_millis(2500));
/// assert_eq!(config.inbox_capacity(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInformationConfig {
    server_domain: Jid,
    query_timeout: Duration,
    inbox_capacity: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    server_domain: String,
    #[serde(default = "default_query_timeout_ms")]
    query_timeout_ms: u64,
    #[serde(default = "default_inbox_capacity")]
    inbox_capacity: usize,
}

const fn default_query_timeout_ms() -> u64 {
    5_000
}

const fn default_inbox_capacity() -> usize {
    DEFAULT_INBOX_CAPACITY
}

impl AgentInformationConfig {
    /// Creates a configuration with default timeout and capacity.
    #[must_use]
    pub const fn new(server_domain: Jid) -> Self {
        Self {
            server_domain,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            inbox_capacity: DEFAULT_INBOX_CAPACITY,
        }
    }

    /// Decodes a JSON configuration document.
    ///
    /// `query_timeout_ms` and `inbox_capacity` are optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or a value
    /// is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::new(Jid::parse(&raw.server_domain)?)
            .with_query_timeout(Duration::from_millis(raw.query_timeout_ms))?
            .with_inbox_capacity(raw.inbox_capacity)
    }

    /// Overrides the remote probe timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroQueryTimeout`] for a zero duration.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroQueryTimeout);
        }
        self.query_timeout = timeout;
        Ok(self)
    }

    /// Overrides the per-exchange inbox capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroInboxCapacity`] for zero.
    pub fn with_inbox_capacity(mut self, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroInboxCapacity);
        }
        self.inbox_capacity = capacity;
        Ok(self)
    }

    /// Returns the server's own address.
    #[must_use]
    pub const fn server_domain(&self) -> &Jid {
        &self.server_domain
    }

    /// Returns the remote probe timeout.
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Returns the per-exchange inbox capacity.
    #[must_use]
    pub const fn inbox_capacity(&self) -> usize {
        self.inbox_capacity
    }
}
