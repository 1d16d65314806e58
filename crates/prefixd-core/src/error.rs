//! Error types for the prefixd service.
//!
//! Display strings double as the plain-text response bodies, so their exact
//! wording is part of the HTTP contract.

use thiserror::Error;

use crate::family::AddressFamily;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the prefixd service.
#[derive(Error, Debug)]
pub enum Error {
    /// The `type` query parameter was not a recognized address family.
    #[error("Invalid type parameter. Use \"ipv4\" or \"ipv6\".")]
    InvalidFamily {
        /// The rejected parameter value.
        value: String,
    },

    /// The routing registry answered with a non-success HTTP status.
    #[error("Error fetching data from RIPE API. Status: {status}")]
    UpstreamStatus {
        /// The upstream HTTP status code.
        status: u16,
    },

    /// The registry had no originated prefixes for the requested family.
    #[error("No {} addresses found for AS{resource}.", .family.label())]
    NoPrefixes {
        /// The address family that came up empty.
        family: AddressFamily,
        /// The resource the lookup was for.
        resource: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure during request processing (transport errors,
    /// undecodable upstream bodies).
    #[error("An error occurred: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if the caller supplied bad input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidFamily { .. })
    }

    /// Returns `true` if the lookup succeeded but matched nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoPrefixes { .. })
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates an upstream-status error.
    #[must_use]
    pub fn upstream_status(status: u16) -> Self {
        Self::UpstreamStatus { status }
    }

    /// Creates a no-prefixes error for the given family and resource.
    #[must_use]
    pub fn no_prefixes(family: AddressFamily, resource: impl Into<String>) -> Self {
        Self::NoPrefixes {
            family,
            resource: resource.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_family_message() {
        let err = Error::InvalidFamily {
            value: "ipv5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid type parameter. Use \"ipv4\" or \"ipv6\"."
        );
    }

    #[test]
    fn upstream_status_message_carries_code() {
        let err = Error::upstream_status(503);
        assert_eq!(
            err.to_string(),
            "Error fetching data from RIPE API. Status: 503"
        );
    }

    #[test]
    fn no_prefixes_message_uppercases_family() {
        let err = Error::no_prefixes(AddressFamily::Ipv6, "13335");
        assert_eq!(err.to_string(), "No IPV6 addresses found for AS13335.");
    }

    #[test]
    fn internal_message_is_prefixed() {
        let err = Error::internal("connection reset");
        assert_eq!(err.to_string(), "An error occurred: connection reset");
    }
}
