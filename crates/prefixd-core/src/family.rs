//! Address-family selection for prefix lookups.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The address family a lookup selects from the registry response.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// IPv4 originated prefixes.
    #[default]
    Ipv4,
    /// IPv6 originated prefixes.
    Ipv6,
}

impl AddressFamily {
    /// Uppercase label used in not-found messages (`IPV4` / `IPV6`).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ipv4 => "IPV4",
            Self::Ipv6 => "IPV6",
        }
    }

    /// Query-parameter spelling (`ipv4` / `ipv6`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamily {
    type Err = Error;

    /// Accepts exactly `ipv4` and `ipv6`; anything else is a client error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ipv4" => Ok(Self::Ipv4),
            "ipv6" => Ok(Self::Ipv6),
            other => Err(Error::InvalidFamily {
                value: other.to_string(),
            }),
        }
    }
}
