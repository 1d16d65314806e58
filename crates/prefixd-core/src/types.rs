//! Common types used across the prefixd service.

use serde::{Deserialize, Serialize};

use crate::family::AddressFamily;

/// The resource a lookup is for, as supplied by the caller.
///
/// Forwarded to the routing registry verbatim; the registry accepts both bare
/// numbers (`13335`) and prefixed forms (`AS13335`), so no parsing happens
/// here.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resource(pub String);

impl Resource {
    /// Creates a new `Resource` from a string.
    #[must_use]
    pub fn new(resource: impl Into<String>) -> Self {
        Self(resource.into())
    }

    /// Returns the raw resource value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Resource {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Resource {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Originated prefixes for one resource, split by address family.
///
/// Entries are opaque CIDR strings exactly as the registry reported them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefixSet {
    /// IPv4 originated prefixes.
    pub v4: Vec<String>,
    /// IPv6 originated prefixes.
    pub v6: Vec<String>,
}

impl PrefixSet {
    /// Returns the prefixes for the given family.
    #[must_use]
    pub fn family(&self, family: AddressFamily) -> &[String] {
        match family {
            AddressFamily::Ipv4 => &self.v4,
            AddressFamily::Ipv6 => &self.v6,
        }
    }

    /// Consumes the set, returning the list for the given family.
    #[must_use]
    pub fn into_family(self, family: AddressFamily) -> Vec<String> {
        match family {
            AddressFamily::Ipv4 => self.v4,
            AddressFamily::Ipv6 => self.v6,
        }
    }

    /// Returns `true` if no prefixes exist for the given family.
    #[must_use]
    pub fn is_empty(&self, family: AddressFamily) -> bool {
        self.family(family).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_selection() {
        let set = PrefixSet {
            v4: vec!["10.0.0.0/8".to_string()],
            v6: vec![],
        };
        assert_eq!(set.family(AddressFamily::Ipv4).len(), 1);
        assert!(set.is_empty(AddressFamily::Ipv6));
        assert_eq!(set.into_family(AddressFamily::Ipv4), vec!["10.0.0.0/8"]);
    }
}
