//! The lookup seam between the server and the routing registry.

use async_trait::async_trait;

use prefixd_core::{PrefixSet, Resource, Result};

/// Trait defining where originated prefixes come from.
#[async_trait]
pub trait PrefixSource: Send + Sync {
    /// Fetches the prefixes originated by `resource`, both families.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is unreachable, answers with a
    /// non-success status, or returns an undecodable body.
    async fn originated_prefixes(&self, resource: &Resource) -> Result<PrefixSet>;
}
