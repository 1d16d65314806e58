//! RIPE RIS client implementation.

use async_trait::async_trait;

use prefixd_core::{Error, PrefixSet, Resource, Result};

use crate::response::RisDocument;
use crate::source::PrefixSource;

/// Default RIS prefix-lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://stat.ripe.net/data/ris-prefixes/data.json";

/// Configuration for the RIS client.
#[derive(Debug, Clone)]
pub struct RisConfig {
    /// Endpoint URL for the `ris-prefixes` data call.
    pub endpoint: String,
    /// User-Agent sent with every request. RIPE asks API consumers to
    /// identify themselves.
    pub user_agent: String,
}

impl Default for RisConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("prefixd/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RisConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> RisConfigBuilder {
        RisConfigBuilder::default()
    }
}

/// Builder for `RisConfig`.
#[derive(Debug, Default)]
pub struct RisConfigBuilder {
    endpoint: Option<String>,
    user_agent: Option<String>,
}

impl RisConfigBuilder {
    /// Sets the endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the User-Agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the config, filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> RisConfig {
        let defaults = RisConfig::default();
        RisConfig {
            endpoint: self.endpoint.unwrap_or(defaults.endpoint),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        }
    }
}

/// Client for the RIS `ris-prefixes` endpoint.
pub struct RisClient {
    http: reqwest::Client,
    config: RisConfig,
}

impl RisClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: RisConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::internal(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Creates a new client against the default RIS endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn with_defaults() -> Result<Self> {
        Self::new(RisConfig::default())
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl PrefixSource for RisClient {
    async fn originated_prefixes(&self, resource: &Resource) -> Result<PrefixSet> {
        tracing::debug!(resource = %resource, endpoint = %self.config.endpoint, "Querying RIS");

        // types=o restricts the answer to originated prefixes.
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("list_prefixes", "true"),
                ("types", "o"),
                ("resource", resource.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::internal(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(resource = %resource, status = %status, "RIS returned error status");
            return Err(Error::upstream_status(status.as_u16()));
        }

        let document: RisDocument = response
            .json()
            .await
            .map_err(|e| Error::internal(e.to_string()))?;

        let prefixes = document.into_prefix_set();
        tracing::debug!(
            resource = %resource,
            v4 = prefixes.v4.len(),
            v6 = prefixes.v6.len(),
            "RIS lookup complete"
        );

        Ok(prefixes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_ris_endpoint() {
        let config = RisConfig::builder().build();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.user_agent.starts_with("prefixd/"));
    }

    #[test]
    fn builder_overrides_endpoint() {
        let config = RisConfig::builder()
            .endpoint("http://localhost:9000/data.json")
            .build();
        assert_eq!(config.endpoint, "http://localhost:9000/data.json");
    }
}
