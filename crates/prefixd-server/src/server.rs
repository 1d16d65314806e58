//! HTTP server implementation for originated-prefix lookups.
//!
//! A single catch-all handler parses the query string, asks the configured
//! [`PrefixSource`] for the resource's originated prefixes, and renders the
//! selected family as a sorted, newline-joined plain-text body.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use prefixd_core::{sort_prefixes, AddressFamily, Error, Resource, Result};
use prefixd_ris::{PrefixSource, RisClient, RisConfig, DEFAULT_ENDPOINT};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
    /// RIS endpoint the lookups go to.
    pub ris_endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            cors: true,
            ris_endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for `ServerConfig`.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
    ris_endpoint: Option<String>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    #[must_use]
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    #[must_use]
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Sets the RIS endpoint.
    #[must_use]
    pub fn ris_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.ris_endpoint = Some(endpoint.into());
        self
    }

    /// Builds the server config.
    #[must_use]
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            cors: self.cors.unwrap_or(defaults.cors),
            ris_endpoint: self.ris_endpoint.unwrap_or(defaults.ris_endpoint),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Where originated prefixes come from.
    pub source: Arc<dyn PrefixSource>,
    /// Server configuration.
    pub config: ServerConfig,
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration, backed by the RIS
    /// client.
    ///
    /// # Errors
    ///
    /// Returns an error if the RIS client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let ris_config = RisConfig::builder()
            .endpoint(&config.ris_endpoint)
            .build();
        let client = RisClient::new(ris_config)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Creates a new server with a custom prefix source.
    pub fn with_source(config: ServerConfig, source: Arc<dyn PrefixSource>) -> Self {
        let state = Arc::new(AppState {
            source,
            config: config.clone(),
        });
        Self { config, state }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            .route("/health", get(health))
            // Every other method and path lands on the lookup handler; only
            // the query string and host header matter.
            .fallback(lookup)
            .with_state(self.state.clone());

        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(
            addr = %self.config.addr,
            endpoint = %self.config.ris_endpoint,
            "Starting prefixd server"
        );
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(Error::Io)?;

        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| Error::internal(e.to_string()))?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

// === Handlers ===

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Default, Deserialize)]
struct LookupParams {
    resource: Option<String>,
    #[serde(rename = "type")]
    family: Option<String>,
}

async fn lookup(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<LookupParams>,
) -> Response {
    let resource = match params.resource {
        Some(resource) if uri.path() != "/" => Resource::from(resource),
        _ => return usage_response(&headers),
    };

    let family = match params.family.as_deref() {
        None => AddressFamily::default(),
        Some(raw) => match raw.parse::<AddressFamily>() {
            Ok(family) => family,
            Err(err) => return plain_response(StatusCode::BAD_REQUEST, err.to_string()),
        },
    };

    tracing::info!(resource = %resource, family = %family, "Prefix lookup");

    match fetch_prefixes(&state, &resource, family).await {
        Ok(body) => plain_response(StatusCode::OK, body),
        Err(err) => {
            tracing::warn!(resource = %resource, error = %err, "Lookup failed");
            plain_response(status_for(&err), err.to_string())
        },
    }
}

/// Fetches, filters, sorts, and joins the prefixes for one lookup.
async fn fetch_prefixes(
    state: &AppState,
    resource: &Resource,
    family: AddressFamily,
) -> Result<String> {
    let prefixes = state.source.originated_prefixes(resource).await?;
    let mut addresses = prefixes.into_family(family);

    if addresses.is_empty() {
        return Err(Error::no_prefixes(family, resource.as_str()));
    }

    sort_prefixes(&mut addresses, family);
    Ok(addresses.join("\n"))
}

fn status_for(err: &Error) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// A body with no declared content type.
fn plain_response(status: StatusCode, body: String) -> Response {
    let mut response = (status, body).into_response();
    response.headers_mut().remove(header::CONTENT_TYPE);
    response
}

fn usage_response(headers: &HeaderMap) -> Response {
    let hostname = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");

    let example = format!(
        "Example Cloudflare AS13335:\n\
         https://{hostname}/geoip?resource=13335\n\
         https://{hostname}/geoip?resource=13335&type=ipv4\n\
         https://{hostname}/geoip?resource=13335&type=ipv6\n"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        example,
    )
        .into_response()
}
