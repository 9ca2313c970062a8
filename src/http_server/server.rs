//! # HTTP Server
//!
//! Builds the per-variant store and router, applies CORS and request
//! tracing, and serves.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::{seed, ProductProfile, RandomId, RecordStore, UserProfile};

use super::config::{ServerConfig, StoreVariant};
use super::routes::{fallback_handler, health_routes, record_routes, search_routes};

/// HTTP server for the record store
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the router for the configured variant
    fn build_router(config: &ServerConfig) -> Router {
        let ids = RandomId::default();

        let api = match config.variant {
            StoreVariant::Users => {
                let records = if config.seed { seed::users(&ids) } else { Vec::new() };
                let store: Arc<RecordStore<UserProfile>> =
                    Arc::new(RecordStore::with_records(Box::new(ids), records));
                record_routes(store)
            }
            StoreVariant::Products => {
                let records = if config.seed {
                    seed::products(&ids)
                } else {
                    Vec::new()
                };
                let store: Arc<RecordStore<ProductProfile>> =
                    Arc::new(RecordStore::with_records(Box::new(ids), records));
                record_routes(store.clone()).merge(search_routes(store))
            }
        };

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        };

        api.merge(health_routes())
            .fallback(fallback_handler)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        info!(
            addr = %addr,
            variant = ?self.config.variant,
            seed = self.config.seed,
            "record store API listening"
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
