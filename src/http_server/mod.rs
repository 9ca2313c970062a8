//! # HTTP Server Module
//!
//! Thin transport layer over the record store: axum routing, CORS,
//! request tracing, config, and the error-to-status mapping.

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig, StoreVariant};
pub use errors::{ApiError, ErrorResponse};
pub use routes::{health_routes, record_routes, search_routes};
pub use server::HttpServer;
