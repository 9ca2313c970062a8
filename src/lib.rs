//! recstore - a minimal in-memory record store with a JSON REST API
//!
//! One ordered in-process collection of records (users or products,
//! chosen at deployment time) behind a small CRUD, search and stats
//! surface.

pub mod cli;
pub mod http_server;
pub mod store;
