//! holocron-server: HTTP API over the star registry
//!
//! Exposes read endpoints for people, planets, and users, plus favorite
//! add/remove/list for the current user, backed by PostgreSQL.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
