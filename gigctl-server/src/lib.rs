//! gigctl-server: HTTP CRUD service for users, orders and offers
//!
//! Layers, leaves first:
//! - `models`: entity rows and their writable field sets
//! - `db`: SQLite pool, schema and per-entity repositories
//! - `seed`: fixture loading at startup
//! - `http`: axum routes, error mapping and the server loop

pub mod db;
pub mod http;
pub mod models;
pub mod seed;

pub use db::{create_pool, init_schema, open_in_memory};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use seed::{seed_fixtures, Fixtures, SeedError, SeedReport};
