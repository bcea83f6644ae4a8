//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One statement per repository call, committed on its own
//! - No check-then-write: missing rows are detected from `rows_affected`
//! - Foreign keys are declared but not enforced

pub mod pool;
pub mod repos;

pub use pool::{create_pool, init_schema, open_in_memory};
pub use repos::*;
