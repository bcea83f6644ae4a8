//! Command implementations for gigctl CLI

pub mod serve;

pub use serve::run_serve;
