//! Repository implementations for database access
//!
//! Every repository exposes the same five operations: `create`, `get`,
//! `list`, `replace` and `delete`. Each one is a single statement, so each
//! write commits on its own and a failed write leaves the table untouched.

pub mod offers;
pub mod orders;
pub mod users;

pub use offers::OfferRepo;
pub use orders::OrderRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

impl DbError {
    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
