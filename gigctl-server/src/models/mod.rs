//! Entity models
//!
//! Each entity comes as a pair: the stored row (with its identity) and the
//! field set a client writes. Field sets reject unknown keys and require
//! every field, so a create or replace is always a full record.

pub mod offer;
pub mod order;
pub mod user;

pub use offer::{Offer, OfferFields};
pub use order::{Order, OrderFields};
pub use user::{User, UserFields};
