//! Route handlers organized by resource
//!
//! Every resource has the same shape:
//! - `GET /<resource>` and `POST /<resource>`
//! - `GET`, `PUT` and `DELETE` on `/<resource>/{id}`

pub mod offers;
pub mod orders;
pub mod users;
