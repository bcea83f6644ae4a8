//! Order entity
//!
//! Dates are calendar dates. On the wire they are always `YYYY-MM-DD`
//! (chrono's `NaiveDate` serde format); fixtures use a different format and
//! convert before they reach [`OrderFields`]. Every non-id field may be null.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order record as stored and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub price: Option<i64>,
    /// User who placed the order. Not checked against the users table.
    pub customer_id: Option<i64>,
    /// User assigned to carry out the order. Not checked either.
    pub executor_id: Option<i64>,
}

/// Writable order fields. Keys are required, values may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderFields {
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub description: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub address: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub customer_id: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub executor_id: Option<i64>,
}

impl Order {
    pub fn fields(&self) -> OrderFields {
        OrderFields {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            address: self.address.clone(),
            price: self.price,
            customer_id: self.customer_id,
            executor_id: self.executor_id,
        }
    }
}
