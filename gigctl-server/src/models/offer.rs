//! Offer entity - an executor bidding on an order

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRow)]
pub struct Offer {
    pub id: i64,
    pub order_id: Option<i64>,
    pub executor_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferFields {
    #[serde(deserialize_with = "Option::deserialize")]
    pub order_id: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub executor_id: Option<i64>,
}

impl Offer {
    pub fn fields(&self) -> OfferFields {
        OfferFields {
            order_id: self.order_id,
            executor_id: self.executor_id,
        }
    }
}
