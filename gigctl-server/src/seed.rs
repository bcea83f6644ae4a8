//! Startup seeding from the bundled fixture files
//!
//! Fixtures live in `fixtures/*.json` and are compiled into the binary.
//! Order fixtures write their dates as `MM/DD/YYYY`; they are converted to
//! calendar dates here and never reach the HTTP layer in that form.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::db::repos::{DbError, OfferRepo, OrderRepo, UserRepo};
use crate::models::{OfferFields, OrderFields, UserFields};

const USERS_JSON: &str = include_str!("../fixtures/users.json");
const ORDERS_JSON: &str = include_str!("../fixtures/orders.json");
const OFFERS_JSON: &str = include_str!("../fixtures/offers.json");

/// Date format used by order fixtures.
pub const FIXTURE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Errors returned while loading fixtures.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse {fixture} fixtures: {source}")]
    Parse {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {field} '{value}' in order fixture: {source}")]
    Date {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("seeding failed: {0}")]
    Database(#[from] DbError),
}

/// Order fixture as written on disk, dates still in fixture format.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OrderFixture {
    #[serde(deserialize_with = "Option::deserialize")]
    name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    description: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    start_date: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    end_date: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    address: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    price: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    customer_id: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    executor_id: Option<i64>,
}

impl OrderFixture {
    fn into_fields(self) -> Result<OrderFields, SeedError> {
        Ok(OrderFields {
            start_date: parse_fixture_date("start_date", self.start_date)?,
            end_date: parse_fixture_date("end_date", self.end_date)?,
            name: self.name,
            description: self.description,
            address: self.address,
            price: self.price,
            customer_id: self.customer_id,
            executor_id: self.executor_id,
        })
    }
}

/// A `null` fixture date stays unset.
fn parse_fixture_date(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, SeedError> {
    value
        .map(|value| {
            NaiveDate::parse_from_str(&value, FIXTURE_DATE_FORMAT)
                .map_err(|source| SeedError::Date { field, value, source })
        })
        .transpose()
}

fn parse_list<T: DeserializeOwned>(fixture: &'static str, json: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError::Parse { fixture, source })
}

/// Parsed fixture set, ready to insert.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub users: Vec<UserFields>,
    pub orders: Vec<OrderFields>,
    pub offers: Vec<OfferFields>,
}

impl Fixtures {
    /// The fixture set bundled with the crate.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(USERS_JSON, ORDERS_JSON, OFFERS_JSON)
    }

    pub fn from_json(users: &str, orders: &str, offers: &str) -> Result<Self, SeedError> {
        let orders = parse_list::<OrderFixture>("order", orders)?
            .into_iter()
            .map(OrderFixture::into_fields)
            .collect::<Result<Vec<_>, SeedError>>()?;

        Ok(Self {
            users: parse_list("user", users)?,
            orders,
            offers: parse_list("offer", offers)?,
        })
    }
}

/// Number of rows inserted per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

/// Insert `fixtures` one row at a time: users, then orders, then offers.
///
/// Returns `None` without writing anything when the users table already has
/// rows, so restarting against a file database does not duplicate the seed.
pub async fn seed_fixtures(
    pool: &SqlitePool,
    fixtures: &Fixtures,
) -> Result<Option<SeedReport>, SeedError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(DbError::from)?;

    if existing > 0 {
        info!(reason = "already seeded", existing, "fixture seeding skipped");
        return Ok(None);
    }

    let users = UserRepo::new(pool);
    for user in &fixtures.users {
        users.create(user).await?;
    }

    let orders = OrderRepo::new(pool);
    for order in &fixtures.orders {
        orders.create(order).await?;
    }

    let offers = OfferRepo::new(pool);
    for offer in &fixtures.offers {
        offers.create(offer).await?;
    }

    let report = SeedReport {
        users: fixtures.users.len(),
        orders: fixtures.orders.len(),
        offers: fixtures.offers.len(),
    };
    info!(
        users = report.users,
        orders = report.orders,
        offers = report.offers,
        "fixtures loaded"
    );
    Ok(Some(report))
}
