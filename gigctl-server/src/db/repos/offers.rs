//! Offer repository

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{Offer, OfferFields};

const RESOURCE: &str = "offer";

/// Offer repository
pub struct OfferRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OfferRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, fields: &OfferFields) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO offers (order_id, executor_id) VALUES (?, ?)")
            .bind(fields.order_id)
            .bind(fields.executor_id)
            .execute(self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, order_id = ?fields.order_id, "offer created");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Offer, DbError> {
        sqlx::query_as::<_, Offer>("SELECT id, order_id, executor_id FROM offers WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: RESOURCE,
                id,
            })
    }

    pub async fn list(&self) -> Result<Vec<Offer>, DbError> {
        let offers = sqlx::query_as::<_, Offer>("SELECT id, order_id, executor_id FROM offers")
            .fetch_all(self.pool)
            .await?;

        Ok(offers)
    }

    /// Overwrite both `order_id` and `executor_id` of offer `id`.
    pub async fn replace(&self, id: i64, fields: &OfferFields) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE offers SET order_id = ?, executor_id = ? WHERE id = ?")
            .bind(fields.order_id)
            .bind(fields.executor_id)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        tracing::debug!(id, "offer replaced");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM offers WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        tracing::debug!(id, "offer deleted");
        Ok(())
    }
}
