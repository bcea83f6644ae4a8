//! Order repository
//!
//! Dates are bound as `NaiveDate` and stored as `YYYY-MM-DD` text.
//! `customer_id` and `executor_id` are written as given; nothing checks that
//! the referenced users exist.

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{Order, OrderFields};

const RESOURCE: &str = "order";

/// Order repository
pub struct OrderRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, fields: &OrderFields) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders
                (name, description, start_date, end_date, address, price, customer_id, executor_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(&fields.address)
        .bind(fields.price)
        .bind(fields.customer_id)
        .bind(fields.executor_id)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, customer_id = ?fields.customer_id, "order created");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Order, DbError> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, name, description, start_date, end_date, address, price,
                   customer_id, executor_id
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: RESOURCE,
            id,
        })
    }

    pub async fn list(&self) -> Result<Vec<Order>, DbError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, name, description, start_date, end_date, address, price,
                   customer_id, executor_id
            FROM orders
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Overwrite every field of order `id`, address included.
    pub async fn replace(&self, id: i64, fields: &OrderFields) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET name = ?, description = ?, start_date = ?, end_date = ?, address = ?,
                price = ?, customer_id = ?, executor_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(&fields.address)
        .bind(fields.price)
        .bind(fields.customer_id)
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

        tracing::debug!(id, "order replaced");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        tracing::debug!(id, "order deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::db::open_in_memory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fence() -> OrderFields {
        OrderFields {
            name: Some("Paint the fence".into()),
            description: Some("Two coats, white".into()),
            start_date: Some(date(2024, 3, 1)),
            end_date: Some(date(2024, 3, 15)),
            address: Some("12 Elm St".into()),
            price: Some(3500),
            customer_id: Some(1),
            executor_id: Some(2),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_dates() {
        let pool = open_in_memory().await.unwrap();
        let repo = OrderRepo::new(&pool);

        let id = repo.create(&fence()).await.unwrap();
        let order = repo.get(id).await.unwrap();

        assert_eq!(order.start_date, Some(date(2024, 3, 1)));
        assert_eq!(order.fields(), fence());
    }

    #[tokio::test]
    async fn dates_are_stored_as_iso_text() {
        let pool = open_in_memory().await.unwrap();
        let id = OrderRepo::new(&pool).create(&fence()).await.unwrap();

        let (raw,): (String,) = sqlx::query_as("SELECT start_date FROM orders WHERE id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(raw, "2024-03-01");
    }

    #[tokio::test]
    async fn dangling_user_references_are_accepted() {
        let pool = open_in_memory().await.unwrap();
        let mut fields = fence();
        fields.customer_id = Some(404);
        fields.executor_id = Some(405);

        let id = OrderRepo::new(&pool).create(&fields).await.unwrap();
        assert_eq!(OrderRepo::new(&pool).get(id).await.unwrap().customer_id, Some(404));
    }

    #[tokio::test]
    async fn replace_overwrites_address() {
        let pool = open_in_memory().await.unwrap();
        let repo = OrderRepo::new(&pool);
        let id = repo.create(&fence()).await.unwrap();

        let mut moved = fence();
        moved.address = Some("7 Oak Ave".into());
        moved.price = Some(4000);
        repo.replace(id, &moved).await.unwrap();

        let order = repo.get(id).await.unwrap();
        assert_eq!(order.address.as_deref(), Some("7 Oak Ave"));
        assert_eq!(order.price, Some(4000));
    }

    #[tokio::test]
    async fn null_dates_read_back_as_none() {
        let pool = open_in_memory().await.unwrap();
        let repo = OrderRepo::new(&pool);

        let mut open_ended = fence();
        open_ended.end_date = None;
        let id = repo.create(&open_ended).await.unwrap();

        let order = repo.get(id).await.unwrap();
        assert_eq!(order.start_date, Some(date(2024, 3, 1)));
        assert_eq!(order.end_date, None);
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let pool = open_in_memory().await.unwrap();
        let repo = OrderRepo::new(&pool);

        assert!(repo.get(1).await.unwrap_err().is_not_found());
        assert!(repo.replace(1, &fence()).await.unwrap_err().is_not_found());
        assert!(repo.delete(1).await.unwrap_err().is_not_found());
    }
}
