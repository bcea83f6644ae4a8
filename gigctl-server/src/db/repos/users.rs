//! User repository
//!
//! - create: INSERT, identity from `last_insert_rowid`
//! - replace/delete: missing rows detected via `rows_affected`, no pre-check

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{User, UserFields};

const RESOURCE: &str = "user";

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user, returning its generated id.
    pub async fn create(&self, fields: &UserFields) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, age, email, role, phone)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(fields.age)
        .bind(&fields.email)
        .bind(&fields.role)
        .bind(&fields.phone)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "user created");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, age, email, role, phone
            FROM users
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

    /// All users, in whatever order SQLite returns them.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, age, email, role, phone FROM users",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Overwrite every field of user `id`.
    pub async fn replace(&self, id: i64, fields: &UserFields) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, age = ?, email = ?, role = ?, phone = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(fields.age)
        .bind(&fields.email)
        .bind(&fields.role)
        .bind(&fields.phone)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        tracing::debug!(id, "user replaced");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: RESOURCE,
                id,
            });
        }

        tracing::debug!(id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    fn ann() -> UserFields {
        UserFields {
            first_name: Some("Ann".into()),
            last_name: Some("Lee".into()),
            age: Some(30),
            email: Some("a@x.com".into()),
            role: Some("customer".into()),
            phone: Some("555".into()),
        }
    }

    fn bob() -> UserFields {
        UserFields {
            first_name: Some("Bob".into()),
            last_name: Some("Stone".into()),
            age: Some(41),
            email: Some("bob@x.com".into()),
            role: Some("executor".into()),
            phone: Some("556".into()),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let pool = open_in_memory().await.unwrap();
        let repo = UserRepo::new(&pool);

        let id = repo.create(&ann()).await.unwrap();
        let user = repo.get(id).await.unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.fields(), ann());
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let pool = open_in_memory().await.unwrap();
        let repo = UserRepo::new(&pool);

        let first = repo.create(&bob()).await.unwrap();
        let second = repo.create(&ann()).await.unwrap();

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, [first, second]);
    }

    #[tokio::test]
    async fn replace_overwrites_every_field() {
        let pool = open_in_memory().await.unwrap();
        let repo = UserRepo::new(&pool);

        let id = repo.create(&ann()).await.unwrap();
        repo.replace(id, &bob()).await.unwrap();

        assert_eq!(repo.get(id).await.unwrap().fields(), bob());
    }

    #[tokio::test]
    async fn replace_missing_is_not_found() {
        let pool = open_in_memory().await.unwrap();
        let err = UserRepo::new(&pool).replace(5, &ann()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let pool = open_in_memory().await.unwrap();
        let repo = UserRepo::new(&pool);

        let id = repo.create(&ann()).await.unwrap();
        repo.delete(id).await.unwrap();

        assert!(repo.get(id).await.unwrap_err().is_not_found());
        assert!(repo.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn null_fields_are_stored_as_null() {
        let pool = open_in_memory().await.unwrap();
        let repo = UserRepo::new(&pool);

        let mut fields = ann();
        fields.email = None;
        fields.age = None;
        let id = repo.create(&fields).await.unwrap();

        let user = repo.get(id).await.unwrap();
        assert_eq!(user.email, None);
        assert_eq!(user.age, None);
        assert_eq!(user.first_name.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = open_in_memory().await.unwrap();
        let repo = UserRepo::new(&pool);

        let first = repo.create(&ann()).await.unwrap();
        repo.delete(first).await.unwrap();
        let second = repo.create(&ann()).await.unwrap();

        assert!(second > first);
    }
}
