use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::UserRepository;
use touchline_types::common::User;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresUserRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresUserRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> UserRepository for PostgresUserRepository<'a> {
    async fn save(&self, user: &User) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
              INSERT INTO users (id, email, password_hash)
              VALUES ($1, $2, $3)
              ON CONFLICT (id) DO UPDATE
              SET
                  email = $2,
                  password_hash = $3
              "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(user.password_hash())
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ApplicationError::Db(DbError::EmailTaken(user.email.clone()))
            }
            e => ApplicationError::Db(DbError::Database(e)),
        })?;

        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> Result<User, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or_else(|| ApplicationError::Db(DbError::UserByEmailNotFound(email.to_string())))?;

        Ok(rec.into())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::UserByIdNotFound(id)))?;

        Ok(rec.into())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(user_id)
            .bind(password_hash)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::UserByIdNotFound(user_id)));
        }
        Ok(())
    }
}
