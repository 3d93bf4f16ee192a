use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::ProfileRepository;
use touchline_club::models::profile::Profile;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models::{self as db_models, UserRole};

#[derive(Clone)]
pub struct PostgresProfileRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresProfileRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> ProfileRepository for PostgresProfileRepository<'a> {
    async fn save(&self, profile: &Profile) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let role: UserRole = profile.role.into();

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, club_id, role, full_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET
                club_id = $2,
                role = $3,
                full_name = $4
            "#,
        )
        .bind(profile.user_id)
        .bind(profile.club_id)
        .bind(role)
        .bind(&profile.full_name)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Profile, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Profile>(
            "SELECT user_id, club_id, role, full_name FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::ProfileNotFound(user_id)))?;

        Ok(rec.into())
    }

    async fn list_by_club(&self, club_id: Uuid) -> Result<Vec<Profile>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Profile>(
            r#"
            SELECT user_id, club_id, role, full_name
            FROM profiles
            WHERE club_id = $1
            ORDER BY full_name
            "#,
        )
        .bind(club_id)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
