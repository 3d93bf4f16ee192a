use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::AvailabilityRepository;
use touchline_club::models::availability::Availability;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models::{self as db_models, AvailabilityStatus};

#[derive(Clone)]
pub struct PostgresAvailabilityRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresAvailabilityRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> AvailabilityRepository for PostgresAvailabilityRepository<'a> {
    async fn upsert(&self, availability: &Availability) -> Result<Availability, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let status: AvailabilityStatus = availability.status.into();

        let rec = sqlx::query_as::<_, db_models::Availability>(
            r#"
            INSERT INTO availabilities (id, event_id, player_id, status, notes, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (event_id, player_id) DO UPDATE
            SET
                status = $4,
                notes = $5,
                updated_at = $6
            RETURNING id, event_id, player_id, status, notes, updated_at
            "#,
        )
        .bind(availability.id)
        .bind(availability.event_id)
        .bind(availability.player_id)
        .bind(status)
        .bind(&availability.notes)
        .bind(availability.updated_at)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rec.into())
    }

    async fn update(&self, availability: &Availability) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let status: AvailabilityStatus = availability.status.into();

        let result = sqlx::query(
            "UPDATE availabilities SET status = $2, notes = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(availability.id)
        .bind(status)
        .bind(&availability.notes)
        .bind(availability.updated_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::AvailabilityNotFound(
                availability.id,
            )));
        }
        Ok(())
    }

    async fn get_by_id(&self, availability_id: Uuid) -> Result<Availability, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Availability>(
            r#"
            SELECT id, event_id, player_id, status, notes, updated_at
            FROM availabilities
            WHERE id = $1
            "#,
        )
        .bind(availability_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::AvailabilityNotFound(
            availability_id,
        )))?;

        Ok(rec.into())
    }

    async fn get_for_player(
        &self,
        event_id: Uuid,
        player_id: Uuid,
    ) -> Result<Option<Availability>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Availability>(
            r#"
            SELECT id, event_id, player_id, status, notes, updated_at
            FROM availabilities
            WHERE event_id = $1 AND player_id = $2
            "#,
        )
        .bind(event_id)
        .bind(player_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rec.map(Into::into))
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Availability>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Availability>(
            r#"
            SELECT id, event_id, player_id, status, notes, updated_at
            FROM availabilities
            WHERE event_id = $1
            ORDER BY updated_at
            "#,
        )
        .bind(event_id)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
