use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::EventRepository;
use touchline_club::{lineup::Composition, models::event::Event};
use touchline_types::errors::{ApplicationError, DbError};

use crate::{
    mapping::composition_to_json,
    models::{self as db_models, EventKind},
};

const EVENT_COLUMNS: &str =
    "e.id, e.team_id, e.author_id, e.kind, e.starts_at, e.location, e.opponent, e.details, e.composition";

#[derive(Clone)]
pub struct PostgresEventRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresEventRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

fn into_events(rows: Vec<db_models::Event>) -> Result<Vec<Event>, ApplicationError> {
    rows.into_iter()
        .map(|row| Event::try_from(row).map_err(ApplicationError::Db))
        .collect()
}

#[async_trait::async_trait]
impl<'a> EventRepository for PostgresEventRepository<'a> {
    async fn save(&self, event: &Event) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let kind: EventKind = event.kind.into();
        let composition = composition_to_json(&event.composition)?;

        sqlx::query(
            r#"
            INSERT INTO events (id, team_id, author_id, kind, starts_at, location, opponent, details, composition)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE
            SET
                author_id = $3,
                kind = $4,
                starts_at = $5,
                location = $6,
                opponent = $7,
                details = $8,
                composition = $9
            "#,
        )
        .bind(event.id)
        .bind(event.team_id)
        .bind(event.author_id)
        .bind(kind)
        .bind(event.starts_at)
        .bind(&event.location)
        .bind(&event.opponent)
        .bind(&event.details)
        .bind(composition)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, event_id: Uuid) -> Result<Event, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events e WHERE e.id = $1"
        ))
        .bind(event_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::EventNotFound(event_id)))?;

        Ok(rec.try_into()?)
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Event>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events e WHERE e.team_id = $1 ORDER BY e.starts_at ASC"
        ))
        .bind(team_id)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        into_events(rows)
    }

    async fn list_upcoming_by_team(
        &self,
        team_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<Event>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Event>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events e
            WHERE e.team_id = $1 AND e.starts_at >= $2
            ORDER BY e.starts_at ASC
            "#
        ))
        .bind(team_id)
        .bind(from)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        into_events(rows)
    }

    async fn list_upcoming_by_club(
        &self,
        club_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<Event>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Event>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events e
            JOIN teams t ON t.id = e.team_id
            WHERE t.club_id = $1 AND e.starts_at >= $2
            ORDER BY e.starts_at ASC
            "#
        ))
        .bind(club_id)
        .bind(from)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        into_events(rows)
    }

    async fn save_composition(
        &self,
        event_id: Uuid,
        composition: &Composition,
    ) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let document = composition_to_json(composition)?;

        let result = sqlx::query("UPDATE events SET composition = $2 WHERE id = $1")
            .bind(event_id)
            .bind(document)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::EventNotFound(event_id)));
        }
        Ok(())
    }

    async fn delete(&self, event_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }
}
