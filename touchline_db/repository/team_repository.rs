use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::TeamRepository;
use touchline_club::models::team::Team;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresTeamRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresTeamRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> TeamRepository for PostgresTeamRepository<'a> {
    async fn save(&self, team: &Team) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO teams (id, club_id, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET name = $3
            "#,
        )
        .bind(team.id)
        .bind(team.club_id)
        .bind(&team.name)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, team_id: Uuid) -> Result<Team, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Team>(
            "SELECT id, club_id, name FROM teams WHERE id = $1",
        )
        .bind(team_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::TeamNotFound(team_id)))?;

        Ok(rec.into())
    }

    async fn list_by_club(&self, club_id: Uuid) -> Result<Vec<Team>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Team>(
            "SELECT id, club_id, name FROM teams WHERE club_id = $1 ORDER BY name",
        )
        .bind(club_id)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, team_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        // Roster, events and team posts cascade.
        sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(team_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }
}
