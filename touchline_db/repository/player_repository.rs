use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::PlayerRepository;
use touchline_club::models::player::Player;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

const PLAYER_COLUMNS: &str =
    "id, team_id, name, positions, license_status, photo_url, email, user_id";

#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO players (id, team_id, name, positions, license_status, photo_url, email, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET
                team_id = $2,
                name = $3,
                positions = $4,
                license_status = $5,
                photo_url = $6,
                email = $7,
                user_id = $8
            "#,
        )
        .bind(player.id)
        .bind(player.team_id)
        .bind(&player.name)
        .bind(&player.positions)
        .bind(&player.license_status)
        .bind(&player.photo_url)
        .bind(&player.email)
        .bind(player.user_id)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(player_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

        Ok(rec.into())
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::UserPlayerNotFound(user_id)))?;

        Ok(rec.into())
    }

    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Player>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE team_id = $1 ORDER BY name"
        ))
        .bind(team_id)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, player_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }
}
