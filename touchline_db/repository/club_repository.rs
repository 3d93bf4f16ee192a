use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::ClubRepository;
use touchline_club::models::club::Club;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresClubRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresClubRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> ClubRepository for PostgresClubRepository<'a> {
    async fn save(&self, club: &Club) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO clubs (id, name, city)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET
                name = $2,
                city = $3
            "#,
        )
        .bind(club.id)
        .bind(&club.name)
        .bind(&club.city)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, club_id: Uuid) -> Result<Club, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Club>(
            "SELECT id, name, city FROM clubs WHERE id = $1",
        )
        .bind(club_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::ClubNotFound(club_id)))?;

        Ok(rec.into())
    }
}
