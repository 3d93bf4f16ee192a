use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use touchline_app::repository::InvitationRepository;
use touchline_club::models::invitation::Invitation;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresInvitationRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresInvitationRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> InvitationRepository for PostgresInvitationRepository<'a> {
    async fn save(&self, invitation: &Invitation) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO invitations (token, club_id, player_id, email, created_at, accepted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (token) DO UPDATE SET accepted_at = $6
            "#,
        )
        .bind(&invitation.token)
        .bind(invitation.club_id)
        .bind(invitation.player_id)
        .bind(&invitation.email)
        .bind(invitation.created_at)
        .bind(invitation.accepted_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_token(&self, token: &str) -> Result<Invitation, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Invitation>(
            r#"
            SELECT token, club_id, player_id, email, created_at, accepted_at
            FROM invitations
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::InvitationNotFound))?;

        Ok(rec.into())
    }
}
