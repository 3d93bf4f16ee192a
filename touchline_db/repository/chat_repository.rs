use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::ChatRepository;
use touchline_club::models::chat::{Channel, ChatMessage};
use touchline_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresChatRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresChatRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> ChatRepository for PostgresChatRepository<'a> {
    async fn save_channel(&self, channel: &Channel) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO channels (id, club_id, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET name = $3
            "#,
        )
        .bind(channel.id)
        .bind(channel.club_id)
        .bind(&channel.name)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_channel_by_club(&self, club_id: Uuid) -> Result<Channel, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Channel>(
            "SELECT id, club_id, name FROM channels WHERE club_id = $1",
        )
        .bind(club_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::ChannelNotFound(club_id)))?;

        Ok(rec.into())
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, channel_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id)
        .bind(message.channel_id)
        .bind(message.author_id)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn list_recent_messages(
        &self,
        channel_id: Uuid,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        // Newest N, returned oldest first.
        let rows = sqlx::query_as::<_, db_models::ChatMessage>(
            r#"
            SELECT id, channel_id, author_id, content, created_at
            FROM (
                SELECT id, channel_id, author_id, content, created_at
                FROM chat_messages
                WHERE channel_id = $1
                ORDER BY created_at DESC
                LIMIT $2
            ) recent
            ORDER BY created_at ASC
            "#,
        )
        .bind(channel_id)
        .bind(limit)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
