use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use touchline_app::repository::PostRepository;
use touchline_club::models::post::Post;
use touchline_types::errors::{ApplicationError, DbError};

use crate::models::{self as db_models, PostCategory};

#[derive(Clone)]
pub struct PostgresPostRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPostRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> PostRepository for PostgresPostRepository<'a> {
    async fn save(&self, post: &Post) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let category: PostCategory = post.category.into();

        sqlx::query(
            r#"
            INSERT INTO posts (id, club_id, team_id, author_id, title, content, category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET
                title = $5,
                content = $6,
                category = $7
            "#,
        )
        .bind(post.id)
        .bind(post.club_id)
        .bind(post.team_id)
        .bind(post.author_id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(category)
        .bind(post.created_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, post_id: Uuid) -> Result<Post, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rec = sqlx::query_as::<_, db_models::Post>(
            r#"
            SELECT id, club_id, team_id, author_id, title, content, category, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or(ApplicationError::Db(DbError::PostNotFound(post_id)))?;

        Ok(rec.into())
    }

    async fn list_by_club(
        &self,
        club_id: Uuid,
        team_id: Option<Uuid>,
    ) -> Result<Vec<Post>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Post>(
            r#"
            SELECT id, club_id, team_id, author_id, title, content, category, created_at
            FROM posts
            WHERE club_id = $1 AND team_id IS NOT DISTINCT FROM $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(club_id)
        .bind(team_id)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, post_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }
}
