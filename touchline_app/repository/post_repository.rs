use uuid::Uuid;

use touchline_club::models::post::Post;
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait PostRepository: Send + Sync {
    async fn save(&self, post: &Post) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, post_id: Uuid) -> Result<Post, ApplicationError>;

    /// Posts of a club, newest first. `team_id: None` selects club-wide posts.
    async fn list_by_club(
        &self,
        club_id: Uuid,
        team_id: Option<Uuid>,
    ) -> Result<Vec<Post>, ApplicationError>;

    async fn delete(&self, post_id: Uuid) -> Result<(), ApplicationError>;
}
