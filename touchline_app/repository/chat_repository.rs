use uuid::Uuid;

use touchline_club::models::chat::{Channel, ChatMessage};
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait ChatRepository: Send + Sync {
    async fn save_channel(&self, channel: &Channel) -> Result<(), ApplicationError>;

    async fn get_channel_by_club(&self, club_id: Uuid) -> Result<Channel, ApplicationError>;

    async fn save_message(&self, message: &ChatMessage) -> Result<(), ApplicationError>;

    /// The `limit` most recent messages of a channel, oldest first.
    async fn list_recent_messages(
        &self,
        channel_id: Uuid,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, ApplicationError>;
}
