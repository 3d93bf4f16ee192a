use uuid::Uuid;

use touchline_club::models::club::Club;
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait ClubRepository: Send + Sync {
    async fn save(&self, club: &Club) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, club_id: Uuid) -> Result<Club, ApplicationError>;
}
