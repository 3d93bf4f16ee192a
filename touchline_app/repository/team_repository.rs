use uuid::Uuid;

use touchline_club::models::team::Team;
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait TeamRepository: Send + Sync {
    async fn save(&self, team: &Team) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, team_id: Uuid) -> Result<Team, ApplicationError>;

    /// Teams of a club ordered by name.
    async fn list_by_club(&self, club_id: Uuid) -> Result<Vec<Team>, ApplicationError>;

    /// Deletes a team with its roster and events.
    async fn delete(&self, team_id: Uuid) -> Result<(), ApplicationError>;
}
