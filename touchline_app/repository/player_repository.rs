use uuid::Uuid;

use touchline_club::models::player::Player;
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn save(&self, player: &Player) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError>;

    /// Roster entry linked to a user account.
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Player, ApplicationError>;

    /// Roster of a team ordered by name.
    async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Player>, ApplicationError>;

    async fn delete(&self, player_id: Uuid) -> Result<(), ApplicationError>;
}
