use uuid::Uuid;

use touchline_club::models::profile::Profile;
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts or updates the profile of `profile.user_id`.
    async fn save(&self, profile: &Profile) -> Result<(), ApplicationError>;

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Profile, ApplicationError>;

    async fn list_by_club(&self, club_id: Uuid) -> Result<Vec<Profile>, ApplicationError>;
}
