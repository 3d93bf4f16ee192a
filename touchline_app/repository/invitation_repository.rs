use touchline_club::models::invitation::Invitation;
use touchline_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn save(&self, invitation: &Invitation) -> Result<(), ApplicationError>;

    async fn get_by_token(&self, token: &str) -> Result<Invitation, ApplicationError>;
}
