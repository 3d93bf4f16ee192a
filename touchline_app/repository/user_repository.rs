use uuid::Uuid;

use touchline_types::{common::User, errors::ApplicationError};

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Saves a new user. Fails with `EmailTaken` when the e-mail is in use.
    async fn save(&self, user: &User) -> Result<(), ApplicationError>;

    /// Find user by email.
    async fn get_by_email(&self, email: &str) -> Result<User, ApplicationError>;

    /// Find user by id.
    async fn get_by_id(&self, user_id: Uuid) -> Result<User, ApplicationError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), ApplicationError>;
}
