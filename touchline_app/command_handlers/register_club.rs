use std::sync::Arc;

use touchline_club::models::{
    chat::Channel,
    club::Club,
    player::validate_email,
    profile::Profile,
};
use touchline_types::{
    Result,
    common::User,
    errors::{ApplicationError, ClubError, DbError},
    roles::Role,
};

use crate::{
    auth::{ensure_password_strength, hash_password},
    config::Config,
    cqrs::{CommandHandler, commands::RegisterClub},
    uow::UnitOfWork,
};

pub struct RegisterClubCommandHandler {}

impl Default for RegisterClubCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterClubCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RegisterClub> for RegisterClubCommandHandler {
    async fn handle(
        &self,
        command: RegisterClub,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        if command.email.trim().is_empty() {
            return Err(ClubError::MissingField("email").into());
        }
        let email = validate_email(&command.email)?;
        ensure_password_strength(&command.password)?;

        let club = Club::new(command.club_id, &command.club_name, command.club_city)?;
        let profile = Profile::new(
            command.user_id,
            club.id,
            Role::AdminCoach,
            &command.coach_full_name,
        )?;

        let user_repo = uow.users();
        if user_repo.get_by_email(&email).await.is_ok() {
            return Err(ApplicationError::Db(DbError::EmailTaken(email)));
        }

        let user = User::new(command.user_id, email, hash_password(&command.password)?);
        user_repo.save(&user).await?;
        uow.clubs().save(&club).await?;
        uow.chat().save_channel(&Channel::for_club(&club)).await?;
        uow.profiles().save(&profile).await?;

        tracing::info!(club_id = %club.id, user_id = %user.id, "Registered club {}", club.name);
        Ok(())
    }
}
