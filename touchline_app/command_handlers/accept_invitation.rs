use std::sync::Arc;

use touchline_club::models::profile::Profile;
use touchline_types::{
    Result,
    common::User,
    errors::{ApplicationError, DbError},
    roles::Role,
};

use crate::{
    auth::{ensure_password_strength, hash_password},
    config::Config,
    cqrs::{CommandHandler, commands::AcceptInvitation},
    uow::UnitOfWork,
};

pub struct AcceptInvitationCommandHandler {}

impl Default for AcceptInvitationCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AcceptInvitationCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AcceptInvitation> for AcceptInvitationCommandHandler {
    async fn handle(
        &self,
        command: AcceptInvitation,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let invitation_repo = uow.invitations();
        let mut invitation = invitation_repo.get_by_token(&command.token).await?;
        invitation.accept()?;

        ensure_password_strength(&command.password)?;
        let profile = Profile::new(
            command.user_id,
            invitation.club_id,
            Role::Player,
            &command.full_name,
        )?;

        let mut player = uow.players().get_by_id(invitation.player_id).await?;
        player.link_user(command.user_id)?;

        let user_repo = uow.users();
        if user_repo.get_by_email(&invitation.email).await.is_ok() {
            return Err(ApplicationError::Db(DbError::EmailTaken(
                invitation.email.clone(),
            )));
        }

        let user = User::new(
            command.user_id,
            invitation.email.clone(),
            hash_password(&command.password)?,
        );
        user_repo.save(&user).await?;
        uow.profiles().save(&profile).await?;
        uow.players().save(&player).await?;
        invitation_repo.save(&invitation).await?;

        tracing::info!(player_id = %player.id, user_id = %user.id, "Invitation accepted");
        Ok(())
    }
}
