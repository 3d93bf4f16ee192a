use std::sync::Arc;

use touchline_club::models::{invitation::Invitation, player::validate_email};
use touchline_types::{Result, errors::ClubError};

use crate::{
    command_handlers::helpers::club_player,
    config::Config,
    cqrs::{CommandHandler, commands::InvitePlayer},
    uow::UnitOfWork,
};

pub struct InvitePlayerCommandHandler {}

impl Default for InvitePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InvitePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<InvitePlayer> for InvitePlayerCommandHandler {
    async fn handle(
        &self,
        command: InvitePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let email = validate_email(&command.email)?;
        let (mut player, _) = club_player(uow, &command.ctx, command.player_id).await?;
        if player.user_id.is_some() {
            return Err(ClubError::PlayerAlreadyLinked(player.id).into());
        }

        player.email = Some(email.clone());
        uow.players().save(&player).await?;

        let invitation = Invitation::new(command.token, command.ctx.club_id, player.id, email);
        uow.invitations().save(&invitation).await?;

        // Delivery happens outside the application.
        tracing::info!(
            player_id = %player.id,
            email = %invitation.email,
            "Invitation link: {}",
            config.invite_link(&invitation.token)
        );
        Ok(())
    }
}
