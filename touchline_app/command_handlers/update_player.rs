use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_player,
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let (mut player, _) = club_player(uow, &command.ctx, command.player_id).await?;
        player.update(command.details)?;
        uow.players().save(&player).await?;
        Ok(())
    }
}
