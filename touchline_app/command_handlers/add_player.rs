use std::sync::Arc;

use touchline_club::models::player::Player;
use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{CommandHandler, commands::AddPlayer},
    uow::UnitOfWork,
};

pub struct AddPlayerCommandHandler {}

impl Default for AddPlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddPlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddPlayer> for AddPlayerCommandHandler {
    async fn handle(
        &self,
        command: AddPlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let team = club_team(uow, &command.ctx, command.team_id).await?;
        let player = Player::new(command.player_id, team.id, command.details)?;
        uow.players().save(&player).await?;
        Ok(())
    }
}
