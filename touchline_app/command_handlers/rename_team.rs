use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{CommandHandler, commands::RenameTeam},
    uow::UnitOfWork,
};

pub struct RenameTeamCommandHandler {}

impl Default for RenameTeamCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameTeamCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RenameTeam> for RenameTeamCommandHandler {
    async fn handle(
        &self,
        command: RenameTeam,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let mut team = club_team(uow, &command.ctx, command.team_id).await?;
        team.rename(&command.name)?;
        uow.teams().save(&team).await?;
        Ok(())
    }
}
