use std::sync::Arc;

use touchline_club::models::availability::Availability;
use touchline_types::{Result, errors::ClubError};

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{CommandHandler, commands::SetPlayerAvailability},
    uow::UnitOfWork,
};

pub struct SetPlayerAvailabilityCommandHandler {}

impl Default for SetPlayerAvailabilityCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SetPlayerAvailabilityCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SetPlayerAvailability> for SetPlayerAvailabilityCommandHandler {
    async fn handle(
        &self,
        command: SetPlayerAvailability,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let (event, team) = club_event(uow, &command.ctx, command.event_id).await?;
        let player = uow.players().get_by_id(command.player_id).await?;
        if player.team_id != team.id {
            return Err(ClubError::PlayerNotOnTeam {
                player_id: player.id,
                team_id: team.id,
            }
            .into());
        }

        let availability = Availability::new(event.id, player.id, command.status, command.notes);
        let stored = uow.availabilities().upsert(&availability).await?;
        tracing::debug!(availability_id = %stored.id, status = ?stored.status, "Availability set");
        Ok(())
    }
}
