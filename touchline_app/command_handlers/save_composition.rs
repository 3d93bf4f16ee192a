use std::{collections::HashSet, sync::Arc};
use uuid::Uuid;

use touchline_types::{Result, errors::ClubError};

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{CommandHandler, commands::SaveComposition},
    uow::UnitOfWork,
};

pub struct SaveCompositionCommandHandler {}

impl Default for SaveCompositionCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveCompositionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SaveComposition> for SaveCompositionCommandHandler {
    async fn handle(
        &self,
        command: SaveComposition,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let (event, team) = club_event(uow, &command.ctx, command.event_id).await?;

        let roster: HashSet<Uuid> = uow
            .players()
            .list_by_team(team.id)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        if let Some((_, stranger)) = command
            .composition
            .iter()
            .find(|(_, player_id)| !roster.contains(player_id))
        {
            return Err(ClubError::PlayerNotOnTeam {
                player_id: stranger,
                team_id: team.id,
            }
            .into());
        }

        uow.events()
            .save_composition(event.id, &command.composition)
            .await?;
        tracing::info!(
            event_id = %event.id,
            positions = command.composition.len(),
            "Saved composition"
        );
        Ok(())
    }
}
