use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_player,
    config::Config,
    cqrs::{CommandHandler, commands::DeletePlayer},
    uow::UnitOfWork,
};

pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let (player, _) = club_player(uow, &command.ctx, command.player_id).await?;
        uow.players().delete(player.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use touchline_types::{
        Result,
        errors::{ApplicationError, ClubError},
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, add_roster_player, setup_club, test_config};

    #[tokio::test]
    async fn test_delete_player_is_coach_only() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let (player, ctx) = add_roster_player(&mock, &fixture.team, "Paul", &[], true).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let handler = DeletePlayerCommandHandler::new();

        let result = handler
            .handle(
                DeletePlayer {
                    ctx: ctx.unwrap(),
                    player_id: player.id,
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Club(ClubError::CoachRoleRequired))
        ));

        handler
            .handle(
                DeletePlayer {
                    ctx: fixture.coach,
                    player_id: player.id,
                },
                &mock_uow,
                &test_config(),
            )
            .await?;
        assert!(mock_uow.players().list_by_team(fixture.team.id).await?.is_empty());
        Ok(())
    }
}
