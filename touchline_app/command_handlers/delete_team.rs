use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{CommandHandler, commands::DeleteTeam},
    uow::UnitOfWork,
};

pub struct DeleteTeamCommandHandler {}

impl Default for DeleteTeamCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteTeamCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteTeam> for DeleteTeamCommandHandler {
    async fn handle(
        &self,
        command: DeleteTeam,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let team = club_team(uow, &command.ctx, command.team_id).await?;
        uow.teams().delete(team.id).await?;
        tracing::info!(team_id = %team.id, "Deleted team {}", team.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use touchline_types::{
        Result,
        errors::{ApplicationError, DbError},
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, setup_club, test_config};

    #[tokio::test]
    async fn test_delete_team() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);

        DeleteTeamCommandHandler::new()
            .handle(
                DeleteTeam {
                    ctx: fixture.coach,
                    team_id: fixture.team.id,
                },
                &mock_uow,
                &test_config(),
            )
            .await?;

        let result = mock_uow.teams().get_by_id(fixture.team.id).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Db(DbError::TeamNotFound(_)))
        ));
        Ok(())
    }
}
