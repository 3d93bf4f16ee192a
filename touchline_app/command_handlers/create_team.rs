use std::sync::Arc;

use touchline_club::models::team::Team;
use touchline_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreateTeam},
    uow::UnitOfWork,
};

pub struct CreateTeamCommandHandler {}

impl Default for CreateTeamCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateTeamCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateTeam> for CreateTeamCommandHandler {
    async fn handle(
        &self,
        command: CreateTeam,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let team = Team::new(command.team_id, command.ctx.club_id, &command.name)?;
        uow.teams().save(&team).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use touchline_types::{
        Result,
        errors::{ApplicationError, ClubError},
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, add_roster_player, setup_club, test_config};

    #[tokio::test]
    async fn test_coach_creates_team() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let team_id = Uuid::new_v4();

        CreateTeamCommandHandler::new()
            .handle(
                CreateTeam {
                    ctx: fixture.coach,
                    team_id,
                    name: "Cadets".to_string(),
                },
                &mock_uow,
                &test_config(),
            )
            .await?;

        let teams = mock_uow.teams().list_by_club(fixture.club.id).await?;
        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Cadets", "Seniors"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_player_cannot_create_team() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let (_, ctx) = add_roster_player(&mock, &fixture.team, "Louis", &[], true).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);

        let result = CreateTeamCommandHandler::new()
            .handle(
                CreateTeam {
                    ctx: ctx.unwrap(),
                    team_id: Uuid::new_v4(),
                    name: "Rebels".to_string(),
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Club(ClubError::CoachRoleRequired))
        ));
        Ok(())
    }
}
