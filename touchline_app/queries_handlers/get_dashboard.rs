use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::{ApplicationError, ClubError, DbError};

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{Dashboard, DashboardEntry, GetDashboard},
    },
    uow::UnitOfWork,
};

pub struct GetDashboardHandler {}

impl GetDashboardHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetDashboard> for GetDashboardHandler {
    async fn handle(
        &self,
        query: GetDashboard,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetDashboard as Query>::Output, ApplicationError> {
        let player = match uow.players().get_by_user_id(query.ctx.user_id).await {
            Ok(player) => player,
            Err(ApplicationError::Db(DbError::UserPlayerNotFound(_))) => {
                return Err(ClubError::NoLinkedPlayer.into());
            }
            Err(e) => return Err(e),
        };
        let team = uow.teams().get_by_id(player.team_id).await?;
        team.ensure_in_club(query.ctx.club_id)?;

        let availability_repo = uow.availabilities();
        let mut events = Vec::new();
        for event in uow
            .events()
            .list_upcoming_by_team(team.id, query.now)
            .await?
        {
            let availability = availability_repo.get_for_player(event.id, player.id).await?;
            events.push(DashboardEntry {
                event,
                availability,
            });
        }

        Ok(Dashboard {
            player,
            team,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use touchline_club::{
        models::availability::Availability,
        test_utils::{EventFactoryOptions, event_factory},
    };
    use touchline_types::{Result, events::AvailabilityStatus};

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, add_roster_player, setup_club, test_config};

    #[tokio::test]
    async fn test_dashboard_shows_own_availability() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let (player, ctx) = add_roster_player(&mock, &fixture.team, "Jonah", &["Wing"], true).await?;
        let (teammate, _) = add_roster_player(&mock, &fixture.team, "Zinzan", &["Number Eight"], false).await?;
        let ctx = ctx.expect("player account");
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);

        let training = event_factory(EventFactoryOptions {
            team_id: Some(fixture.team.id),
            days_from_now: Some(1),
            ..Default::default()
        });
        let fixture_match = event_factory(EventFactoryOptions {
            team_id: Some(fixture.team.id),
            days_from_now: Some(4),
            ..Default::default()
        });
        let finished = event_factory(EventFactoryOptions {
            team_id: Some(fixture.team.id),
            days_from_now: Some(-3),
            ..Default::default()
        });
        for event in [&training, &fixture_match, &finished] {
            mock_uow.events().save(event).await?;
        }
        let availability_repo = mock_uow.availabilities();
        availability_repo
            .upsert(&Availability::new(
                fixture_match.id,
                player.id,
                AvailabilityStatus::Absent,
                Some("injured".to_string()),
            ))
            .await?;
        availability_repo
            .upsert(&Availability::new(
                training.id,
                teammate.id,
                AvailabilityStatus::Present,
                None,
            ))
            .await?;

        let dashboard = GetDashboardHandler::new()
            .handle(
                GetDashboard {
                    ctx,
                    now: Utc::now(),
                },
                &mock_uow,
                &test_config(),
            )
            .await?;

        assert_eq!(dashboard.player.id, player.id);
        assert_eq!(dashboard.team.id, fixture.team.id);
        assert_eq!(dashboard.events.len(), 2);
        assert_eq!(dashboard.events[0].event.id, training.id);
        assert!(dashboard.events[0].availability.is_none());
        let own = dashboard.events[1].availability.as_ref().expect("availability");
        assert_eq!(own.status, AvailabilityStatus::Absent);
        assert_eq!(own.notes.as_deref(), Some("injured"));
        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_requires_linked_player() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);

        let result = GetDashboardHandler::new()
            .handle(
                GetDashboard {
                    ctx: fixture.coach,
                    now: Utc::now(),
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Club(ClubError::NoLinkedPlayer))
        ));
        Ok(())
    }
}
