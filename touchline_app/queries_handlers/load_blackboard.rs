use async_trait::async_trait;
use std::{collections::HashSet, sync::Arc};
use tracing::warn;

use touchline_club::lineup::CompositionBoard;
use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{Query, QueryHandler, queries::LoadBlackboard},
    uow::UnitOfWork,
};

pub struct LoadBlackboardHandler {}

impl LoadBlackboardHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<LoadBlackboard> for LoadBlackboardHandler {
    async fn handle(
        &self,
        query: LoadBlackboard,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<LoadBlackboard as Query>::Output, ApplicationError> {
        let (event, team) = club_event(uow, &query.ctx, query.event_id).await?;
        let roster = uow.players().list_by_team(team.id).await?;
        let eligible: HashSet<_> = uow
            .availabilities()
            .list_by_event(event.id)
            .await?
            .into_iter()
            .filter(|a| a.status.is_eligible())
            .map(|a| a.player_id)
            .collect();

        // Players removed from the roster may still sit in the stored lineup.
        let on_roster: HashSet<_> = roster.iter().map(|p| p.id).collect();
        let mut composition = event.composition;
        let dropped = composition.retain_players(|id| on_roster.contains(&id));
        if dropped > 0 {
            warn!(
                event_id = %event.id,
                dropped,
                "Dropped composition entries for players no longer on the roster"
            );
        }

        Ok(CompositionBoard::new(event.id, roster, eligible, composition))
    }
}

#[cfg(test)]
mod tests {
    use touchline_club::{
        lineup::{BoardState, Composition, PositionKey, assign},
        models::availability::Availability,
        test_utils::{EventFactoryOptions, event_factory},
    };
    use touchline_types::{Result, events::AvailabilityStatus};

    use super::*;
    use crate::{
        command_handlers::{DeletePlayerCommandHandler, SaveCompositionCommandHandler},
        cqrs::{
            CommandHandler,
            commands::{DeletePlayer, SaveComposition},
        },
        test_utils::tests::{MockUnitOfWork, add_roster_player, setup_club, test_config},
    };

    #[tokio::test]
    async fn test_board_pool_holds_present_unassigned_players() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let (prop, _) = add_roster_player(&mock, &fixture.team, "Os", &["Prop"], false).await?;
        let (hooker, _) = add_roster_player(&mock, &fixture.team, "Keith", &["Hooker"], false).await?;
        let (lock, _) = add_roster_player(&mock, &fixture.team, "Colin", &["Lock"], false).await?;
        let (wing, _) = add_roster_player(&mock, &fixture.team, "David", &["Wing"], false).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);

        let event = event_factory(EventFactoryOptions {
            team_id: Some(fixture.team.id),
            ..Default::default()
        });
        mock_uow.events().save(&event).await?;
        let hooker_key = PositionKey::from_number(2).expect("hooker");
        let stored = assign(&Composition::new(), hooker_key, hooker.id);
        mock_uow.events().save_composition(event.id, &stored).await?;

        let availability_repo = mock_uow.availabilities();
        for (player_id, status) in [
            (prop.id, AvailabilityStatus::Present),
            (hooker.id, AvailabilityStatus::Present),
            (lock.id, AvailabilityStatus::Undecided),
            (wing.id, AvailabilityStatus::Present),
        ] {
            availability_repo
                .upsert(&Availability::new(event.id, player_id, status, None))
                .await?;
        }

        let board = LoadBlackboardHandler::new()
            .handle(
                LoadBlackboard {
                    ctx: fixture.coach,
                    event_id: event.id,
                },
                &mock_uow,
                &test_config(),
            )
            .await?;

        assert_eq!(board.state(), BoardState::Saved);
        assert_eq!(board.roster().len(), 4);
        assert_eq!(board.composition(), &stored);
        assert_eq!(board.player_at(hooker_key).map(|p| p.id), Some(hooker.id));
        let pool: Vec<_> = board.available_players().iter().map(|p| p.id).collect();
        assert_eq!(pool, vec![prop.id, wing.id]);
        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_player_leaves_the_loaded_composition() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let (prop, _) = add_roster_player(&mock, &fixture.team, "Os", &["Prop"], false).await?;
        let (hooker, _) = add_roster_player(&mock, &fixture.team, "Keith", &["Hooker"], false).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let config = test_config();

        let event = event_factory(EventFactoryOptions {
            team_id: Some(fixture.team.id),
            ..Default::default()
        });
        mock_uow.events().save(&event).await?;
        let prop_key = PositionKey::from_number(1).expect("loosehead");
        let hooker_key = PositionKey::from_number(2).expect("hooker");
        let stored = assign(&Composition::new(), prop_key, prop.id);
        mock_uow.events().save_composition(event.id, &stored).await?;

        DeletePlayerCommandHandler::new()
            .handle(
                DeletePlayer {
                    ctx: fixture.coach,
                    player_id: prop.id,
                },
                &mock_uow,
                &config,
            )
            .await?;

        let board = LoadBlackboardHandler::new()
            .handle(
                LoadBlackboard {
                    ctx: fixture.coach,
                    event_id: event.id,
                },
                &mock_uow,
                &config,
            )
            .await?;
        assert!(board.composition().is_empty());
        assert_eq!(board.player_at(prop_key), None);

        let composition = assign(board.composition(), hooker_key, hooker.id);
        SaveCompositionCommandHandler::new()
            .handle(
                SaveComposition {
                    ctx: fixture.coach,
                    event_id: event.id,
                    composition: composition.clone(),
                },
                &mock_uow,
                &config,
            )
            .await?;

        let saved = mock_uow.events().get_by_id(event.id).await?;
        assert_eq!(saved.composition, composition);
        Ok(())
    }
}
