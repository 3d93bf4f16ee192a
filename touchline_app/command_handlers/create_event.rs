use std::sync::Arc;

use touchline_club::models::event::Event;
use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{CommandHandler, commands::CreateEvent},
    uow::UnitOfWork,
};

pub struct CreateEventCommandHandler {}

impl Default for CreateEventCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateEventCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateEvent> for CreateEventCommandHandler {
    async fn handle(
        &self,
        command: CreateEvent,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let team = club_team(uow, &command.ctx, command.team_id).await?;
        let event = Event::new(command.event_id, team.id, command.ctx.user_id, command.details);
        uow.events().save(&event).await?;
        tracing::debug!(event_id = %event.id, team_id = %team.id, "Created {}", event.title());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use touchline_club::models::event::EventDetails;
    use touchline_types::{Result, events::EventKind};

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, setup_club, test_config};

    #[tokio::test]
    async fn test_create_training_drops_opponent() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let event_id = Uuid::new_v4();

        CreateEventCommandHandler::new()
            .handle(
                CreateEvent {
                    ctx: fixture.coach,
                    event_id,
                    team_id: fixture.team.id,
                    details: EventDetails {
                        kind: EventKind::Training,
                        starts_at: Utc::now() + Duration::days(1),
                        location: Some("Annex pitch".to_string()),
                        opponent: Some("Nobody".to_string()),
                        details: Some("Scrums".to_string()),
                    },
                },
                &mock_uow,
                &test_config(),
            )
            .await?;

        let event = mock_uow.events().get_by_id(event_id).await?;
        assert_eq!(event.kind, EventKind::Training);
        assert_eq!(event.opponent, None);
        assert_eq!(event.author_id, fixture.coach.user_id);
        assert!(event.composition.is_empty());
        Ok(())
    }
}
