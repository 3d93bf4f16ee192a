use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{CommandHandler, commands::DeleteEvent},
    uow::UnitOfWork,
};

pub struct DeleteEventCommandHandler {}

impl Default for DeleteEventCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteEventCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteEvent> for DeleteEventCommandHandler {
    async fn handle(
        &self,
        command: DeleteEvent,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let (event, _) = club_event(uow, &command.ctx, command.event_id).await?;
        uow.events().delete(event.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use touchline_club::test_utils::{EventFactoryOptions, event_factory};
    use touchline_types::{
        Result,
        errors::{ApplicationError, ClubError},
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, setup_club, test_config};

    #[tokio::test]
    async fn test_cannot_delete_event_of_another_club() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let ours = setup_club(&mock).await?;
        let theirs = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let event = event_factory(EventFactoryOptions {
            team_id: Some(theirs.team.id),
            ..Default::default()
        });
        mock_uow.events().save(&event).await?;
        let handler = DeleteEventCommandHandler::new();

        let result = handler
            .handle(
                DeleteEvent {
                    ctx: ours.coach,
                    event_id: event.id,
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Club(ClubError::TeamNotInClub(_)))
        ));

        handler
            .handle(
                DeleteEvent {
                    ctx: theirs.coach,
                    event_id: event.id,
                },
                &mock_uow,
                &test_config(),
            )
            .await?;
        assert!(mock_uow.events().get_by_id(event.id).await.is_err());
        Ok(())
    }
}
