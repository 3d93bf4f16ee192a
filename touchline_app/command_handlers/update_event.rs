use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{CommandHandler, commands::UpdateEvent},
    uow::UnitOfWork,
};

pub struct UpdateEventCommandHandler {}

impl Default for UpdateEventCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateEventCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateEvent> for UpdateEventCommandHandler {
    async fn handle(
        &self,
        command: UpdateEvent,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        command.ctx.require_coach()?;
        let (mut event, _) = club_event(uow, &command.ctx, command.event_id).await?;
        event.update(command.ctx.user_id, command.details);
        uow.events().save(&event).await?;
        Ok(())
    }
}
