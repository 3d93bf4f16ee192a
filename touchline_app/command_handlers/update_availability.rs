use std::sync::Arc;

use touchline_types::{Result, errors::ClubError};

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{CommandHandler, commands::UpdateAvailability},
    uow::UnitOfWork,
};

pub struct UpdateAvailabilityCommandHandler {}

impl Default for UpdateAvailabilityCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateAvailabilityCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateAvailability> for UpdateAvailabilityCommandHandler {
    async fn handle(
        &self,
        command: UpdateAvailability,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let availability_repo = uow.availabilities();
        let mut availability = availability_repo.get_by_id(command.availability_id).await?;
        club_event(uow, &command.ctx, availability.event_id).await?;

        if !command.ctx.is_coach() {
            let own = uow
                .players()
                .get_by_user_id(command.ctx.user_id)
                .await
                .map_err(|_| ClubError::NotOwnAvailability(availability.id))?;
            if own.id != availability.player_id {
                return Err(ClubError::NotOwnAvailability(availability.id).into());
            }
        }

        availability.set_status(command.status, command.notes);
        availability_repo.update(&availability).await?;
        Ok(())
    }
}
