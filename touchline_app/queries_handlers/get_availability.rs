use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::{ApplicationError, ClubError};

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{AvailabilityDetails, GetAvailability},
    },
    uow::UnitOfWork,
};

pub struct GetAvailabilityHandler {}

impl GetAvailabilityHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetAvailability> for GetAvailabilityHandler {
    async fn handle(
        &self,
        query: GetAvailability,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetAvailability as Query>::Output, ApplicationError> {
        let availability = uow.availabilities().get_by_id(query.availability_id).await?;
        let (event, _) = club_event(uow, &query.ctx, availability.event_id).await?;
        let player = uow.players().get_by_id(availability.player_id).await?;

        if !query.ctx.is_coach() && player.user_id != Some(query.ctx.user_id) {
            return Err(ClubError::NotOwnAvailability(availability.id).into());
        }

        Ok(AvailabilityDetails {
            player_name: player.name,
            event_title: event.title(),
            event_starts_at: event.starts_at,
            availability,
        })
    }
}
