use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{EventWithAvailabilities, ListTeamEvents},
    },
    uow::UnitOfWork,
};

pub struct ListTeamEventsHandler {}

impl ListTeamEventsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListTeamEvents> for ListTeamEventsHandler {
    async fn handle(
        &self,
        query: ListTeamEvents,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListTeamEvents as Query>::Output, ApplicationError> {
        let team = club_team(uow, &query.ctx, query.team_id).await?;
        let availability_repo = uow.availabilities();

        let mut result = Vec::new();
        for event in uow.events().list_by_team(team.id).await? {
            let availabilities = availability_repo.list_by_event(event.id).await?;
            result.push(EventWithAvailabilities {
                event,
                availabilities,
            });
        }
        Ok(result)
    }
}
