use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

use touchline_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{ListUpcomingEvents, UpcomingEvent},
    },
    uow::UnitOfWork,
};

pub struct ListUpcomingEventsHandler {}

impl ListUpcomingEventsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListUpcomingEvents> for ListUpcomingEventsHandler {
    async fn handle(
        &self,
        query: ListUpcomingEvents,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListUpcomingEvents as Query>::Output, ApplicationError> {
        let team_names: HashMap<_, _> = uow
            .teams()
            .list_by_club(query.ctx.club_id)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        let events = uow
            .events()
            .list_upcoming_by_club(query.ctx.club_id, query.now)
            .await?;

        Ok(events
            .into_iter()
            .map(|event| UpcomingEvent {
                team_name: team_names.get(&event.team_id).cloned().unwrap_or_default(),
                event,
            })
            .collect())
    }
}
