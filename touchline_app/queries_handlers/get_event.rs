use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::club_event,
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetEvent},
    uow::UnitOfWork,
};

pub struct GetEventHandler {}

impl GetEventHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetEvent> for GetEventHandler {
    async fn handle(
        &self,
        query: GetEvent,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetEvent as Query>::Output, ApplicationError> {
        let (event, _) = club_event(uow, &query.ctx, query.event_id).await?;
        Ok(event)
    }
}
