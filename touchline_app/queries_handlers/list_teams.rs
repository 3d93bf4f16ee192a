use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListTeams},
    uow::UnitOfWork,
};

pub struct ListTeamsHandler {}

impl ListTeamsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListTeams> for ListTeamsHandler {
    async fn handle(
        &self,
        query: ListTeams,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListTeams as Query>::Output, ApplicationError> {
        uow.teams().list_by_club(query.ctx.club_id).await
    }
}
