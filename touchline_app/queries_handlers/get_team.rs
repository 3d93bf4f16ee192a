use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetTeam},
    uow::UnitOfWork,
};

pub struct GetTeamHandler {}

impl GetTeamHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetTeam> for GetTeamHandler {
    async fn handle(
        &self,
        query: GetTeam,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetTeam as Query>::Output, ApplicationError> {
        club_team(uow, &query.ctx, query.team_id).await
    }
}
