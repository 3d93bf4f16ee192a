use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListTeamPlayers},
    uow::UnitOfWork,
};

pub struct ListTeamPlayersHandler {}

impl ListTeamPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListTeamPlayers> for ListTeamPlayersHandler {
    async fn handle(
        &self,
        query: ListTeamPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListTeamPlayers as Query>::Output, ApplicationError> {
        let team = club_team(uow, &query.ctx, query.team_id).await?;
        uow.players().list_by_team(team.id).await
    }
}
