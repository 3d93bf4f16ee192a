use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::club_player,
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPlayer},
    uow::UnitOfWork,
};

pub struct GetPlayerHandler {}

impl GetPlayerHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPlayer> for GetPlayerHandler {
    async fn handle(
        &self,
        query: GetPlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetPlayer as Query>::Output, ApplicationError> {
        let (player, _) = club_player(uow, &query.ctx, query.player_id).await?;
        Ok(player)
    }
}
