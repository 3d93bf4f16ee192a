use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{Account, GetAccount},
    },
    uow::UnitOfWork,
};

pub struct GetAccountHandler {}

impl GetAccountHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetAccount> for GetAccountHandler {
    async fn handle(
        &self,
        query: GetAccount,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetAccount as Query>::Output, ApplicationError> {
        let ctx = query.ctx;
        let user = uow.users().get_by_id(ctx.user_id).await?;
        let profile = uow.profiles().get_by_user_id(ctx.user_id).await?;
        let club = uow.clubs().get_by_id(ctx.club_id).await?;
        let player = uow.players().get_by_user_id(ctx.user_id).await.ok();

        Ok(Account {
            user_id: user.id,
            email: user.email,
            full_name: profile.full_name,
            role: profile.role,
            club,
            player,
        })
    }
}
