use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::{author_name, club_post, member_names},
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{GetPost, PostView},
    },
    uow::UnitOfWork,
};

pub struct GetPostHandler {}

impl GetPostHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPost> for GetPostHandler {
    async fn handle(
        &self,
        query: GetPost,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetPost as Query>::Output, ApplicationError> {
        let post = club_post(uow, &query.ctx, query.post_id).await?;
        let names = member_names(uow, query.ctx.club_id).await?;
        Ok(PostView {
            author_name: author_name(&names, post.author_id),
            post,
        })
    }
}
