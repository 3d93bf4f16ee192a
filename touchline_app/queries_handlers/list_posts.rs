use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::{author_name, club_team, member_names},
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{ListPosts, PostView},
    },
    uow::UnitOfWork,
};

pub struct ListPostsHandler {}

impl ListPostsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPosts> for ListPostsHandler {
    async fn handle(
        &self,
        query: ListPosts,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListPosts as Query>::Output, ApplicationError> {
        if let Some(team_id) = query.team_id {
            club_team(uow, &query.ctx, team_id).await?;
        }
        let names = member_names(uow, query.ctx.club_id).await?;
        let posts = uow
            .posts()
            .list_by_club(query.ctx.club_id, query.team_id)
            .await?;

        Ok(posts
            .into_iter()
            .map(|post| PostView {
                author_name: author_name(&names, post.author_id),
                post,
            })
            .collect())
    }
}
