use std::sync::Arc;

use touchline_club::models::post::Post;
use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_team,
    config::Config,
    cqrs::{CommandHandler, commands::CreatePost},
    uow::UnitOfWork,
};

pub struct CreatePostCommandHandler {}

impl Default for CreatePostCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePostCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreatePost> for CreatePostCommandHandler {
    async fn handle(
        &self,
        command: CreatePost,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        if let Some(team_id) = command.team_id {
            club_team(uow, &command.ctx, team_id).await?;
        }
        let post = Post::new(
            command.post_id,
            command.ctx.club_id,
            command.team_id,
            command.ctx.user_id,
            command.content,
        )?;
        uow.posts().save(&post).await?;
        Ok(())
    }
}
