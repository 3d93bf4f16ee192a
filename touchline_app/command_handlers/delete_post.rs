use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_post,
    config::Config,
    cqrs::{CommandHandler, commands::DeletePost},
    uow::UnitOfWork,
};

pub struct DeletePostCommandHandler {}

impl Default for DeletePostCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePostCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePost> for DeletePostCommandHandler {
    async fn handle(
        &self,
        command: DeletePost,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let post = club_post(uow, &command.ctx, command.post_id).await?;
        post.ensure_author(command.ctx.user_id)?;
        uow.posts().delete(post.id).await?;
        Ok(())
    }
}
