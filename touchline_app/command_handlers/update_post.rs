use std::sync::Arc;

use touchline_types::Result;

use crate::{
    command_handlers::helpers::club_post,
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePost},
    uow::UnitOfWork,
};

pub struct UpdatePostCommandHandler {}

impl Default for UpdatePostCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePostCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePost> for UpdatePostCommandHandler {
    async fn handle(
        &self,
        command: UpdatePost,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let mut post = club_post(uow, &command.ctx, command.post_id).await?;
        post.edit(command.ctx.user_id, command.content)?;
        uow.posts().save(&post).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use touchline_club::models::post::{Post, PostContent};
    use touchline_types::{
        Result,
        errors::{ApplicationError, ClubError},
        posts::PostCategory,
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, add_roster_player, setup_club, test_config};

    #[tokio::test]
    async fn test_only_author_edits_post() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let (_, player_ctx) = add_roster_player(&mock, &fixture.team, "Reader", &[], true).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let post = Post::new(
            Uuid::new_v4(),
            fixture.club.id,
            None,
            fixture.coach.user_id,
            PostContent {
                title: None,
                content: "Training moved to 19h".to_string(),
                category: PostCategory::TrainingInfo,
            },
        )?;
        mock_uow.posts().save(&post).await?;
        let handler = UpdatePostCommandHandler::new();
        let edit = PostContent {
            title: Some("Update".to_string()),
            content: "Training moved to 19h30".to_string(),
            category: PostCategory::TrainingInfo,
        };

        let result = handler
            .handle(
                UpdatePost {
                    ctx: player_ctx.unwrap(),
                    post_id: post.id,
                    content: edit.clone(),
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Club(ClubError::NotPostAuthor(_)))
        ));

        handler
            .handle(
                UpdatePost {
                    ctx: fixture.coach,
                    post_id: post.id,
                    content: edit,
                },
                &mock_uow,
                &test_config(),
            )
            .await?;
        let stored = mock_uow.posts().get_by_id(post.id).await?;
        assert_eq!(stored.content, "Training moved to 19h30");
        assert_eq!(stored.title.as_deref(), Some("Update"));
        Ok(())
    }
}
