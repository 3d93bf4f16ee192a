use std::sync::Arc;

use touchline_club::models::chat::ChatMessage;
use touchline_types::Result;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::PostMessage},
    uow::UnitOfWork,
};

pub struct PostMessageCommandHandler {}

impl Default for PostMessageCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PostMessageCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<PostMessage> for PostMessageCommandHandler {
    async fn handle(
        &self,
        command: PostMessage,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let chat_repo = uow.chat();
        let channel = chat_repo.get_channel_by_club(command.ctx.club_id).await?;
        let message = ChatMessage::new(
            command.message_id,
            channel.id,
            command.ctx.user_id,
            &command.content,
        )?;
        chat_repo.save_message(&message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use touchline_types::{
        Result,
        errors::{ApplicationError, ClubError},
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, setup_club, test_config};

    #[tokio::test]
    async fn test_post_message_to_club_channel() -> Result<()> {
        let mock = MockUnitOfWork::new();
        let fixture = setup_club(&mock).await?;
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let handler = PostMessageCommandHandler::new();

        handler
            .handle(
                PostMessage {
                    ctx: fixture.coach,
                    message_id: Uuid::new_v4(),
                    content: "  Bus leaves at 8  ".to_string(),
                },
                &mock_uow,
                &test_config(),
            )
            .await?;
        let messages = mock_uow
            .chat()
            .list_recent_messages(fixture.channel.id, 10)
            .await?;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "Bus leaves at 8");

        let result = handler
            .handle(
                PostMessage {
                    ctx: fixture.coach,
                    message_id: Uuid::new_v4(),
                    content: "   ".to_string(),
                },
                &mock_uow,
                &test_config(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Club(ClubError::MissingField(_)))
        ));
        Ok(())
    }
}
