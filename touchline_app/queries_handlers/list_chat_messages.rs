use async_trait::async_trait;
use std::sync::Arc;

use touchline_types::errors::ApplicationError;

use crate::{
    command_handlers::helpers::{author_name, member_names},
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{ChatMessageView, ListChatMessages},
    },
    uow::UnitOfWork,
};

pub struct ListChatMessagesHandler {}

impl ListChatMessagesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListChatMessages> for ListChatMessagesHandler {
    async fn handle(
        &self,
        query: ListChatMessages,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<ListChatMessages as Query>::Output, ApplicationError> {
        let chat_repo = uow.chat();
        let channel = chat_repo.get_channel_by_club(query.ctx.club_id).await?;
        let limit = query.limit.unwrap_or(config.chat_history).max(1);
        let messages = chat_repo.list_recent_messages(channel.id, limit).await?;
        let names = member_names(uow, query.ctx.club_id).await?;

        Ok(messages
            .into_iter()
            .map(|message| ChatMessageView {
                author_name: author_name(&names, message.author_id),
                message,
            })
            .collect())
    }
}
