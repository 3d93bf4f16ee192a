use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;
use uuid::Uuid;

use touchline_app::{
    command_handlers::PostMessageCommandHandler,
    cqrs::{commands::PostMessage, queries::ListChatMessages},
    queries_handlers::ListChatMessagesHandler,
};

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ChatHistoryParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageForm {
    pub content: String,
}

pub async fn list_chat_messages(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<ChatHistoryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = state
        .app_bus
        .query(
            ListChatMessages {
                ctx: user.ctx,
                limit: params.limit,
            },
            ListChatMessagesHandler::new(),
        )
        .await?;
    Ok(Json(messages))
}

pub async fn post_chat_message(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Json(form), _): WithRejection<Json<ChatMessageForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let message_id = Uuid::new_v4();
    state
        .app_bus
        .execute(
            PostMessage {
                ctx: user.ctx,
                message_id,
                content: form.content,
            },
            PostMessageCommandHandler::new(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": message_id }))))
}

/// GET /api/chat/wait – Long poll. Answers with the next change of the
/// caller's club, or `204 No Content` once the configured wait elapses.
pub async fn wait_for_change(State(state): State<AppState>, user: CurrentUser) -> Response {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let subscription = state
        .app_bus
        .changes()
        .subscribe(user.ctx.club_id, move |change| {
            // The receiver is gone once the poll is answered.
            let _ = tx.send(change.clone());
        });

    let waited = tokio::time::timeout(state.config().chat_wait(), rx.recv()).await;
    subscription.unsubscribe();

    match waited {
        Ok(Some(change)) => Json(change).into_response(),
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}
