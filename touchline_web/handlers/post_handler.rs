use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use uuid::Uuid;

use touchline_app::{
    command_handlers::{
        CreatePostCommandHandler, DeletePostCommandHandler, UpdatePostCommandHandler,
    },
    cqrs::{
        commands::{CreatePost, DeletePost, UpdatePost},
        queries::{GetPost, ListPosts},
    },
    queries_handlers::{GetPostHandler, ListPostsHandler},
};
use touchline_club::models::post::PostContent;
use touchline_types::posts::PostCategory;

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct PostFilter {
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub category: PostCategory,
    /// Only read on creation; a post never moves between feeds.
    pub team_id: Option<Uuid>,
}

impl PostForm {
    fn into_parts(self) -> (Option<Uuid>, PostContent) {
        (
            self.team_id,
            PostContent {
                title: self.title,
                content: self.content,
                category: self.category,
            },
        )
    }
}

/// GET /api/posts – Club-wide feed, or a team's with `?team_id=`.
pub async fn list_posts(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(filter): Query<PostFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let posts = state
        .app_bus
        .query(
            ListPosts {
                ctx: user.ctx,
                team_id: filter.team_id,
            },
            ListPostsHandler::new(),
        )
        .await?;
    Ok(Json(posts))
}

pub async fn get_post(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .app_bus
        .query(
            GetPost {
                ctx: user.ctx,
                post_id,
            },
            GetPostHandler::new(),
        )
        .await?;
    Ok(Json(post))
}

pub async fn create_post(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Json(form), _): WithRejection<Json<PostForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = Uuid::new_v4();
    let (team_id, content) = form.into_parts();
    state
        .app_bus
        .execute(
            CreatePost {
                ctx: user.ctx,
                post_id,
                team_id,
                content,
            },
            CreatePostCommandHandler::new(),
        )
        .await?;

    let post = state
        .app_bus
        .query(
            GetPost {
                ctx: user.ctx,
                post_id,
            },
            GetPostHandler::new(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(post_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<PostForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, content) = form.into_parts();
    state
        .app_bus
        .execute(
            UpdatePost {
                ctx: user.ctx,
                post_id,
                content,
            },
            UpdatePostCommandHandler::new(),
        )
        .await?;

    let post = state
        .app_bus
        .query(
            GetPost {
                ctx: user.ctx,
                post_id,
            },
            GetPostHandler::new(),
        )
        .await?;
    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            DeletePost {
                ctx: user.ctx,
                post_id,
            },
            DeletePostCommandHandler::new(),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
