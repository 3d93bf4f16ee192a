use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_app::{
    command_handlers::{
        AddPlayerCommandHandler, DeletePlayerCommandHandler, InvitePlayerCommandHandler,
        UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{AddPlayer, DeletePlayer, InvitePlayer, UpdatePlayer},
        queries::{GetPlayer, ListTeamPlayers},
    },
    queries_handlers::{GetPlayerHandler, ListTeamPlayersHandler},
};
use touchline_club::models::{
    invitation::Invitation,
    player::{PlayerDetails, parse_position_labels},
};

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

/// Roster entry as typed by the coach. `positions` is a comma-separated list
/// of preferred position labels.
#[derive(Debug, Deserialize)]
pub struct PlayerForm {
    pub name: String,
    #[serde(default)]
    pub positions: String,
    pub license_status: Option<String>,
    pub photo_url: Option<String>,
}

impl From<PlayerForm> for PlayerDetails {
    fn from(form: PlayerForm) -> Self {
        PlayerDetails {
            name: form.name,
            positions: parse_position_labels(&form.positions),
            license_status: form.license_status,
            photo_url: form.photo_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InviteForm {
    pub email: String,
}

#[derive(Debug, Serialize)]
struct InviteResponse {
    token: String,
    invite_link: String,
}

pub async fn list_players(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let players = state
        .app_bus
        .query(
            ListTeamPlayers {
                ctx: user.ctx,
                team_id,
            },
            ListTeamPlayersHandler::new(),
        )
        .await?;
    Ok(Json(players))
}

pub async fn get_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(player_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let player = state
        .app_bus
        .query(
            GetPlayer {
                ctx: user.ctx,
                player_id,
            },
            GetPlayerHandler::new(),
        )
        .await?;
    Ok(Json(player))
}

pub async fn add_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<PlayerForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let player_id = Uuid::new_v4();
    state
        .app_bus
        .execute(
            AddPlayer {
                ctx: user.ctx,
                player_id,
                team_id,
                details: form.into(),
            },
            AddPlayerCommandHandler::new(),
        )
        .await?;

    let player = state
        .app_bus
        .query(
            GetPlayer {
                ctx: user.ctx,
                player_id,
            },
            GetPlayerHandler::new(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn update_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(player_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<PlayerForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            UpdatePlayer {
                ctx: user.ctx,
                player_id,
                details: form.into(),
            },
            UpdatePlayerCommandHandler::new(),
        )
        .await?;

    let player = state
        .app_bus
        .query(
            GetPlayer {
                ctx: user.ctx,
                player_id,
            },
            GetPlayerHandler::new(),
        )
        .await?;
    Ok(Json(player))
}

pub async fn delete_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(player_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            DeletePlayer {
                ctx: user.ctx,
                player_id,
            },
            DeletePlayerCommandHandler::new(),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/players/{id}/invite – Returns the invite link; delivering it is
/// up to the coach.
pub async fn invite_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(player_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<InviteForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let token = Invitation::generate_token();
    state
        .app_bus
        .execute(
            InvitePlayer {
                ctx: user.ctx,
                player_id,
                email: form.email,
                token: token.clone(),
            },
            InvitePlayerCommandHandler::new(),
        )
        .await?;

    let invite_link = state.config().invite_link(&token);
    Ok((
        StatusCode::CREATED,
        Json(InviteResponse { token, invite_link }),
    ))
}
