use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use uuid::Uuid;

use touchline_app::{
    command_handlers::{
        CreateTeamCommandHandler, DeleteTeamCommandHandler, RenameTeamCommandHandler,
    },
    cqrs::{
        commands::{CreateTeam, DeleteTeam, RenameTeam},
        queries::{GetTeam, ListTeams},
    },
    queries_handlers::{GetTeamHandler, ListTeamsHandler},
};

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct TeamForm {
    pub name: String,
}

pub async fn list_teams(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let teams = state
        .app_bus
        .query(ListTeams { ctx: user.ctx }, ListTeamsHandler::new())
        .await?;
    Ok(Json(teams))
}

pub async fn get_team(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let team = state
        .app_bus
        .query(
            GetTeam {
                ctx: user.ctx,
                team_id,
            },
            GetTeamHandler::new(),
        )
        .await?;
    Ok(Json(team))
}

pub async fn create_team(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Json(form), _): WithRejection<Json<TeamForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let team_id = Uuid::new_v4();
    state
        .app_bus
        .execute(
            CreateTeam {
                ctx: user.ctx,
                team_id,
                name: form.name,
            },
            CreateTeamCommandHandler::new(),
        )
        .await?;

    let team = state
        .app_bus
        .query(
            GetTeam {
                ctx: user.ctx,
                team_id,
            },
            GetTeamHandler::new(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn rename_team(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<TeamForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            RenameTeam {
                ctx: user.ctx,
                team_id,
                name: form.name,
            },
            RenameTeamCommandHandler::new(),
        )
        .await?;

    let team = state
        .app_bus
        .query(
            GetTeam {
                ctx: user.ctx,
                team_id,
            },
            GetTeamHandler::new(),
        )
        .await?;
    Ok(Json(team))
}

pub async fn delete_team(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            DeleteTeam {
                ctx: user.ctx,
                team_id,
            },
            DeleteTeamCommandHandler::new(),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
