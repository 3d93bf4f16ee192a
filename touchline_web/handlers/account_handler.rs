use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use touchline_app::{
    command_handlers::{ChangePasswordCommandHandler, UpdateProfileCommandHandler},
    cqrs::{
        commands::{ChangePassword, UpdateProfile},
        queries::GetAccount,
    },
    queries_handlers::GetAccountHandler,
};

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateMeForm {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordForm {
    pub new_password: String,
}

pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .app_bus
        .query(GetAccount { ctx: user.ctx }, GetAccountHandler::new())
        .await?;
    Ok(Json(account))
}

pub async fn update_me(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Json(form), _): WithRejection<Json<UpdateMeForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            UpdateProfile {
                ctx: user.ctx,
                full_name: form.full_name,
            },
            UpdateProfileCommandHandler::new(),
        )
        .await?;

    let account = state
        .app_bus
        .query(GetAccount { ctx: user.ctx }, GetAccountHandler::new())
        .await?;
    Ok(Json(account))
}

pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Json(form), _): WithRejection<Json<ChangePasswordForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            ChangePassword {
                ctx: user.ctx,
                new_password: form.new_password,
            },
            ChangePasswordCommandHandler::new(),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
