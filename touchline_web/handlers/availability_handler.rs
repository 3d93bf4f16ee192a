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
    command_handlers::{SetPlayerAvailabilityCommandHandler, UpdateAvailabilityCommandHandler},
    cqrs::{
        commands::{SetPlayerAvailability, UpdateAvailability},
        queries::GetAvailability,
    },
    queries_handlers::GetAvailabilityHandler,
};
use touchline_types::events::AvailabilityStatus;

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct AvailabilityForm {
    pub status: AvailabilityStatus,
    pub notes: Option<String>,
}

/// PUT /api/events/{event_id}/availability/{player_id} – Coach records a
/// player's presence.
pub async fn set_player_availability(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((event_id, player_id)): Path<(Uuid, Uuid)>,
    WithRejection(Json(form), _): WithRejection<Json<AvailabilityForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            SetPlayerAvailability {
                ctx: user.ctx,
                event_id,
                player_id,
                status: form.status,
                notes: form.notes,
            },
            SetPlayerAvailabilityCommandHandler::new(),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_availability(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(availability_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .app_bus
        .query(
            GetAvailability {
                ctx: user.ctx,
                availability_id,
            },
            GetAvailabilityHandler::new(),
        )
        .await?;
    Ok(Json(details))
}

pub async fn update_availability(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(availability_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<AvailabilityForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            UpdateAvailability {
                ctx: user.ctx,
                availability_id,
                status: form.status,
                notes: form.notes,
            },
            UpdateAvailabilityCommandHandler::new(),
        )
        .await?;

    let details = state
        .app_bus
        .query(
            GetAvailability {
                ctx: user.ctx,
                availability_id,
            },
            GetAvailabilityHandler::new(),
        )
        .await?;
    Ok(Json(details))
}
