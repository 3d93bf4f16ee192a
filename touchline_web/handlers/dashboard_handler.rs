use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;

use touchline_app::{cqrs::queries::GetDashboard, queries_handlers::GetDashboardHandler};

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

/// GET /api/dashboard – Upcoming events of the caller's roster player.
pub async fn dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state
        .app_bus
        .query(
            GetDashboard {
                ctx: user.ctx,
                now: Utc::now(),
            },
            GetDashboardHandler::new(),
        )
        .await?;
    Ok(Json(dashboard))
}
