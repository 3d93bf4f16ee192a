use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use touchline_app::{
    command_handlers::{
        CreateEventCommandHandler, DeleteEventCommandHandler, UpdateEventCommandHandler,
    },
    cqrs::{
        commands::{CreateEvent, DeleteEvent, UpdateEvent},
        queries::{GetEvent, ListTeamEvents, ListUpcomingEvents},
    },
    queries_handlers::{GetEventHandler, ListTeamEventsHandler, ListUpcomingEventsHandler},
};
use touchline_club::models::event::EventDetails;
use touchline_types::events::EventKind;

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct EventForm {
    pub kind: EventKind,
    pub starts_at: DateTime<Utc>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub details: Option<String>,
}

impl From<EventForm> for EventDetails {
    fn from(form: EventForm) -> Self {
        EventDetails {
            kind: form.kind,
            starts_at: form.starts_at,
            location: form.location,
            opponent: form.opponent,
            details: form.details,
        }
    }
}

pub async fn list_team_events(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let events = state
        .app_bus
        .query(
            ListTeamEvents {
                ctx: user.ctx,
                team_id,
            },
            ListTeamEventsHandler::new(),
        )
        .await?;
    Ok(Json(events))
}

/// GET /api/events/upcoming – Club events still to come, with their team.
pub async fn upcoming_events(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let events = state
        .app_bus
        .query(
            ListUpcomingEvents {
                ctx: user.ctx,
                now: Utc::now(),
            },
            ListUpcomingEventsHandler::new(),
        )
        .await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .app_bus
        .query(
            GetEvent {
                ctx: user.ctx,
                event_id,
            },
            GetEventHandler::new(),
        )
        .await?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(team_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<EventForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id = Uuid::new_v4();
    state
        .app_bus
        .execute(
            CreateEvent {
                ctx: user.ctx,
                event_id,
                team_id,
                details: form.into(),
            },
            CreateEventCommandHandler::new(),
        )
        .await?;

    let event = state
        .app_bus
        .query(
            GetEvent {
                ctx: user.ctx,
                event_id,
            },
            GetEventHandler::new(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<EventForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            UpdateEvent {
                ctx: user.ctx,
                event_id,
                details: form.into(),
            },
            UpdateEventCommandHandler::new(),
        )
        .await?;

    let event = state
        .app_bus
        .query(
            GetEvent {
                ctx: user.ctx,
                event_id,
            },
            GetEventHandler::new(),
        )
        .await?;
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            DeleteEvent {
                ctx: user.ctx,
                event_id,
            },
            DeleteEventCommandHandler::new(),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
