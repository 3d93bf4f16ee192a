use axum::{
    Json,
    extract::{FromRequestParts, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    SignedCookieJar,
    cookie::{Cookie, SameSite},
};
use serde_json::json;
use uuid::Uuid;

use touchline_app::{cqrs::queries::GetSessionProfile, queries_handlers::GetSessionProfileHandler};
use touchline_club::models::profile::ClubContext;
use touchline_types::errors::{AppError, ApplicationError, ClubError, DbError};

use crate::http::AppState;

/// Signed cookie holding the id of the signed-in user.
pub const SESSION_COOKIE: &str = "user_id";

/// Error body returned by every API route: `{"message": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Not signed in")
    }
}

fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Club(e) => match e {
            ClubError::MissingField(_)
            | ClubError::PasswordTooShort { .. }
            | ClubError::InvalidEmail(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ClubError::UnknownPosition(_) | ClubError::ResetNotConfirmed => StatusCode::BAD_REQUEST,
            ClubError::CoachRoleRequired
            | ClubError::ProfilePending
            | ClubError::NotOwnAvailability(_)
            | ClubError::NotPostAuthor(_) => StatusCode::FORBIDDEN,
            ClubError::TeamNotInClub(_)
            | ClubError::PlayerNotOnTeam { .. }
            | ClubError::NoLinkedPlayer => StatusCode::NOT_FOUND,
            ClubError::PlayerAlreadyLinked(_) | ClubError::InvitationAlreadyAccepted => {
                StatusCode::CONFLICT
            }
        },
        ApplicationError::App(AppError::WrongAuthCredentials | AppError::PasswordError) => {
            StatusCode::UNAUTHORIZED
        }
        ApplicationError::Db(e) => match e {
            DbError::UserByEmailNotFound(_) => StatusCode::UNAUTHORIZED,
            DbError::EmailTaken(_) => StatusCode::CONFLICT,
            DbError::Database(_) | DbError::Transaction(_) | DbError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::NOT_FOUND,
        },
        ApplicationError::Json(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        let status = status_for(&error);
        if status.is_server_error() {
            tracing::error!(error = %error, "Request failed");
            return Self::new(status, "Internal server error.");
        }
        Self::new(status, error.to_string())
    }
}

impl From<ClubError> for ApiError {
    fn from(error: ClubError) -> Self {
        ApplicationError::Club(error).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}

/// Session cookie for a freshly authenticated user.
pub(crate) fn session_cookie(user_id: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// The signed-in club member, resolved from the session cookie.
///
/// Rejects with 401 when there is no valid session and with 403 when the user
/// has no club profile yet.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub ctx: ClubContext,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());
        let user_id = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .ok_or_else(ApiError::unauthorized)?;

        let profile = state
            .app_bus
            .query(GetSessionProfile { user_id }, GetSessionProfileHandler::new())
            .await?;

        Ok(CurrentUser {
            ctx: profile.context(),
        })
    }
}
