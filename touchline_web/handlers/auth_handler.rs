use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::{SignedCookieJar, WithRejection, cookie::Cookie};
use serde::Deserialize;
use uuid::Uuid;

use touchline_app::{
    command_handlers::{AcceptInvitationCommandHandler, RegisterClubCommandHandler},
    cqrs::{
        commands::{AcceptInvitation, RegisterClub},
        queries::{AuthenticateUser, GetAccount, GetSessionProfile},
    },
    queries_handlers::{AuthenticateUserHandler, GetAccountHandler, GetSessionProfileHandler},
};
use touchline_club::models::profile::ClubContext;
use touchline_types::{
    errors::{AppError, ApplicationError, DbError},
    roles::Role,
};

use crate::{
    handlers::helpers::{ApiError, SESSION_COOKIE, session_cookie},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub club_name: String,
    pub club_city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AcceptInvitationForm {
    pub password: String,
    pub full_name: String,
}

/// POST /api/signup – Create a club with its coach and sign the coach in.
pub async fn signup(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    WithRejection(Json(form), _): WithRejection<Json<SignupForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = Uuid::new_v4();
    let club_id = Uuid::new_v4();
    let command = RegisterClub {
        user_id,
        club_id,
        email: form.email,
        password: form.password,
        coach_full_name: form.full_name,
        club_name: form.club_name,
        club_city: form.club_city,
    };
    state
        .app_bus
        .execute(command, RegisterClubCommandHandler::new())
        .await?;

    let ctx = ClubContext {
        user_id,
        club_id,
        role: Role::AdminCoach,
    };
    let account = state
        .app_bus
        .query(GetAccount { ctx }, GetAccountHandler::new())
        .await?;

    let jar = jar.add(session_cookie(user_id));
    Ok((StatusCode::CREATED, jar, Json(account)))
}

/// POST /api/login – Check credentials and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    WithRejection(Json(form), _): WithRejection<Json<LoginForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let query = AuthenticateUser {
        email: form.email,
        password: form.password,
    };

    match state
        .app_bus
        .query(query, AuthenticateUserHandler::new())
        .await
    {
        Ok(user) => {
            let jar = jar.add(session_cookie(user.id));
            Ok((jar, StatusCode::NO_CONTENT))
        }
        Err(ApplicationError::App(AppError::WrongAuthCredentials))
        | Err(ApplicationError::Db(DbError::UserByEmailNotFound(_))) => Err(ApiError::new(
            StatusCode::UNAUTHORIZED,
            "Invalid email or password.",
        )),
        Err(e) => Err(e.into()),
    }
}

/// POST /api/logout – Clear the session cookie.
pub async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}

/// POST /api/invitations/{token}/accept – Create the invited player's account
/// and sign them in.
pub async fn accept_invitation(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(token): Path<String>,
    WithRejection(Json(form), _): WithRejection<Json<AcceptInvitationForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = Uuid::new_v4();
    let command = AcceptInvitation {
        user_id,
        token,
        password: form.password,
        full_name: form.full_name,
    };
    state
        .app_bus
        .execute(command, AcceptInvitationCommandHandler::new())
        .await?;

    let profile = state
        .app_bus
        .query(GetSessionProfile { user_id }, GetSessionProfileHandler::new())
        .await?;
    let account = state
        .app_bus
        .query(
            GetAccount {
                ctx: profile.context(),
            },
            GetAccountHandler::new(),
        )
        .await?;

    let jar = jar.add(session_cookie(user_id));
    Ok((StatusCode::CREATED, jar, Json(account)))
}
