use axum::{
    Router,
    extract::FromRef,
    routing::{get, post, put},
};
use axum_extra::extract::cookie::Key;
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use touchline_app::{app_bus::AppBus, config::Config};
use touchline_types::{Result, errors::ApplicationError};

use crate::handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, config: &Config) -> AppState {
        let cookie_key = Key::from(config.auth_cookie_secret.as_bytes());

        AppState {
            app_bus,
            cookie_key,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        self.app_bus.config()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        let api = Router::new()
            .route("/signup", post(signup))
            .route("/login", post(login))
            .route("/logout", post(logout))
            .route("/invitations/{token}/accept", post(accept_invitation))
            .route("/me", get(me).patch(update_me))
            .route("/me/password", put(change_password))
            .route("/positions", get(positions))
            .route("/teams", get(list_teams).post(create_team))
            .route(
                "/teams/{team_id}",
                get(get_team).patch(rename_team).delete(delete_team),
            )
            .route(
                "/teams/{team_id}/players",
                get(list_players).post(add_player),
            )
            .route(
                "/teams/{team_id}/events",
                get(list_team_events).post(create_event),
            )
            .route(
                "/players/{player_id}",
                get(get_player).patch(update_player).delete(delete_player),
            )
            .route("/players/{player_id}/invite", post(invite_player))
            .route("/events/upcoming", get(upcoming_events))
            .route(
                "/events/{event_id}",
                get(get_event).patch(update_event).delete(delete_event),
            )
            .route(
                "/events/{event_id}/availability/{player_id}",
                put(set_player_availability),
            )
            .route("/events/{event_id}/blackboard", get(load_blackboard))
            .route("/events/{event_id}/blackboard/assign", post(assign_position))
            .route(
                "/events/{event_id}/blackboard/unassign",
                post(unassign_player),
            )
            .route("/events/{event_id}/blackboard/reset", post(reset_board))
            .route("/events/{event_id}/composition", put(save_composition))
            .route(
                "/availabilities/{availability_id}",
                get(get_availability).patch(update_availability),
            )
            .route("/dashboard", get(dashboard))
            .route("/posts", get(list_posts).post(create_post))
            .route(
                "/posts/{post_id}",
                get(get_post).patch(update_post).delete(delete_post),
            )
            .route(
                "/chat/messages",
                get(list_chat_messages).post(post_chat_message),
            )
            .route("/chat/wait", get(wait_for_change));

        Router::new()
            .nest("/api", api)
            .fallback(not_found)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;
        Self::serve_listener(state, listener).await
    }

    /// Serves on an already bound listener (tests bind `127.0.0.1:0`).
    pub async fn serve_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
