use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_app::{
    command_handlers::SaveCompositionCommandHandler,
    cqrs::{commands::SaveComposition, queries::LoadBlackboard},
    queries_handlers::LoadBlackboardHandler,
};
use touchline_club::{
    lineup::{
        Composition, CompositionBoard, FieldSpot, POSITIONS, PositionDef, PositionKey,
        PositionRole,
    },
    models::player::Player,
};
use touchline_types::errors::ClubError;

use crate::{
    handlers::helpers::{ApiError, CurrentUser},
    http::AppState,
};

/// One slot of the position catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct PositionEntry {
    pub key: PositionKey,
    pub name: &'static str,
    pub number: u8,
    pub role: PositionRole,
    pub spot: Option<FieldSpot>,
}

impl From<&PositionDef> for PositionEntry {
    fn from(def: &PositionDef) -> Self {
        PositionEntry {
            key: def.key(),
            name: def.name,
            number: def.number,
            role: def.role,
            spot: def.spot,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SheetSlot {
    pub position: PositionEntry,
    pub player: Option<Player>,
}

/// What the blackboard screen renders: the board itself, the pool of present
/// players still unassigned, and every slot of the sheet with its occupant.
#[derive(Debug, Serialize)]
pub struct BlackboardView {
    #[serde(flatten)]
    pub board: CompositionBoard,
    pub available_players: Vec<Player>,
    pub sheet: Vec<SheetSlot>,
}

impl From<CompositionBoard> for BlackboardView {
    fn from(board: CompositionBoard) -> Self {
        let available_players = board.available_players().into_iter().cloned().collect();
        let sheet = board
            .sheet()
            .into_iter()
            .map(|(key, player)| SheetSlot {
                position: key.definition().into(),
                player: player.cloned(),
            })
            .collect();

        BlackboardView {
            board,
            available_players,
            sheet,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AssignForm {
    #[serde(default)]
    pub composition: Composition,
    pub position: PositionKey,
    pub player_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UnassignForm {
    #[serde(default)]
    pub composition: Composition,
    pub player_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub composition: Composition,
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct SaveCompositionForm {
    pub composition: Composition,
}

async fn load_board(
    state: &AppState,
    user: &CurrentUser,
    event_id: Uuid,
) -> Result<CompositionBoard, ApiError> {
    let board = state
        .app_bus
        .query(
            LoadBlackboard {
                ctx: user.ctx,
                event_id,
            },
            LoadBlackboardHandler::new(),
        )
        .await?;
    Ok(board)
}

/// GET /api/positions – The fixed rugby position catalogue.
pub async fn positions() -> impl IntoResponse {
    let entries: Vec<PositionEntry> = POSITIONS.iter().map(Into::into).collect();
    Json(entries)
}

pub async fn load_blackboard(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let board = load_board(&state, &user, event_id).await?;
    Ok(Json(BlackboardView::from(board)))
}

/// POST /api/events/{id}/blackboard/assign – Drop a player on a position of
/// the posted draft. Nothing is stored.
pub async fn assign_position(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<AssignForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    user.ctx.require_coach()?;
    let mut board = load_board(&state, &user, event_id).await?;
    board.restore(form.composition);
    board.assign(form.position, form.player_id);
    Ok(Json(BlackboardView::from(board)))
}

/// POST /api/events/{id}/blackboard/unassign – Send a player back to the pool.
pub async fn unassign_player(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<UnassignForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    user.ctx.require_coach()?;
    let mut board = load_board(&state, &user, event_id).await?;
    board.restore(form.composition);
    board.unassign(form.player_id);
    Ok(Json(BlackboardView::from(board)))
}

/// POST /api/events/{id}/blackboard/reset – Clear the draft. Needs
/// `"confirm": true`.
pub async fn reset_board(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<ResetForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    user.ctx.require_coach()?;
    if !form.confirm {
        return Err(ClubError::ResetNotConfirmed.into());
    }
    let mut board = load_board(&state, &user, event_id).await?;
    board.restore(form.composition);
    board.reset();
    Ok(Json(BlackboardView::from(board)))
}

/// PUT /api/events/{id}/composition – Persist the whole sheet. Last save wins.
pub async fn save_composition(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<Uuid>,
    WithRejection(Json(form), _): WithRejection<Json<SaveCompositionForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .app_bus
        .execute(
            SaveComposition {
                ctx: user.ctx,
                event_id,
                composition: form.composition,
            },
            SaveCompositionCommandHandler::new(),
        )
        .await?;

    let board = load_board(&state, &user, event_id).await?;
    Ok(Json(BlackboardView::from(board)))
}
