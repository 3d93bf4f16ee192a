use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::player::Player;

use super::{
    composition::Composition,
    engine,
    positions::{POSITIONS, PositionKey},
};

/// Whether the sheet being edited matches what is stored for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardState {
    Saved,
    Dirty,
}

/// Editing session for one event's team sheet.
///
/// Holds the team roster, the players who declared themselves present, and
/// the working composition. Every mutation goes through the
/// lineup engine, so the one-position-per-player rule always holds.
#[derive(Debug, Clone, Serialize)]
pub struct CompositionBoard {
    event_id: Uuid,
    roster: Vec<Player>,
    #[serde(skip)]
    eligible: HashSet<Uuid>,
    composition: Composition,
    state: BoardState,
}

impl CompositionBoard {
    pub fn new(
        event_id: Uuid,
        roster: Vec<Player>,
        eligible: HashSet<Uuid>,
        composition: Composition,
    ) -> Self {
        Self {
            event_id,
            roster,
            eligible,
            composition,
            state: BoardState::Saved,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == BoardState::Dirty
    }

    pub fn is_eligible(&self, player_id: Uuid) -> bool {
        self.eligible.contains(&player_id)
    }

    pub fn assign(&mut self, target: PositionKey, player_id: Uuid) {
        self.apply(engine::assign(&self.composition, target, player_id));
    }

    pub fn unassign(&mut self, player_id: Uuid) {
        self.apply(engine::unassign(&self.composition, player_id));
    }

    pub fn reset(&mut self) {
        self.apply(engine::reset(&self.composition));
    }

    /// Replaces the working sheet, e.g. with a draft kept client side.
    pub fn restore(&mut self, composition: Composition) {
        self.apply(composition);
    }

    pub fn mark_saved(&mut self) {
        self.state = BoardState::Saved;
    }

    pub fn available_players(&self) -> Vec<&Player> {
        engine::available_players(&self.roster, &self.eligible, &self.composition)
    }

    pub fn player_at(&self, key: PositionKey) -> Option<&Player> {
        let player_id = self.composition.player_at(key)?;
        self.roster.iter().find(|p| p.id == player_id)
    }

    /// Every catalogue position with its current occupant, in sheet order.
    pub fn sheet(&self) -> Vec<(PositionKey, Option<&Player>)> {
        POSITIONS
            .iter()
            .map(|def| {
                let key = def.key();
                (key, self.player_at(key))
            })
            .collect()
    }

    pub fn into_composition(self) -> Composition {
        self.composition
    }

    fn apply(&mut self, next: Composition) {
        if next != self.composition {
            self.composition = next;
            self.state = BoardState::Dirty;
        }
    }
}
