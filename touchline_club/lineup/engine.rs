use std::{cmp::Ordering, collections::HashSet};
use uuid::Uuid;

use crate::models::player::Player;

use super::{composition::Composition, positions::PositionKey};

/// Places `player_id` on `target` and returns the new composition.
///
/// A player already placed elsewhere leaves that slot. When the target was
/// occupied, the displaced player takes the vacated slot, but only if the
/// dragged player came from another slot: a player dropped from the pool onto
/// an occupied slot sends the occupant back to the pool.
pub fn assign(composition: &Composition, target: PositionKey, player_id: Uuid) -> Composition {
    let previous = composition.position_of(player_id);
    let displaced = composition.player_at(target);

    let mut next = composition.clone();
    if let Some(previous) = previous {
        next.clear(previous);
    }
    next.set(target, player_id);
    if let (Some(displaced), Some(previous)) = (displaced, previous) {
        next.set(previous, displaced);
    }
    next
}

/// Sends a player back to the pool.
pub fn unassign(composition: &Composition, player_id: Uuid) -> Composition {
    let mut next = composition.clone();
    if let Some(previous) = composition.position_of(player_id) {
        next.clear(previous);
    }
    next
}

/// Clears the whole sheet. Callers confirm with the user first.
pub fn reset(_composition: &Composition) -> Composition {
    Composition::new()
}

/// Eligible roster players that are not placed yet, ordered by their first
/// preferred position label. Players without a label come last; ties keep
/// roster order.
///
/// Labels are compared byte-wise, so the order is case-sensitive: `"Wing"`
/// sorts before `"prop"`.
pub fn available_players<'a>(
    roster: &'a [Player],
    eligible: &HashSet<Uuid>,
    composition: &Composition,
) -> Vec<&'a Player> {
    let assigned = composition.assigned_players();
    let mut pool: Vec<&Player> = roster
        .iter()
        .filter(|p| eligible.contains(&p.id) && !assigned.contains(&p.id))
        .collect();

    pool.sort_by(
        |a, b| match (a.preferred_position(), b.preferred_position()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    );
    pool
}
