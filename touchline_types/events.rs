use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Match,
    Training,
}

impl EventKind {
    /// Only matches have an opponent.
    pub fn has_opponent(&self) -> bool {
        matches!(self, EventKind::Match)
    }
}

/// Declared presence of a player for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Present,
    Absent,
    #[default]
    Undecided,
}

impl AvailabilityStatus {
    /// Present players are the ones a coach can pick for the lineup.
    pub fn is_eligible(&self) -> bool {
        matches!(self, AvailabilityStatus::Present)
    }
}
