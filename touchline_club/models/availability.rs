use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::events::AvailabilityStatus;

use super::non_blank;

/// Presence declared by (or for) a player for one event. There is at most one
/// record per (event, player).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub id: Uuid,
    pub event_id: Uuid,
    pub player_id: Uuid,
    pub status: AvailabilityStatus,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Availability {
    pub fn new(
        event_id: Uuid,
        player_id: Uuid,
        status: AvailabilityStatus,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            player_id,
            status,
            notes: non_blank(notes),
            updated_at: Utc::now(),
        }
    }

    pub fn set_status(&mut self, status: AvailabilityStatus, notes: Option<String>) {
        self.status = status;
        self.notes = non_blank(notes);
        self.updated_at = Utc::now();
    }
}
