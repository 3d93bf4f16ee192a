use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::events::EventKind;

use crate::lineup::Composition;

use super::non_blank;

/// A match or a training session of one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub team_id: Uuid,
    pub author_id: Uuid,
    pub kind: EventKind,
    pub starts_at: DateTime<Utc>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub details: Option<String>,
    pub composition: Composition,
}

/// Editable attributes of an event.
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub kind: EventKind,
    pub starts_at: DateTime<Utc>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub details: Option<String>,
}

impl Event {
    pub fn new(id: Uuid, team_id: Uuid, author_id: Uuid, details: EventDetails) -> Self {
        let mut event = Self {
            id,
            team_id,
            author_id,
            kind: details.kind,
            starts_at: details.starts_at,
            location: None,
            opponent: None,
            details: None,
            composition: Composition::default(),
        };
        event.update(author_id, details);
        event
    }

    pub fn update(&mut self, author_id: Uuid, details: EventDetails) {
        self.author_id = author_id;
        self.kind = details.kind;
        self.starts_at = details.starts_at;
        self.location = non_blank(details.location);
        self.opponent = if details.kind.has_opponent() {
            non_blank(details.opponent)
        } else {
            None
        };
        self.details = non_blank(details.details);
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at >= now
    }

    pub fn title(&self) -> String {
        match self.kind {
            EventKind::Match => format!("Match vs {}", self.opponent.as_deref().unwrap_or("N/A")),
            EventKind::Training => "Training".to_string(),
        }
    }
}
