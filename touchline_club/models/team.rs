use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::errors::ClubError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub club_id: Uuid,
    pub name: String,
}

impl Team {
    pub fn new(id: Uuid, club_id: Uuid, name: &str) -> Result<Self, ClubError> {
        let mut team = Self {
            id,
            club_id,
            name: String::new(),
        };
        team.rename(name)?;
        Ok(team)
    }

    pub fn rename(&mut self, name: &str) -> Result<(), ClubError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClubError::MissingField("team name"));
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Teams of other clubs are invisible: callers get the same error as for
    /// a team that does not exist in their club.
    pub fn ensure_in_club(&self, club_id: Uuid) -> Result<(), ClubError> {
        if self.club_id == club_id {
            Ok(())
        } else {
            Err(ClubError::TeamNotInClub(self.id))
        }
    }
}
