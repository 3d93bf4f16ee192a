use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::{errors::ClubError, roles::Role};

/// Club membership of a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub club_id: Uuid,
    pub role: Role,
    pub full_name: String,
}

impl Profile {
    pub fn new(user_id: Uuid, club_id: Uuid, role: Role, full_name: &str) -> Result<Self, ClubError> {
        let mut profile = Self {
            user_id,
            club_id,
            role,
            full_name: String::new(),
        };
        profile.rename(full_name)?;
        Ok(profile)
    }

    pub fn rename(&mut self, full_name: &str) -> Result<(), ClubError> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(ClubError::MissingField("full name"));
        }
        self.full_name = full_name.to_string();
        Ok(())
    }

    pub fn context(&self) -> ClubContext {
        ClubContext {
            user_id: self.user_id,
            club_id: self.club_id,
            role: self.role,
        }
    }
}

/// Who is acting, and on behalf of which club.
///
/// Built once per request from the caller's profile and passed explicitly to
/// every command and query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubContext {
    pub user_id: Uuid,
    pub club_id: Uuid,
    pub role: Role,
}

impl ClubContext {
    pub fn is_coach(&self) -> bool {
        self.role.is_coach()
    }

    pub fn require_coach(&self) -> Result<(), ClubError> {
        if self.is_coach() {
            Ok(())
        } else {
            Err(ClubError::CoachRoleRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_requires_a_name() {
        let result = Profile::new(Uuid::new_v4(), Uuid::new_v4(), Role::Player, " ");
        assert!(matches!(result, Err(ClubError::MissingField("full name"))));
    }

    #[test]
    fn test_context_role_checks() {
        let coach = Profile::new(Uuid::new_v4(), Uuid::new_v4(), Role::AdminCoach, "Coach")
            .unwrap()
            .context();
        assert!(coach.require_coach().is_ok());

        let player = Profile::new(Uuid::new_v4(), coach.club_id, Role::Player, "Wing")
            .unwrap()
            .context();
        assert!(matches!(
            player.require_coach(),
            Err(ClubError::CoachRoleRequired)
        ));
    }
}
