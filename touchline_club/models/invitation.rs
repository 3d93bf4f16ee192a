use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::errors::ClubError;

const TOKEN_LENGTH: usize = 32;

/// An invitation for a roster player to create their account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub token: String,
    pub club_id: Uuid,
    pub player_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
}

impl Invitation {
    pub fn new(token: String, club_id: Uuid, player_id: Uuid, email: String) -> Self {
        Self {
            token,
            club_id,
            player_id,
            email,
            created_at: Utc::now(),
            accepted_at: None,
        }
    }

    pub fn generate_token() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }

    pub fn accept(&mut self) -> Result<(), ClubError> {
        if self.accepted_at.is_some() {
            return Err(ClubError::InvitationAlreadyAccepted);
        }
        self.accepted_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_url_safe_and_distinct() {
        let a = Invitation::generate_token();
        let b = Invitation::generate_token();
        assert_eq!(a.len(), TOKEN_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_invitation_accepts_once() {
        let mut invitation = Invitation::new(
            Invitation::generate_token(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "wing@club.fr".to_string(),
        );
        invitation.accept().unwrap();
        assert!(invitation.accepted_at.is_some());
        assert!(matches!(
            invitation.accept(),
            Err(ClubError::InvitationAlreadyAccepted)
        ));
    }
}
