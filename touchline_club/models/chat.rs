use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::errors::ClubError;

use super::club::Club;

/// The discussion channel of a club. Every club gets exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Uuid,
    pub club_id: Uuid,
    pub name: String,
}

impl Channel {
    pub fn for_club(club: &Club) -> Self {
        Self {
            id: Uuid::new_v4(),
            club_id: club.id,
            name: format!("General channel - {}", club.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(
        id: Uuid,
        channel_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> Result<Self, ClubError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ClubError::MissingField("message content"));
        }

        Ok(Self {
            id,
            channel_id,
            author_id,
            content: content.to_string(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_is_named_after_club() {
        let club = Club::new(Uuid::new_v4(), "RC Touchline", None).unwrap();
        let channel = Channel::for_club(&club);
        assert_eq!(channel.club_id, club.id);
        assert_eq!(channel.name, "General channel - RC Touchline");
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let result = ChatMessage::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "   ");
        assert!(matches!(result, Err(ClubError::MissingField(_))));

        let message =
            ChatMessage::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "  kickoff at 3 ")
                .unwrap();
        assert_eq!(message.content, "kickoff at 3");
    }
}
