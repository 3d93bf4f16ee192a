use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("User with with email '{0}' not found")]
    UserByEmailNotFound(String),

    #[error("User with with ID {0} not found")]
    UserByIdNotFound(Uuid),

    #[error("Profile for user {0} not found")]
    ProfileNotFound(Uuid),

    #[error("Club with ID {0} not found")]
    ClubNotFound(Uuid),

    #[error("Chat channel for club {0} not found")]
    ChannelNotFound(Uuid),

    #[error("Team with ID {0} not found")]
    TeamNotFound(Uuid),

    #[error("Player with ID {0} not found")]
    PlayerNotFound(Uuid),

    #[error("Player with User ID {0} not found")]
    UserPlayerNotFound(Uuid),

    #[error("Event with ID {0} not found")]
    EventNotFound(Uuid),

    #[error("Availability with ID {0} not found")]
    AvailabilityNotFound(Uuid),

    #[error("Post with ID {0} not found")]
    PostNotFound(Uuid),

    #[error("Invitation not found")]
    InvitationNotFound,

    #[error("Email '{0}' is already registered")]
    EmailTaken(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
