use thiserror::Error;
use uuid::Uuid;

/// Errors for domain logic (club rules).
#[derive(Debug, Error)]
pub enum ClubError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("Only coaches can do this")]
    CoachRoleRequired,

    #[error("Account has no club profile yet")]
    ProfilePending,

    #[error("Team {0} does not belong to your club")]
    TeamNotInClub(Uuid),

    #[error("Player {player_id} is not on team {team_id}")]
    PlayerNotOnTeam { player_id: Uuid, team_id: Uuid },

    #[error("No roster player is linked to your account")]
    NoLinkedPlayer,

    #[error("Player {0} is already linked to an account")]
    PlayerAlreadyLinked(Uuid),

    #[error("Availability {0} belongs to another player")]
    NotOwnAvailability(Uuid),

    #[error("Only the author can change post {0}")]
    NotPostAuthor(Uuid),

    #[error("Invitation has already been accepted")]
    InvitationAlreadyAccepted,

    #[error("Unknown position '{0}'")]
    UnknownPosition(String),

    #[error("Composition reset must be confirmed")]
    ResetNotConfirmed,
}
