use uuid::Uuid;

use touchline_club::{
    lineup::Composition,
    models::{event::EventDetails, player::PlayerDetails, post::PostContent, profile::ClubContext},
};
use touchline_types::events::AvailabilityStatus;

use crate::{cqrs::Command, realtime::ClubChange};

/// Signs up a coach together with a new club.
#[derive(Debug, Clone)]
pub struct RegisterClub {
    pub user_id: Uuid,
    pub club_id: Uuid,
    pub email: String,
    pub password: String,
    pub coach_full_name: String,
    pub club_name: String,
    pub club_city: Option<String>,
}

impl Command for RegisterClub {}

/// Creates the account of an invited player.
#[derive(Debug, Clone)]
pub struct AcceptInvitation {
    pub user_id: Uuid,
    pub token: String,
    pub password: String,
    pub full_name: String,
}

impl Command for AcceptInvitation {}

#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub ctx: ClubContext,
    pub full_name: String,
}

impl Command for UpdateProfile {}

#[derive(Debug, Clone)]
pub struct ChangePassword {
    pub ctx: ClubContext,
    pub new_password: String,
}

impl Command for ChangePassword {}

#[derive(Debug, Clone)]
pub struct CreateTeam {
    pub ctx: ClubContext,
    pub team_id: Uuid,
    pub name: String,
}

impl Command for CreateTeam {}

#[derive(Debug, Clone)]
pub struct RenameTeam {
    pub ctx: ClubContext,
    pub team_id: Uuid,
    pub name: String,
}

impl Command for RenameTeam {}

#[derive(Debug, Clone)]
pub struct DeleteTeam {
    pub ctx: ClubContext,
    pub team_id: Uuid,
}

impl Command for DeleteTeam {}

#[derive(Debug, Clone)]
pub struct AddPlayer {
    pub ctx: ClubContext,
    pub player_id: Uuid,
    pub team_id: Uuid,
    pub details: PlayerDetails,
}

impl Command for AddPlayer {}

#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub ctx: ClubContext,
    pub player_id: Uuid,
    pub details: PlayerDetails,
}

impl Command for UpdatePlayer {}

#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub ctx: ClubContext,
    pub player_id: Uuid,
}

impl Command for DeletePlayer {}

/// Stores the e-mail on a roster player and issues an invitation token.
#[derive(Debug, Clone)]
pub struct InvitePlayer {
    pub ctx: ClubContext,
    pub player_id: Uuid,
    pub email: String,
    pub token: String,
}

impl Command for InvitePlayer {}

#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub ctx: ClubContext,
    pub event_id: Uuid,
    pub team_id: Uuid,
    pub details: EventDetails,
}

impl Command for CreateEvent {}

#[derive(Debug, Clone)]
pub struct UpdateEvent {
    pub ctx: ClubContext,
    pub event_id: Uuid,
    pub details: EventDetails,
}

impl Command for UpdateEvent {}

#[derive(Debug, Clone)]
pub struct DeleteEvent {
    pub ctx: ClubContext,
    pub event_id: Uuid,
}

impl Command for DeleteEvent {}

/// Coach sets the status of any player of the event's team.
#[derive(Debug, Clone)]
pub struct SetPlayerAvailability {
    pub ctx: ClubContext,
    pub event_id: Uuid,
    pub player_id: Uuid,
    pub status: AvailabilityStatus,
    pub notes: Option<String>,
}

impl Command for SetPlayerAvailability {
    fn change(&self) -> Option<ClubChange> {
        Some(ClubChange::AvailabilityChanged {
            club_id: self.ctx.club_id,
        })
    }
}

/// Updates an existing availability record: a player's own, or any for coaches.
#[derive(Debug, Clone)]
pub struct UpdateAvailability {
    pub ctx: ClubContext,
    pub availability_id: Uuid,
    pub status: AvailabilityStatus,
    pub notes: Option<String>,
}

impl Command for UpdateAvailability {
    fn change(&self) -> Option<ClubChange> {
        Some(ClubChange::AvailabilityChanged {
            club_id: self.ctx.club_id,
        })
    }
}

/// Persists the whole team sheet of an event. Last save wins.
#[derive(Debug, Clone)]
pub struct SaveComposition {
    pub ctx: ClubContext,
    pub event_id: Uuid,
    pub composition: Composition,
}

impl Command for SaveComposition {
    fn change(&self) -> Option<ClubChange> {
        Some(ClubChange::CompositionSaved {
            club_id: self.ctx.club_id,
            event_id: self.event_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreatePost {
    pub ctx: ClubContext,
    pub post_id: Uuid,
    pub team_id: Option<Uuid>,
    pub content: PostContent,
}

impl Command for CreatePost {}

#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub ctx: ClubContext,
    pub post_id: Uuid,
    pub content: PostContent,
}

impl Command for UpdatePost {}

#[derive(Debug, Clone)]
pub struct DeletePost {
    pub ctx: ClubContext,
    pub post_id: Uuid,
}

impl Command for DeletePost {}

#[derive(Debug, Clone)]
pub struct PostMessage {
    pub ctx: ClubContext,
    pub message_id: Uuid,
    pub content: String,
}

impl Command for PostMessage {
    fn change(&self) -> Option<ClubChange> {
        Some(ClubChange::MessagePosted {
            club_id: self.ctx.club_id,
            message_id: self.message_id,
        })
    }
}
