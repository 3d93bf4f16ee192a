use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use touchline_club::{
    lineup::CompositionBoard,
    models::{
        availability::Availability,
        chat::ChatMessage,
        club::Club,
        event::Event,
        player::Player,
        post::Post,
        profile::{ClubContext, Profile},
        team::Team,
    },
};
use touchline_types::{common::User, roles::Role};

use crate::cqrs::Query;

/// Checks if a user is authenticated with email and password.
pub struct AuthenticateUser {
    pub email: String,
    pub password: String,
}

impl Query for AuthenticateUser {
    type Output = User;
}

/// Fetch the club profile of a signed-in user. Users without one are pending.
pub struct GetSessionProfile {
    pub user_id: Uuid,
}

impl Query for GetSessionProfile {
    type Output = Profile;
}

pub struct GetAccount {
    pub ctx: ClubContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub club: Club,
    pub player: Option<Player>,
}

impl Query for GetAccount {
    type Output = Account;
}

/// Teams of the caller's club, ordered by name.
pub struct ListTeams {
    pub ctx: ClubContext,
}

impl Query for ListTeams {
    type Output = Vec<Team>;
}

pub struct GetTeam {
    pub ctx: ClubContext,
    pub team_id: Uuid,
}

impl Query for GetTeam {
    type Output = Team;
}

/// Roster of a team, ordered by name.
pub struct ListTeamPlayers {
    pub ctx: ClubContext,
    pub team_id: Uuid,
}

impl Query for ListTeamPlayers {
    type Output = Vec<Player>;
}

pub struct GetPlayer {
    pub ctx: ClubContext,
    pub player_id: Uuid,
}

impl Query for GetPlayer {
    type Output = Player;
}

pub struct GetEvent {
    pub ctx: ClubContext,
    pub event_id: Uuid,
}

impl Query for GetEvent {
    type Output = Event;
}

#[derive(Debug, Clone, Serialize)]
pub struct EventWithAvailabilities {
    #[serde(flatten)]
    pub event: Event,
    pub availabilities: Vec<Availability>,
}

/// Events of a team, oldest first, with every availability record.
pub struct ListTeamEvents {
    pub ctx: ClubContext,
    pub team_id: Uuid,
}

impl Query for ListTeamEvents {
    type Output = Vec<EventWithAvailabilities>;
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingEvent {
    #[serde(flatten)]
    pub event: Event,
    pub team_name: String,
}

/// Club events starting at or after `now`, soonest first.
pub struct ListUpcomingEvents {
    pub ctx: ClubContext,
    pub now: DateTime<Utc>,
}

impl Query for ListUpcomingEvents {
    type Output = Vec<UpcomingEvent>;
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardEntry {
    #[serde(flatten)]
    pub event: Event,
    pub availability: Option<Availability>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub player: Player,
    pub team: Team,
    pub events: Vec<DashboardEntry>,
}

/// Upcoming events of the caller's linked roster player.
pub struct GetDashboard {
    pub ctx: ClubContext,
    pub now: DateTime<Utc>,
}

impl Query for GetDashboard {
    type Output = Dashboard;
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityDetails {
    #[serde(flatten)]
    pub availability: Availability,
    pub player_name: String,
    pub event_title: String,
    pub event_starts_at: DateTime<Utc>,
}

pub struct GetAvailability {
    pub ctx: ClubContext,
    pub availability_id: Uuid,
}

impl Query for GetAvailability {
    type Output = AvailabilityDetails;
}

/// Loads roster, eligible players and stored sheet of an event.
pub struct LoadBlackboard {
    pub ctx: ClubContext,
    pub event_id: Uuid,
}

impl Query for LoadBlackboard {
    type Output = CompositionBoard;
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub author_name: String,
}

/// Club-wide posts when `team_id` is `None`, otherwise the team's. Newest first.
pub struct ListPosts {
    pub ctx: ClubContext,
    pub team_id: Option<Uuid>,
}

impl Query for ListPosts {
    type Output = Vec<PostView>;
}

pub struct GetPost {
    pub ctx: ClubContext,
    pub post_id: Uuid,
}

impl Query for GetPost {
    type Output = PostView;
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageView {
    #[serde(flatten)]
    pub message: ChatMessage,
    pub author_name: String,
}

/// The last messages of the club channel, in chronological order.
/// `limit` defaults to the configured history size.
pub struct ListChatMessages {
    pub ctx: ClubContext,
    pub limit: Option<usize>,
}

impl Query for ListChatMessages {
    type Output = Vec<ChatMessageView>;
}
