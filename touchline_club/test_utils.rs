use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use touchline_types::{common::User, events::EventKind, roles::Role};

use crate::models::{
    club::Club,
    event::{Event, EventDetails},
    player::{Player, PlayerDetails},
    profile::Profile,
    team::Team,
};

#[derive(Default, Clone)]
pub struct UserFactoryOptions {
    pub id: Option<Uuid>,
    pub email: Option<String>,
}

#[derive(Default, Clone)]
pub struct ClubFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub name: Option<&'a str>,
}

#[derive(Default, Clone)]
pub struct ProfileFactoryOptions<'a> {
    pub user_id: Option<Uuid>,
    pub club_id: Option<Uuid>,
    pub role: Option<Role>,
    pub full_name: Option<&'a str>,
}

#[derive(Default, Clone)]
pub struct TeamFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub club_id: Option<Uuid>,
    pub name: Option<&'a str>,
}

#[derive(Default, Clone)]
pub struct PlayerFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub name: Option<&'a str>,
    pub positions: Option<Vec<&'a str>>,
    pub email: Option<&'a str>,
    pub user_id: Option<Uuid>,
}

#[derive(Default, Clone)]
pub struct EventFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    pub kind: Option<EventKind>,
    pub days_from_now: Option<i64>,
    pub opponent: Option<&'a str>,
}

pub fn user_factory(options: UserFactoryOptions) -> User {
    let default_email = format!("user_{}@example.com", rand::thread_rng().r#gen::<u32>());
    User::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.email.unwrap_or(default_email),
        Uuid::new_v4().to_string(),
    )
}

pub fn club_factory(options: ClubFactoryOptions) -> Club {
    Club::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.name.unwrap_or("Rugby Club Factory"),
        Some("Toulouse".to_string()),
    )
    .unwrap()
}

pub fn profile_factory(options: ProfileFactoryOptions) -> Profile {
    Profile::new(
        options.user_id.unwrap_or_else(Uuid::new_v4),
        options.club_id.unwrap_or_else(Uuid::new_v4),
        options.role.unwrap_or(Role::Player),
        options.full_name.unwrap_or("Factory Member"),
    )
    .unwrap()
}

pub fn team_factory(options: TeamFactoryOptions) -> Team {
    Team::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.club_id.unwrap_or_else(Uuid::new_v4),
        options.name.unwrap_or("Seniors"),
    )
    .unwrap()
}

pub fn player_factory(options: PlayerFactoryOptions) -> Player {
    let default_name = format!("player_{}", rand::thread_rng().r#gen::<u32>());
    let mut player = Player::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.team_id.unwrap_or_else(Uuid::new_v4),
        PlayerDetails {
            name: options.name.map_or(default_name, str::to_string),
            positions: options
                .positions
                .unwrap_or_else(|| vec!["Prop"])
                .into_iter()
                .map(str::to_string)
                .collect(),
            ..Default::default()
        },
    )
    .unwrap();
    player.email = options.email.map(str::to_string);
    player.user_id = options.user_id;
    player
}

pub fn event_factory(options: EventFactoryOptions) -> Event {
    let kind = options.kind.unwrap_or(EventKind::Match);
    Event::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.team_id.unwrap_or_else(Uuid::new_v4),
        options.author_id.unwrap_or_else(Uuid::new_v4),
        EventDetails {
            kind,
            starts_at: Utc::now() + Duration::days(options.days_from_now.unwrap_or(3)),
            location: Some("Home ground".to_string()),
            opponent: Some(options.opponent.unwrap_or("RC Rivals").to_string()),
            details: None,
        },
    )
}
