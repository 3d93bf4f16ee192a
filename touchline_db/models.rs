use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum UserRole {
    AdminCoach,
    Player,
}

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "event_kind", rename_all = "PascalCase")]
pub enum EventKind {
    Match,
    Training,
}

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "availability_status", rename_all = "PascalCase")]
pub enum AvailabilityStatus {
    Present,
    Absent,
    Undecided,
}

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "post_category", rename_all = "PascalCase")]
pub enum PostCategory {
    Announcement,
    TeamComposition,
    MatchResult,
    TrainingInfo,
}

#[derive(Debug, FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Profile {
    pub user_id: Uuid,
    pub club_id: Uuid,
    pub role: UserRole,
    pub full_name: String,
}

#[derive(Debug, FromRow, Clone)]
pub struct Channel {
    pub id: Uuid,
    pub club_id: Uuid,
    pub name: String,
}

#[derive(Debug, FromRow, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Team {
    pub id: Uuid,
    pub club_id: Uuid,
    pub name: String,
}

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub positions: Vec<String>,
    pub license_status: String,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Invitation {
    pub token: String,
    pub club_id: Uuid,
    pub player_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Event {
    pub id: Uuid,
    pub team_id: Uuid,
    pub author_id: Uuid,
    pub kind: EventKind,
    pub starts_at: DateTime<Utc>,
    pub location: Option<String>,
    pub opponent: Option<String>,
    pub details: Option<String>,
    pub composition: serde_json::Value,
}

#[derive(Debug, FromRow, Clone)]
pub struct Availability {
    pub id: Uuid,
    pub event_id: Uuid,
    pub player_id: Uuid,
    pub status: AvailabilityStatus,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Post {
    pub id: Uuid,
    pub club_id: Uuid,
    pub team_id: Option<Uuid>,
    pub author_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub category: PostCategory,
    pub created_at: DateTime<Utc>,
}
