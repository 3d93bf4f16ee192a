use serde_json::Value;
use std::collections::BTreeMap;

use touchline_club::{
    lineup::{Composition, CompositionDocument},
    models::{
        availability::Availability,
        chat::{Channel, ChatMessage},
        club::Club,
        event::Event,
        invitation::Invitation,
        player::Player,
        post::Post,
        profile::Profile,
        team::Team,
    },
};
use touchline_types::{
    common::User,
    errors::DbError,
    events::{AvailabilityStatus, EventKind},
    posts::PostCategory,
    roles::Role,
};

use crate::models as db_models;

impl From<db_models::UserRole> for Role {
    fn from(role: db_models::UserRole) -> Self {
        match role {
            db_models::UserRole::AdminCoach => Role::AdminCoach,
            db_models::UserRole::Player => Role::Player,
        }
    }
}

impl From<Role> for db_models::UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::AdminCoach => db_models::UserRole::AdminCoach,
            Role::Player => db_models::UserRole::Player,
        }
    }
}

impl From<db_models::EventKind> for EventKind {
    fn from(kind: db_models::EventKind) -> Self {
        match kind {
            db_models::EventKind::Match => EventKind::Match,
            db_models::EventKind::Training => EventKind::Training,
        }
    }
}

impl From<EventKind> for db_models::EventKind {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Match => db_models::EventKind::Match,
            EventKind::Training => db_models::EventKind::Training,
        }
    }
}

impl From<db_models::AvailabilityStatus> for AvailabilityStatus {
    fn from(status: db_models::AvailabilityStatus) -> Self {
        match status {
            db_models::AvailabilityStatus::Present => AvailabilityStatus::Present,
            db_models::AvailabilityStatus::Absent => AvailabilityStatus::Absent,
            db_models::AvailabilityStatus::Undecided => AvailabilityStatus::Undecided,
        }
    }
}

impl From<AvailabilityStatus> for db_models::AvailabilityStatus {
    fn from(status: AvailabilityStatus) -> Self {
        match status {
            AvailabilityStatus::Present => db_models::AvailabilityStatus::Present,
            AvailabilityStatus::Absent => db_models::AvailabilityStatus::Absent,
            AvailabilityStatus::Undecided => db_models::AvailabilityStatus::Undecided,
        }
    }
}

impl From<db_models::PostCategory> for PostCategory {
    fn from(category: db_models::PostCategory) -> Self {
        match category {
            db_models::PostCategory::Announcement => PostCategory::Announcement,
            db_models::PostCategory::TeamComposition => PostCategory::TeamComposition,
            db_models::PostCategory::MatchResult => PostCategory::MatchResult,
            db_models::PostCategory::TrainingInfo => PostCategory::TrainingInfo,
        }
    }
}

impl From<PostCategory> for db_models::PostCategory {
    fn from(category: PostCategory) -> Self {
        match category {
            PostCategory::Announcement => db_models::PostCategory::Announcement,
            PostCategory::TeamComposition => db_models::PostCategory::TeamComposition,
            PostCategory::MatchResult => db_models::PostCategory::MatchResult,
            PostCategory::TrainingInfo => db_models::PostCategory::TrainingInfo,
        }
    }
}

impl From<db_models::User> for User {
    fn from(user: db_models::User) -> Self {
        User::new(user.id, user.email, user.password_hash)
    }
}

impl From<db_models::Club> for Club {
    fn from(club: db_models::Club) -> Self {
        Club {
            id: club.id,
            name: club.name,
            city: club.city,
        }
    }
}

impl From<db_models::Profile> for Profile {
    fn from(profile: db_models::Profile) -> Self {
        Profile {
            user_id: profile.user_id,
            club_id: profile.club_id,
            role: profile.role.into(),
            full_name: profile.full_name,
        }
    }
}

impl From<db_models::Channel> for Channel {
    fn from(channel: db_models::Channel) -> Self {
        Channel {
            id: channel.id,
            club_id: channel.club_id,
            name: channel.name,
        }
    }
}

impl From<db_models::ChatMessage> for ChatMessage {
    fn from(message: db_models::ChatMessage) -> Self {
        ChatMessage {
            id: message.id,
            channel_id: message.channel_id,
            author_id: message.author_id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

impl From<db_models::Team> for Team {
    fn from(team: db_models::Team) -> Self {
        Team {
            id: team.id,
            club_id: team.club_id,
            name: team.name,
        }
    }
}

impl From<db_models::Player> for Player {
    fn from(player: db_models::Player) -> Self {
        Player {
            id: player.id,
            team_id: player.team_id,
            name: player.name,
            positions: player.positions,
            license_status: player.license_status,
            photo_url: player.photo_url,
            email: player.email,
            user_id: player.user_id,
        }
    }
}

impl From<db_models::Invitation> for Invitation {
    fn from(invitation: db_models::Invitation) -> Self {
        Invitation {
            token: invitation.token,
            club_id: invitation.club_id,
            player_id: invitation.player_id,
            email: invitation.email,
            created_at: invitation.created_at,
            accepted_at: invitation.accepted_at,
        }
    }
}

/// Reads a stored composition document. Non-string values are kept as raw
/// text so that normalisation reports them as dropped entries.
pub fn composition_from_json(value: Value) -> Result<Composition, DbError> {
    let raw: BTreeMap<String, Value> = serde_json::from_value(value)?;
    let document: CompositionDocument = raw
        .into_iter()
        .map(|(key, value)| {
            let player = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            (key, player)
        })
        .collect();

    let normalized = Composition::from_document(&document);
    if normalized.dropped > 0 {
        tracing::warn!(
            dropped = normalized.dropped,
            "Dropped invalid entries from stored composition"
        );
    }
    Ok(normalized.composition)
}

pub fn composition_to_json(composition: &Composition) -> Result<Value, DbError> {
    Ok(serde_json::to_value(composition.to_document())?)
}

impl TryFrom<db_models::Event> for Event {
    type Error = DbError;

    fn try_from(event: db_models::Event) -> Result<Self, Self::Error> {
        let composition = composition_from_json(event.composition).map_err(|e| {
            tracing::warn!(event_id = %event.id, error = %e, "Unreadable composition document");
            e
        })?;

        Ok(Event {
            id: event.id,
            team_id: event.team_id,
            author_id: event.author_id,
            kind: event.kind.into(),
            starts_at: event.starts_at,
            location: event.location,
            opponent: event.opponent,
            details: event.details,
            composition,
        })
    }
}

impl From<db_models::Availability> for Availability {
    fn from(availability: db_models::Availability) -> Self {
        Availability {
            id: availability.id,
            event_id: availability.event_id,
            player_id: availability.player_id,
            status: availability.status.into(),
            notes: availability.notes,
            updated_at: availability.updated_at,
        }
    }
}

impl From<db_models::Post> for Post {
    fn from(post: db_models::Post) -> Self {
        Post {
            id: post.id,
            club_id: post.club_id,
            team_id: post.team_id,
            author_id: post.author_id,
            title: post.title,
            content: post.content,
            category: post.category.into(),
            created_at: post.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use touchline_club::lineup::PositionKey;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_stored_composition_is_normalized() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let value = json!({
            "Loosehead Prop-1": first.to_string(),
            "Hooker-2": null,
            "player-pool": second.to_string(),
            "Fly-half-10": 42,
        });

        let composition = composition_from_json(value).unwrap();
        assert_eq!(composition.len(), 1);
        assert_eq!(
            composition.player_at(PositionKey::from_number(1).unwrap()),
            Some(first)
        );
    }

    #[test]
    fn test_composition_document_must_be_an_object() {
        let result = composition_from_json(json!(["Hooker-2"]));
        assert!(matches!(result, Err(DbError::Json(_))));
    }

    #[test]
    fn test_composition_json_uses_position_keys() {
        let player = Uuid::new_v4();
        let composition = touchline_club::lineup::assign(
            &Composition::new(),
            PositionKey::from_number(9).unwrap(),
            player,
        );
        let value = composition_to_json(&composition).unwrap();
        let key = PositionKey::from_number(9).unwrap().to_string();
        assert_eq!(value[key.as_str()], json!(player.to_string()));
    }
}
