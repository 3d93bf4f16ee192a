use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::errors::ClubError;

use super::non_blank;

pub const DEFAULT_LICENSE_STATUS: &str = "Pending";

/// A roster entry. Not necessarily linked to a user account: coaches create
/// players first and may invite them later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

/// Editable attributes of a roster entry.
#[derive(Debug, Clone, Default)]
pub struct PlayerDetails {
    pub name: String,
    pub positions: Vec<String>,
    pub license_status: Option<String>,
    pub photo_url: Option<String>,
}

impl Player {
    pub fn new(id: Uuid, team_id: Uuid, details: PlayerDetails) -> Result<Self, ClubError> {
        let mut player = Self {
            id,
            team_id,
            name: String::new(),
            positions: vec![],
            license_status: DEFAULT_LICENSE_STATUS.to_string(),
            photo_url: None,
            email: None,
            user_id: None,
        };
        player.update(details)?;
        Ok(player)
    }

    pub fn update(&mut self, details: PlayerDetails) -> Result<(), ClubError> {
        let name = details.name.trim();
        if name.is_empty() {
            return Err(ClubError::MissingField("player name"));
        }

        self.name = name.to_string();
        self.positions = details
            .positions
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if let Some(status) = non_blank(details.license_status) {
            self.license_status = status;
        }
        self.photo_url = non_blank(details.photo_url);
        Ok(())
    }

    /// First preferred position label, used to order the available pool.
    pub fn preferred_position(&self) -> Option<&str> {
        self.positions
            .first()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }

    pub fn link_user(&mut self, user_id: Uuid) -> Result<(), ClubError> {
        match self.user_id {
            Some(existing) if existing != user_id => Err(ClubError::PlayerAlreadyLinked(self.id)),
            _ => {
                self.user_id = Some(user_id);
                Ok(())
            }
        }
    }
}

/// Splits a comma separated list of position labels ("Prop, Hooker").
pub fn parse_position_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts anything shaped like `local@domain.tld`, returns it trimmed.
pub fn validate_email(email: &str) -> Result<String, ClubError> {
    let email = email.trim();
    let valid = !email.chars().any(char::is_whitespace)
        && match email.rsplit_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain
                        .char_indices()
                        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
            }
            None => false,
        };

    if valid {
        Ok(email.to_string())
    } else {
        Err(ClubError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, positions: &str) -> PlayerDetails {
        PlayerDetails {
            name: name.to_string(),
            positions: parse_position_labels(positions),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_position_labels() {
        assert_eq!(
            parse_position_labels(" Prop, Hooker ,, "),
            vec!["Prop".to_string(), "Hooker".to_string()]
        );
        assert!(parse_position_labels("").is_empty());
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(Uuid::new_v4(), Uuid::new_v4(), details(" Jonah ", "Wing")).unwrap();
        assert_eq!(player.name, "Jonah");
        assert_eq!(player.license_status, DEFAULT_LICENSE_STATUS);
        assert_eq!(player.preferred_position(), Some("Wing"));
        assert!(player.user_id.is_none());
    }

    #[test]
    fn test_player_name_is_required() {
        let result = Player::new(Uuid::new_v4(), Uuid::new_v4(), details("  ", ""));
        assert!(matches!(result, Err(ClubError::MissingField("player name"))));
    }

    #[test]
    fn test_update_keeps_license_when_blank() {
        let mut player = Player::new(Uuid::new_v4(), Uuid::new_v4(), details("Dan", "")).unwrap();
        player
            .update(PlayerDetails {
                name: "Dan".to_string(),
                license_status: Some("Valid".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(player.license_status, "Valid");

        player
            .update(PlayerDetails {
                name: "Dan".to_string(),
                license_status: Some(" ".to_string()),
                photo_url: Some("https://cdn.example.com/dan.png".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(player.license_status, "Valid");
        assert_eq!(
            player.photo_url.as_deref(),
            Some("https://cdn.example.com/dan.png")
        );
        assert_eq!(player.preferred_position(), None);
    }

    #[test]
    fn test_link_user_only_once() {
        let mut player = Player::new(Uuid::new_v4(), Uuid::new_v4(), details("Ed", "")).unwrap();
        let user_id = Uuid::new_v4();
        player.link_user(user_id).unwrap();
        player.link_user(user_id).unwrap();
        assert!(matches!(
            player.link_user(Uuid::new_v4()),
            Err(ClubError::PlayerAlreadyLinked(_))
        ));
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(" a@b.co ").unwrap(), "a@b.co");
        assert!(validate_email("first.last@club.rugby.fr").is_ok());
        for bad in ["", "nobody", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.de"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }
}
