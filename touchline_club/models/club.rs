use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::errors::ClubError;

use super::non_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
}

impl Club {
    pub fn new(id: Uuid, name: &str, city: Option<String>) -> Result<Self, ClubError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClubError::MissingField("club name"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            city: non_blank(city),
        })
    }
}
