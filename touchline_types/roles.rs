use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role of a club member. Decides which side of the application a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    AdminCoach,
    Player,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AdminCoach => "admin_coach",
            Role::Player => "player",
        }
    }

    pub fn is_coach(&self) -> bool {
        matches!(self, Role::AdminCoach)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin_coach" => Ok(Role::AdminCoach),
            "player" => Ok(Role::Player),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}
