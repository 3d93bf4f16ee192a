use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use touchline_types::errors::ClubError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionRole {
    Starter,
    Substitute,
}

/// Where a starter is drawn on the pitch, in percent of the field height
/// (`top`) and width (`left`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpot {
    pub top: u8,
    pub left: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDef {
    pub name: &'static str,
    pub number: u8,
    pub role: PositionRole,
    pub spot: Option<FieldSpot>,
}

impl PositionDef {
    const fn starter(name: &'static str, number: u8, top: u8, left: u8) -> Self {
        Self {
            name,
            number,
            role: PositionRole::Starter,
            spot: Some(FieldSpot { top, left }),
        }
    }

    const fn substitute(number: u8) -> Self {
        Self {
            name: "Replacement",
            number,
            role: PositionRole::Substitute,
            spot: None,
        }
    }

    pub fn key(&self) -> PositionKey {
        PositionKey(self.number)
    }
}

/// The 23 slots of a rugby team sheet: 15 starters and 8 replacements.
pub const POSITIONS: [PositionDef; 23] = [
    // Front row
    PositionDef::starter("Loosehead Prop", 1, 15, 32),
    PositionDef::starter("Hooker", 2, 15, 50),
    PositionDef::starter("Tighthead Prop", 3, 15, 67),
    // Second row
    PositionDef::starter("Lock", 4, 27, 38),
    PositionDef::starter("Lock", 5, 27, 62),
    // Back row
    PositionDef::starter("Blindside Flanker", 6, 39, 30),
    PositionDef::starter("Openside Flanker", 7, 39, 70),
    PositionDef::starter("Number Eight", 8, 39, 50),
    // Half-backs
    PositionDef::starter("Scrum-half", 9, 53, 38),
    PositionDef::starter("Fly-half", 10, 55, 60),
    // Three-quarters
    PositionDef::starter("Left Wing", 11, 67, 20),
    PositionDef::starter("Inside Centre", 12, 69, 40),
    PositionDef::starter("Outside Centre", 13, 69, 60),
    PositionDef::starter("Right Wing", 14, 67, 80),
    PositionDef::starter("Fullback", 15, 82, 50),
    // Bench
    PositionDef::substitute(16),
    PositionDef::substitute(17),
    PositionDef::substitute(18),
    PositionDef::substitute(19),
    PositionDef::substitute(20),
    PositionDef::substitute(21),
    PositionDef::substitute(22),
    PositionDef::substitute(23),
];

/// Stable identifier of a catalogue slot, rendered as `"{name}-{number}"`
/// (e.g. `"Hooker-2"`, `"Replacement-16"`). Ordered by jersey number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionKey(u8);

impl PositionKey {
    pub fn from_number(number: u8) -> Option<Self> {
        (1..=POSITIONS.len() as u8)
            .contains(&number)
            .then_some(Self(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn definition(&self) -> &'static PositionDef {
        &POSITIONS[(self.0 - 1) as usize]
    }

    pub fn all() -> impl Iterator<Item = PositionKey> {
        POSITIONS.iter().map(PositionDef::key)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let def = self.definition();
        write!(f, "{}-{}", def.name, def.number)
    }
}

impl FromStr for PositionKey {
    type Err = ClubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.rsplit_once('-')
            .and_then(|(name, number)| {
                let key = PositionKey::from_number(number.parse().ok()?)?;
                (key.definition().name == name).then_some(key)
            })
            .ok_or_else(|| ClubError::UnknownPosition(s.to_string()))
    }
}

impl Serialize for PositionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PositionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        assert_eq!(POSITIONS.len(), 23);
        let starters = POSITIONS
            .iter()
            .filter(|p| p.role == PositionRole::Starter)
            .count();
        assert_eq!(starters, 15);

        for (idx, def) in POSITIONS.iter().enumerate() {
            assert_eq!(def.number as usize, idx + 1);
            assert_eq!(def.spot.is_some(), def.role == PositionRole::Starter);
        }
    }

    #[test]
    fn test_keys_are_unique_and_parse_back() {
        let keys: Vec<String> = PositionKey::all().map(|k| k.to_string()).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 23);

        for key in PositionKey::all() {
            assert_eq!(key.to_string().parse::<PositionKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_key_format() {
        assert_eq!(PositionKey::from_number(2).unwrap().to_string(), "Hooker-2");
        assert_eq!(PositionKey::from_number(9).unwrap().to_string(), "Scrum-half-9");
        assert_eq!(
            PositionKey::from_number(16).unwrap().to_string(),
            "Replacement-16"
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        for raw in ["player-pool", "Hooker-3", "Hooker", "Replacement-24", "Lock-0", ""] {
            assert!(
                matches!(raw.parse::<PositionKey>(), Err(ClubError::UnknownPosition(_))),
                "{raw} should not parse"
            );
        }
        assert!(PositionKey::from_number(0).is_none());
        assert!(PositionKey::from_number(24).is_none());
    }
}
