use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

use super::positions::PositionKey;

/// Who plays where for one event.
///
/// A player id is the value of at most one position. Empty slots are simply
/// absent from the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    slots: BTreeMap<PositionKey, Uuid>,
}

/// The stored JSON shape: position key → player id or `null`.
pub type CompositionDocument = BTreeMap<String, Option<String>>;

/// Result of reading a stored document. `dropped` counts entries that were
/// not kept: unknown keys, malformed ids and repeated players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub composition: Composition,
    pub dropped: usize,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_at(&self, key: PositionKey) -> Option<Uuid> {
        self.slots.get(&key).copied()
    }

    pub fn position_of(&self, player_id: Uuid) -> Option<PositionKey> {
        self.slots
            .iter()
            .find(|(_, id)| **id == player_id)
            .map(|(key, _)| *key)
    }

    pub fn contains_player(&self, player_id: Uuid) -> bool {
        self.position_of(player_id).is_some()
    }

    pub fn assigned_players(&self) -> HashSet<Uuid> {
        self.slots.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PositionKey, Uuid)> + '_ {
        self.slots.iter().map(|(key, id)| (*key, *id))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(super) fn set(&mut self, key: PositionKey, player_id: Uuid) {
        self.slots.insert(key, player_id);
    }

    pub(super) fn clear(&mut self, key: PositionKey) {
        self.slots.remove(&key);
    }

    /// Empties every slot whose player fails `keep`. Returns how many slots
    /// were emptied.
    pub fn retain_players<F: FnMut(Uuid) -> bool>(&mut self, mut keep: F) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, player_id| keep(*player_id));
        before - self.slots.len()
    }

    /// Reads a stored document. Entries are visited in catalogue order, so
    /// when a player shows up under several keys the lowest jersey number
    /// wins.
    pub fn from_document(document: &CompositionDocument) -> Normalized {
        let mut entries: Vec<(PositionKey, Uuid)> = vec![];
        let mut dropped = 0;

        for (raw_key, raw_player) in document {
            let Some(raw_player) = raw_player else {
                continue;
            };
            match (raw_key.parse::<PositionKey>(), Uuid::parse_str(raw_player)) {
                (Ok(key), Ok(player_id)) => entries.push((key, player_id)),
                _ => dropped += 1,
            }
        }
        entries.sort_by_key(|(key, _)| *key);

        let mut composition = Composition::new();
        let mut seen = HashSet::new();
        for (key, player_id) in entries {
            if seen.insert(player_id) {
                composition.set(key, player_id);
            } else {
                dropped += 1;
            }
        }

        Normalized {
            composition,
            dropped,
        }
    }

    pub fn to_document(&self) -> CompositionDocument {
        self.slots
            .iter()
            .map(|(key, id)| (key.to_string(), Some(id.to_string())))
            .collect()
    }
}

impl Serialize for Composition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (key, id) in &self.slots {
            map.serialize_entry(&key.to_string(), id)?;
        }
        map.end()
    }
}

/// Client payloads are read strictly: an unknown key, a malformed id or a
/// player placed twice is an error. Stored documents go through
/// [`Composition::from_document`] instead.
impl<'de> Deserialize<'de> for Composition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = CompositionDocument::deserialize(deserializer)?;
        let mut composition = Composition::new();
        let mut seen = HashSet::new();

        for (raw_key, raw_player) in &document {
            let Some(raw_player) = raw_player else {
                continue;
            };
            let key = raw_key
                .parse::<PositionKey>()
                .map_err(|_| de::Error::custom(format!("unknown position '{raw_key}'")))?;
            let player_id = Uuid::parse_str(raw_player).map_err(|_| {
                de::Error::custom(format!("invalid player id '{raw_player}' at {raw_key}"))
            })?;
            if !seen.insert(player_id) {
                return Err(de::Error::custom(format!(
                    "player {player_id} is placed more than once"
                )));
            }
            composition.set(key, player_id);
        }

        Ok(composition)
    }
}
