use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Record identifier: a Unix timestamp in milliseconds taken at creation.
///
/// Serialized as a JSON number. Deserialization also accepts numeric
/// strings, since the remote enquiry API is not consistent about it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct EntityId(#[ts(type = "number")] pub i64);

impl EntityId {
    /// Generate an id from the current time that is not already in `existing`.
    pub fn generate(existing: impl IntoIterator<Item = EntityId>) -> Self {
        Self::next_free(jiff::Timestamp::now().as_millisecond(), existing)
    }

    /// The first id at or after `candidate` that is not in `existing`.
    pub fn next_free(candidate: i64, existing: impl IntoIterator<Item = EntityId>) -> Self {
        let taken: BTreeSet<i64> = existing.into_iter().map(|id| id.0).collect();
        let mut id = candidate;
        while taken.contains(&id) {
            id += 1;
        }
        EntityId(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntityId)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(EntityId(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
