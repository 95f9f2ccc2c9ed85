use crate::domain::lane::Lane;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Stable identity of a card, unique across the board's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(crate::error::BoardError::InvalidCardId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for CardId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A record as emitted by a card directory.
///
/// The status is kept as raw text: older directories leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl CardRecord {
    pub fn new(id: &str, name: &str, description: &str, status: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        }
    }
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: Lane,
}

impl Card {
    /// Builds a card from a directory record, applying the backlog default
    pub fn from_record(record: CardRecord) -> crate::error::Result<Self> {
        Ok(Self {
            id: record.id.parse()?,
            name: record.name,
            description: record.description,
            status: Lane::from_label(&record.status),
        })
    }

    /// Lane-colored marker for rendering, derived from the status alone
    pub fn marker_class(&self) -> &'static str {
        self.status.as_str()
    }
}
