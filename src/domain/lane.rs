use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the three fixed classification buckets on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lane {
    #[default]
    Backlog,
    InProgress,
    Complete,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Backlog, Lane::InProgress, Lane::Complete];

    /// Canonical label, used both as the card status and as the drop zone tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        }
    }

    /// Key of the lane's sequence inside the published board state
    pub fn state_key(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "inProgress",
            Self::Complete => "complete",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }

    /// Maps a status or lane label to a lane.
    ///
    /// Absent, empty and unrecognized labels all fall back to `Backlog`, so
    /// every card always has a valid lane.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl FromStr for Lane {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Self::Backlog),
            "in-progress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            _ => Err(crate::error::BoardError::UnknownLane(s.to_string())),
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
