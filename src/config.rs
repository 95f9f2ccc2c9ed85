use crate::{
    domain::lane::Lane,
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Configuration for a board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub lane: Lane,
}

impl Column {
    pub fn new(name: String, lane: Lane) -> Self {
        Self { name, lane }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    /// Attribute carrying the card id on each rendered card
    #[serde(default = "default_card_attribute")]
    pub card_attribute: String,
    /// Attribute carrying the lane label on each drop zone
    #[serde(default = "default_lane_attribute")]
    pub lane_attribute: String,
}

fn default_card_attribute() -> String {
    "data-id".to_string()
}

fn default_lane_attribute() -> String {
    "data-lane".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Board".to_string(),
            columns: Lane::ALL
                .iter()
                .map(|lane| Column::new(lane.title().to_string(), *lane))
                .collect(),
            card_attribute: default_card_attribute(),
            lane_attribute: default_lane_attribute(),
        }
    }
}

impl BoardConfig {
    /// Loads and validates a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        let config: BoardConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every lane has exactly one column and both attributes are named
    pub fn validate(&self) -> Result<()> {
        for lane in Lane::ALL {
            let count = self.columns.iter().filter(|col| col.lane == lane).count();
            if count != 1 {
                return Err(BoardError::ConfigError(format!(
                    "lane '{}' must have exactly one column, found {}",
                    lane, count
                )));
            }
        }

        if self.card_attribute.trim().is_empty() || self.lane_attribute.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "attribute names must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets the column configuration for a lane
    pub fn column_for_lane(&self, lane: Lane) -> Option<&Column> {
        self.columns.iter().find(|col| col.lane == lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.card_attribute, "data-id");
        assert_eq!(config.lane_attribute, "data-lane");

        let titles: Vec<&str> = config.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(titles, vec!["Backlog", "In Progress", "Complete"]);
    }

    #[test]
    fn test_validate_rejects_missing_lane() {
        let mut config = BoardConfig::default();
        config.columns.pop();
        assert!(matches!(config.validate(), Err(BoardError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_lane() {
        let mut config = BoardConfig::default();
        config.columns[2].lane = Lane::Backlog;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_extra_column() {
        let mut config = BoardConfig::default();
        config
            .columns
            .push(Column::new("Archive".to_string(), Lane::Complete));
        assert!(matches!(config.validate(), Err(BoardError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_empty_attribute() {
        let config = BoardConfig {
            lane_attribute: String::new(),
            ..BoardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_column_for_lane() {
        let config = BoardConfig::default();
        let column = config.column_for_lane(Lane::InProgress).unwrap();
        assert_eq!(column.name, "In Progress");
    }

    #[tokio::test]
    async fn test_load_with_default_attributes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        let json = r#"{
            "name": "Clients",
            "columns": [
                {"name": "To Do", "lane": "backlog"},
                {"name": "Doing", "lane": "in-progress"},
                {"name": "Done", "lane": "complete"}
            ]
        }"#;
        tokio::fs::write(&path, json).await.unwrap();

        let config = BoardConfig::load(&path).await.unwrap();
        assert_eq!(config.name, "Clients");
        assert_eq!(config.columns[1].name, "Doing");
        assert_eq!(config.lane_attribute, "data-lane");
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_lane() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        let json = r#"{"name": "Clients", "columns": [{"name": "Later", "lane": "someday"}]}"#;
        tokio::fs::write(&path, json).await.unwrap();

        let result = BoardConfig::load(&path).await;
        assert!(matches!(result, Err(BoardError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = BoardConfig::load(temp_dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(BoardError::IoError(_))));
    }
}
