use crate::{
    directory::CardDirectory,
    domain::CardRecord,
    error::Result,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Card directory backed by a JSON array of records on disk
pub struct FileDirectory {
    path: PathBuf,
}

impl FileDirectory {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CardDirectory for FileDirectory {
    async fn fetch_cards(&self) -> Result<Vec<CardRecord>> {
        let contents = fs::read_to_string(&self.path).await?;
        let records: Vec<CardRecord> = serde_json::from_str(&contents)?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded card directory"
        );
        Ok(records)
    }
}
