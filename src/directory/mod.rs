use crate::{domain::CardRecord, error::Result};
use async_trait::async_trait;

pub mod file_directory;
pub mod seed;

pub use file_directory::FileDirectory;
pub use seed::SeedDirectory;

/// Source of the initial card list for a board
#[async_trait]
pub trait CardDirectory: Send + Sync {
    /// Returns every card record, in display order
    async fn fetch_cards(&self) -> Result<Vec<CardRecord>>;
}
