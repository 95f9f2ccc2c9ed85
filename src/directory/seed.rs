use crate::{directory::CardDirectory, domain::CardRecord, error::Result};
use async_trait::async_trait;

const SEED: [(&str, &str, &str, &str); 20] = [
    ("1", "Stark, White and Abbott", "Cloned Optimal Architecture", "in-progress"),
    ("2", "Wiza LLC", "Exclusive Bandwidth-Monitored Implementation", "complete"),
    ("3", "Nolan LLC", "Vision-Oriented 4Thgeneration Graphicaluserinterface", "backlog"),
    ("4", "Thompson PLC", "Streamlined Regional Knowledgeuser", "in-progress"),
    ("5", "Walker-Williamson", "Team-Oriented 6Thgeneration Matrix", "in-progress"),
    ("6", "Boehm and Sons", "Automated Systematic Paradigm", "backlog"),
    ("7", "Runolfsson, Hegmann and Block", "Integrated Transitional Strategy", "backlog"),
    ("8", "Schumm-Labadie", "Operative Heuristic Challenge", "backlog"),
    ("9", "Kohler Group", "Re-Contextualized Multi-Tasking Attitude", "backlog"),
    ("10", "Romaguera Inc", "Managed Foreground Toolset", "backlog"),
    ("11", "Reilly-King", "Future-Proofed Interactive Toolset", "complete"),
    ("12", "Emard, Champlin and Runolfsdottir", "Devolved Needs-Based Capability", "backlog"),
    ("13", "Fritsch, Cronin and Wolff", "Open-Source 3Rdgeneration Website", "complete"),
    ("14", "Borer LLC", "Profit-Focused Incremental Orchestration", "backlog"),
    ("15", "Emmerich-Ankunding", "User-Centric Stable Extranet", "in-progress"),
    ("16", "Willms-Abbott", "Progressive Bandwidth-Monitored Access", "in-progress"),
    ("17", "Brekke PLC", "Intuitive User-Facing Customerloyalty", "complete"),
    ("18", "Bins, Toy and Klocko", "Integrated Assymetric Software", "backlog"),
    ("19", "Hodkiewicz-Hayes", "Programmable Systematic Securedline", "backlog"),
    ("20", "Murphy, Lang and Ferry", "Organized Explicit Access", "backlog"),
];

/// Fixed in-memory directory of twenty client cards
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedDirectory;

impl SeedDirectory {
    pub fn records(&self) -> Vec<CardRecord> {
        SEED.iter()
            .map(|(id, name, description, status)| {
                CardRecord::new(id, name, description, status)
            })
            .collect()
    }
}

#[async_trait]
impl CardDirectory for SeedDirectory {
    async fn fetch_cards(&self) -> Result<Vec<CardRecord>> {
        Ok(self.records())
    }
}
