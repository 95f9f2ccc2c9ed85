use crate::{
    directory::CardDirectory,
    domain::{
        board::BoardState,
        card::{Card, CardId, CardRecord},
        lane::Lane,
    },
    error::{BoardError, Result},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::Arc};
use tokio::sync::watch;

/// A move that changed a card's lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    pub card_id: CardId,
    pub from: Lane,
    pub to: Lane,
    /// Revision of the state published by this move
    pub revision: u64,
    pub at: DateTime<Utc>,
}

/// Result of handling a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A new state was published
    Moved(AppliedMove),
    /// The card would stay in its lane; nothing changed
    SameLane,
    /// No card with this id is on the board; nothing changed
    UnknownCard(String),
    /// The dropped element carried no card id; nothing changed
    MissingCardId,
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Receiver of normalized drop events
pub trait MoveSink {
    fn handle_move(&mut self, card_id: &str, source_lane: &str, target_lane: &str) -> MoveOutcome;
}

/// Owner of the board's partition and the only thing allowed to change it.
///
/// Every change publishes a fresh [`BoardState`] as a whole value; subscribers
/// never see a partially updated partition.
pub struct BoardReconciler {
    publisher: watch::Sender<Arc<BoardState>>,
    revision: u64,
    history: Vec<AppliedMove>,
}

impl BoardReconciler {
    /// Builds the initial state from a card directory
    pub async fn initialize(directory: &dyn CardDirectory) -> Result<Self> {
        let records = directory.fetch_cards().await?;
        Self::from_records(records)
    }

    /// Builds the initial state from records already in memory
    pub fn from_records(records: impl IntoIterator<Item = CardRecord>) -> Result<Self> {
        let cards = records
            .into_iter()
            .map(Card::from_record)
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(BoardError::DuplicateCardId(card.id.to_string()));
            }
        }

        let state = Arc::new(BoardState::classify(cards));
        let (publisher, _) = watch::channel(Arc::clone(&state));

        tracing::info!(
            backlog = state.lane(Lane::Backlog).len(),
            in_progress = state.lane(Lane::InProgress).len(),
            complete = state.lane(Lane::Complete).len(),
            "Board initialized"
        );

        Ok(Self {
            publisher,
            revision: 0,
            history: Vec::new(),
        })
    }

    /// The current state, shareable with renderers
    pub fn snapshot(&self) -> Arc<BoardState> {
        Arc::clone(&self.publisher.borrow())
    }

    /// Subscribes to state replacements
    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardState>> {
        self.publisher.subscribe()
    }

    /// Number of states published since initialization
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Moves applied since initialization, oldest first
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    /// Reclassifies a card after a drop from `source_lane` onto `target_lane`.
    ///
    /// The partition is rebuilt from the flattened card list rather than
    /// patched, so the moved card takes its flattened position in the new lane,
    /// not the position it was dropped at.
    pub fn handle_move(&mut self, card_id: &str, source_lane: &str, target_lane: &str) -> MoveOutcome {
        if source_lane == target_lane {
            tracing::debug!(card_id, lane = source_lane, "Same-lane drop ignored");
            return MoveOutcome::SameLane;
        }

        let mut cards: Vec<Card> = self.publisher.borrow().iter().cloned().collect();
        let Some(card) = cards.iter_mut().find(|card| card.id == *card_id) else {
            tracing::debug!(card_id, "Drop references unknown card");
            return MoveOutcome::UnknownCard(card_id.to_string());
        };

        let target = Lane::from_label(target_lane);
        if target.as_str() != target_lane {
            tracing::warn!(card_id, target_lane, "Unrecognized target lane, using backlog");
        }

        let from = card.status;
        if from == target {
            tracing::debug!(card_id, lane = %target, "Card already in target lane");
            return MoveOutcome::SameLane;
        }
        card.status = target;
        let applied_id = card.id.clone();

        self.publish(BoardState::classify(cards));

        let applied = AppliedMove {
            card_id: applied_id,
            from,
            to: target,
            revision: self.revision,
            at: Utc::now(),
        };
        tracing::info!(
            card_id,
            from = %applied.from,
            to = %applied.to,
            revision = applied.revision,
            "Card moved"
        );
        self.history.push(applied.clone());

        MoveOutcome::Moved(applied)
    }

    fn publish(&mut self, state: BoardState) {
        self.revision += 1;
        self.publisher.send_replace(Arc::new(state));
    }
}

impl MoveSink for BoardReconciler {
    fn handle_move(&mut self, card_id: &str, source_lane: &str, target_lane: &str) -> MoveOutcome {
        BoardReconciler::handle_move(self, card_id, source_lane, target_lane)
    }
}
