use crate::config::BoardConfig;
use crate::domain::{
    card::{Card, CardId},
    lane::Lane,
};
use serde::Serialize;

/// Partition of every card on the board into the three lanes.
///
/// Each card appears in exactly one sequence, and that sequence is always the
/// one its status maps to. States are only ever built through [`BoardState::classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    backlog: Vec<Card>,
    in_progress: Vec<Card>,
    complete: Vec<Card>,
}

impl BoardState {
    /// Classifies cards into lanes by status, preserving input order within each lane
    pub fn classify(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut state = Self::default();
        for card in cards {
            state.lane_mut(card.status).push(card);
        }
        state
    }

    pub fn lane(&self, lane: Lane) -> &[Card] {
        match lane {
            Lane::Backlog => &self.backlog,
            Lane::InProgress => &self.in_progress,
            Lane::Complete => &self.complete,
        }
    }

    fn lane_mut(&mut self, lane: Lane) -> &mut Vec<Card> {
        match lane {
            Lane::Backlog => &mut self.backlog,
            Lane::InProgress => &mut self.in_progress,
            Lane::Complete => &mut self.complete,
        }
    }

    /// All cards, backlog first, then in progress, then complete
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.backlog
            .iter()
            .chain(self.in_progress.iter())
            .chain(self.complete.iter())
    }

    /// Consumes the state into the flattened card list
    pub fn into_cards(self) -> Vec<Card> {
        let mut cards = self.backlog;
        cards.extend(self.in_progress);
        cards.extend(self.complete);
        cards
    }

    pub fn len(&self) -> usize {
        self.backlog.len() + self.in_progress.len() + self.complete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: &str) -> Option<&Card> {
        self.iter().find(|card| card.id == *id)
    }

    pub fn lane_of(&self, id: &str) -> Option<Lane> {
        self.find(id).map(|card| card.status)
    }

    /// Card identities in a lane, in display order
    pub fn ids(&self, lane: Lane) -> Vec<&CardId> {
        self.lane(lane).iter().map(|card| &card.id).collect()
    }

    /// Views for the lane presenter, in the configured column order
    pub fn views<'a>(&'a self, config: &'a BoardConfig) -> Vec<LaneView<'a>> {
        config
            .columns
            .iter()
            .map(|column| LaneView {
                name: &column.name,
                lane: column.lane,
                cards: self.lane(column.lane),
            })
            .collect()
    }
}

/// What a lane presenter needs to render one lane.
///
/// The presenter tags each card element with the card id and the lane's drop
/// zone with [`LaneView::key`], using the attribute names from [`BoardConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneView<'a> {
    pub name: &'a str,
    pub lane: Lane,
    pub cards: &'a [Card],
}

impl LaneView<'_> {
    pub fn key(&self) -> &'static str {
        self.lane.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardRecord;

    fn card(id: &str, status: &str) -> Card {
        Card::from_record(CardRecord::new(id, "Name", "Description", status)).unwrap()
    }

    #[test]
    fn test_classify_keeps_emission_order() {
        let state = BoardState::classify(vec![
            card("1", "in-progress"),
            card("2", "complete"),
            card("3", ""),
            card("4", "in-progress"),
            card("5", "backlog"),
        ]);

        assert_eq!(state.ids(Lane::Backlog), vec!["3", "5"]);
        assert_eq!(state.ids(Lane::InProgress), vec!["1", "4"]);
        assert_eq!(state.ids(Lane::Complete), vec!["2"]);
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_flatten_order() {
        let state = BoardState::classify(vec![
            card("1", "complete"),
            card("2", "in-progress"),
            card("3", "backlog"),
        ]);

        let ids: Vec<&str> = state.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);

        let ids: Vec<String> = state.into_cards().into_iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_lookup() {
        let state = BoardState::classify(vec![card("1", "complete"), card("2", "")]);

        assert_eq!(state.lane_of("1"), Some(Lane::Complete));
        assert_eq!(state.lane_of("2"), Some(Lane::Backlog));
        assert_eq!(state.lane_of("99"), None);
        assert!(state.find("2").is_some());
    }

    #[test]
    fn test_empty_state() {
        let state = BoardState::classify(Vec::new());
        assert!(state.is_empty());
        for lane in Lane::ALL {
            assert!(state.lane(lane).is_empty());
        }
    }

    #[test]
    fn test_serializes_with_state_keys() {
        let state = BoardState::classify(vec![card("1", "in-progress")]);
        let json = serde_json::to_value(&state).unwrap();

        assert!(json.get("inProgress").is_some());
        assert!(json.get("backlog").is_some());
        assert!(json.get("complete").is_some());
        assert_eq!(json["inProgress"][0]["status"], "in-progress");
    }

    #[test]
    fn test_views_follow_config() {
        let state = BoardState::classify(vec![card("1", "in-progress"), card("2", "complete")]);
        let config = BoardConfig::default();
        let views = state.views(&config);

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].name, "Backlog");
        assert_eq!(views[0].key(), "backlog");
        assert!(views[0].cards.is_empty());
        assert_eq!(views[1].name, "In Progress");
        assert_eq!(views[1].key(), "in-progress");
        assert_eq!(views[1].cards.len(), 1);
        assert_eq!(views[2].key(), "complete");
    }
}
