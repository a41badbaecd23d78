use super::player::Position;
use super::rating::{PlayStyle, Rating};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rating card owned by a player.
///
/// Each card carries its own rating history per position. A card may have
/// zero, one, or many positions populated; a position whose history is empty
/// is treated exactly like an absent position.
///
/// The history map is a `BTreeMap` so position iteration follows the fixed
/// `Position` ordering — candidate construction depends on that being stable
/// across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub style: PlayStyle,
    #[serde(default)]
    pub ratings: BTreeMap<Position, Vec<Rating>>,
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            style: PlayStyle::None,
            ratings: BTreeMap::new(),
        }
    }

    /// Append a rating to a position's history. Insertion order is
    /// chronological order.
    pub fn add_rating(&mut self, position: Position, rating: Rating) {
        self.ratings.entry(position).or_default().push(rating);
    }

    /// Delete a single rating by index within a position's history.
    pub fn remove_rating(&mut self, position: Position, index: usize) -> Option<Rating> {
        let history = self.ratings.get_mut(&position)?;
        if index >= history.len() {
            return None;
        }
        Some(history.remove(index))
    }

    /// Positions with at least one recorded rating, in `Position` order.
    pub fn rated_positions(&self) -> impl Iterator<Item = (Position, &[Rating])> {
        self.ratings
            .iter()
            .filter(|(_, history)| !history.is_empty())
            .map(|(pos, history)| (*pos, history.as_slice()))
    }

    /// True when no position has any recorded rating.
    pub fn is_unrated(&self) -> bool {
        self.rated_positions().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_equals_absent_position() {
        let mut card = Card::new("c1", "Season 1");
        card.ratings.insert(Position::CM, Vec::new());

        assert!(card.is_unrated());
        assert_eq!(card.rated_positions().count(), 0);
    }

    #[test]
    fn test_add_rating_preserves_order() {
        let mut card = Card::new("c1", "Season 1");
        card.add_rating(Position::ST, Rating::new(6.0).unwrap());
        card.add_rating(Position::ST, Rating::new(9.0).unwrap());

        let (_, history) = card.rated_positions().next().unwrap();
        assert_eq!(history[0].value, 6.0);
        assert_eq!(history[1].value, 9.0);
    }

    #[test]
    fn test_remove_rating_by_index() {
        let mut card = Card::new("c1", "Season 1");
        card.add_rating(Position::ST, Rating::new(6.0).unwrap());
        card.add_rating(Position::ST, Rating::new(9.0).unwrap());

        let removed = card.remove_rating(Position::ST, 0).unwrap();
        assert_eq!(removed.value, 6.0);
        assert!(card.remove_rating(Position::ST, 5).is_none());
        assert!(card.remove_rating(Position::CM, 0).is_none());
    }

    #[test]
    fn test_rated_positions_follow_position_order() {
        let mut card = Card::new("c1", "Season 1");
        card.add_rating(Position::ST, Rating::new(7.0).unwrap());
        card.add_rating(Position::GK, Rating::new(7.0).unwrap());
        card.add_rating(Position::CM, Rating::new(7.0).unwrap());

        let order: Vec<Position> = card.rated_positions().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Position::GK, Position::CM, Position::ST]);
    }
}
