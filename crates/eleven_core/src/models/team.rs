use super::player::Position;
use super::rating::PlayStyle;
use crate::stats::PerformanceStats;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which half of a team slot an assignment fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Starter,
    Substitute,
}

impl SlotRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotRole::Starter => "starter",
            SlotRole::Substitute => "substitute",
        }
    }
}

/// A concrete (player, card) pick for one slot, or a vacancy placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssignedPlayer {
    pub player_id: String,
    pub player_name: String,
    pub card_id: String,
    pub card_name: String,
    pub style: PlayStyle,
    pub position: Position,
    pub stats: PerformanceStats,
    /// True for the synthetic vacancy sentinel. Placeholders carry zeroed
    /// stats and are never counted as used players.
    #[serde(default)]
    pub placeholder: bool,
}

impl AssignedPlayer {
    /// Synthetic sentinel for a slot no real candidate could fill. The id
    /// encodes slot index and role so repeated runs stay byte-identical.
    pub fn placeholder(slot_index: usize, role: SlotRole, position: Position) -> Self {
        let sentinel = format!("vacant-{}-{}", role.as_str(), slot_index);
        Self {
            player_id: sentinel.clone(),
            player_name: format!("Vacant {} (slot {})", role.as_str(), slot_index + 1),
            card_id: sentinel,
            card_name: "Vacant".to_string(),
            style: PlayStyle::None,
            position,
            stats: PerformanceStats::default(),
            placeholder: true,
        }
    }
}

/// One output slot of a selection run: starter plus substitute, in the same
/// order as the input formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IdealTeamSlot {
    pub position: Position,
    pub starter: AssignedPlayer,
    pub substitute: AssignedPlayer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_identity_is_deterministic() {
        let a = AssignedPlayer::placeholder(4, SlotRole::Starter, Position::CM);
        let b = AssignedPlayer::placeholder(4, SlotRole::Starter, Position::CM);
        assert_eq!(a, b);
        assert_eq!(a.player_id, "vacant-starter-4");
        assert!(a.placeholder);
    }

    #[test]
    fn test_placeholder_carries_zeroed_stats() {
        let p = AssignedPlayer::placeholder(0, SlotRole::Substitute, Position::GK);
        assert_eq!(p.stats.matches, 0);
        assert_eq!(p.stats.average, 0.0);
        assert!(!p.stats.hot_streak);
        assert_eq!(p.style, PlayStyle::None);
    }
}
