use super::player::Position;
use super::rating::PlayStyle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of slots a match-ready formation carries.
pub const FORMATION_SIZE: usize = 11;

/// One slot of a formation: a position plus an optional set of preferred
/// play-styles. An empty style list means "no preference".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormationSlot {
    pub position: Position,
    #[serde(default)]
    pub styles: Vec<PlayStyle>,
}

impl FormationSlot {
    pub fn new(position: Position) -> Self {
        Self { position, styles: Vec::new() }
    }

    pub fn with_styles(position: Position, styles: Vec<PlayStyle>) -> Self {
        Self { position, styles }
    }

    /// True when the slot declares a style preference and `style` matches it.
    pub fn prefers(&self, style: PlayStyle) -> bool {
        self.styles.contains(&style)
    }
}

/// An ordered sequence of formation slots, expected to be 11 long.
///
/// Slot order matters only for assignment iteration: when two slots request
/// the same position, the earlier slot claims the better candidate first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Formation {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(name: impl Into<String>, slots: Vec<FormationSlot>) -> Self {
        Self { name: name.into(), slots }
    }

    /// Shape check for the CRUD layer. The selection engine itself never
    /// calls this: it mirrors whatever slot count it is handed.
    pub fn validate(&self) -> Result<(), String> {
        if self.slots.len() != FORMATION_SIZE {
            return Err(format!(
                "Formation must have exactly {} slots, found {}",
                FORMATION_SIZE,
                self.slots.len()
            ));
        }

        let gk_count = self.slots.iter().filter(|s| s.position.is_goalkeeper()).count();
        if gk_count != 1 {
            return Err(format!("Formation must have exactly 1 GK slot, found {}", gk_count));
        }

        Ok(())
    }

    /// Classic 4-4-2, no style preferences.
    pub fn four_four_two() -> Self {
        Self::from_positions(
            "4-4-2",
            [
                Position::GK,
                Position::LB,
                Position::CB,
                Position::CB,
                Position::RB,
                Position::LM,
                Position::CM,
                Position::CM,
                Position::RM,
                Position::ST,
                Position::ST,
            ],
        )
    }

    /// Classic 4-3-3, no style preferences.
    pub fn four_three_three() -> Self {
        Self::from_positions(
            "4-3-3",
            [
                Position::GK,
                Position::LB,
                Position::CB,
                Position::CB,
                Position::RB,
                Position::CM,
                Position::CM,
                Position::CM,
                Position::LW,
                Position::ST,
                Position::RW,
            ],
        )
    }

    fn from_positions(name: &str, positions: [Position; FORMATION_SIZE]) -> Self {
        Self::new(name, positions.into_iter().map(FormationSlot::new).collect())
    }

    /// Distinct positions in first-occurrence slot order. This is the
    /// fallback position list for cards with no rating history.
    pub fn distinct_positions(&self) -> Vec<Position> {
        let mut seen = Vec::new();
        for slot in &self.slots {
            if !seen.contains(&slot.position) {
                seen.push(slot.position);
            }
        }
        seen
    }
}
