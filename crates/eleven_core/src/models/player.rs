use super::card::Card;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A player in the roster pool.
///
/// Players own their cards exclusively: a card's lifetime is its player's
/// lifetime and cards are never shared between players. The selection engine
/// treats the id as opaque; it comes from the host application's document
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), cards: Vec::new() }
    }
}

/// On-field role. Closed set of 13 positions.
///
/// Declaration order is load-bearing: `Ord` over this order fixes the
/// per-card position iteration used when building candidates, which in turn
/// fixes tie-breaking between equally rated candidates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    LB,
    CB,
    RB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    CF,
    ST,
}

impl Position {
    /// All positions in declaration order.
    pub const ALL: [Position; 13] = [
        Position::GK,
        Position::LB,
        Position::CB,
        Position::RB,
        Position::CDM,
        Position::CM,
        Position::CAM,
        Position::LM,
        Position::RM,
        Position::LW,
        Position::RW,
        Position::CF,
        Position::ST,
    ];

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, Position::LB | Position::CB | Position::RB)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            Position::CDM | Position::CM | Position::CAM | Position::LM | Position::RM
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::LW | Position::RW | Position::CF | Position::ST)
    }

    /// Canonical code string, matching the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::CF => "CF",
            Position::ST => "ST",
        }
    }
}
