use crate::error::TeamError;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lowest recordable match rating.
pub const MIN_RATING: f32 = 1.0;
/// Highest recordable match rating.
pub const MAX_RATING: f32 = 10.0;
/// Ratings are recorded in half-point steps.
pub const RATING_STEP: f32 = 0.5;

/// A single observed match performance.
///
/// Immutable once created; the roster app deletes ratings individually but
/// never edits them in place. Insertion order inside a card's history is
/// chronological order, which is what drives the hot-streak signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rating {
    pub value: f32,
    /// When the performance was observed. Carried for the host application;
    /// the selection engine only relies on insertion order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl Rating {
    /// Create a rating, validating range and half-point granularity.
    pub fn new(value: f32) -> Result<Self, TeamError> {
        if !Self::is_valid_value(value) {
            return Err(TeamError::InvalidRating(format!(
                "rating must be {MIN_RATING}..={MAX_RATING} in steps of {RATING_STEP}, got {value}"
            )));
        }
        Ok(Self { value, recorded_at: None })
    }

    /// Create a rating stamped with the observation time.
    pub fn recorded(value: f32, at: DateTime<Utc>) -> Result<Self, TeamError> {
        let mut rating = Self::new(value)?;
        rating.recorded_at = Some(at);
        Ok(rating)
    }

    fn is_valid_value(value: f32) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&value) && (value / RATING_STEP).fract() == 0.0
    }
}

/// Play-style tag attached to a card.
///
/// Closed set mirroring the roster app's style picker; `None` means the card
/// has no declared style and only ever matches slots without a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum PlayStyle {
    #[default]
    None,
    Poacher,
    TargetMan,
    FalseNine,
    Speedster,
    Dribbler,
    Crosser,
    Playmaker,
    BoxToBox,
    Anchor,
    SweeperKeeper,
    ShotStopper,
}

impl PlayStyle {
    /// Display name for UI.
    pub fn display(&self) -> &'static str {
        match self {
            PlayStyle::None => "None",
            PlayStyle::Poacher => "Poacher",
            PlayStyle::TargetMan => "Target Man",
            PlayStyle::FalseNine => "False Nine",
            PlayStyle::Speedster => "Speedster",
            PlayStyle::Dribbler => "Dribbler",
            PlayStyle::Crosser => "Crosser",
            PlayStyle::Playmaker => "Playmaker",
            PlayStyle::BoxToBox => "Box-to-Box",
            PlayStyle::Anchor => "Anchor",
            PlayStyle::SweeperKeeper => "Sweeper Keeper",
            PlayStyle::ShotStopper => "Shot Stopper",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_accepts_half_point_steps() {
        assert!(Rating::new(1.0).is_ok());
        assert!(Rating::new(7.5).is_ok());
        assert!(Rating::new(10.0).is_ok());
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(Rating::new(0.5).is_err());
        assert!(Rating::new(10.5).is_err());
    }

    #[test]
    fn test_rating_rejects_off_step_values() {
        assert!(Rating::new(7.3).is_err());
        assert!(Rating::new(6.25).is_err());
    }

    #[test]
    fn test_style_display_names() {
        assert_eq!(PlayStyle::TargetMan.display(), "Target Man");
        assert_eq!(PlayStyle::default(), PlayStyle::None);
    }
}
