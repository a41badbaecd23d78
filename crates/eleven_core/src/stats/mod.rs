//! Performance statistics over rating histories.
//!
//! Pure functions only: a rating history goes in, descriptive statistics and
//! performance flags come out. Nothing here does I/O or touches shared state,
//! so every selection run recomputes stats from scratch and stays
//! reproducible.

use crate::models::{Card, Rating};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How many trailing ratings feed the hot-streak comparison.
pub const RECENT_WINDOW: usize = 3;
/// Minimum sample size before recency can be trusted.
pub const HOT_STREAK_MIN_MATCHES: usize = 3;
/// Margin the recent average must clear over the overall average.
pub const HOT_STREAK_MARGIN: f32 = 0.5;
/// Minimum sample size before spread is meaningful.
pub const CONSISTENT_MIN_MATCHES: usize = 5;
/// Spread ceiling for the consistency flag.
pub const CONSISTENT_MAX_STD_DEV: f32 = 0.5;
/// Below this sample size a card is still "promising" (unproven).
pub const PROMISING_MAX_MATCHES: usize = 10;
/// Per-position average a versatile card must reach.
pub const VERSATILE_MIN_AVERAGE: f32 = 7.5;
/// Number of strong positions a versatile card must have.
pub const VERSATILE_MIN_POSITIONS: usize = 3;

/// Descriptive summary of one rating history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    pub average: f32,
    pub matches: usize,
    pub std_dev: f32,
}

/// Performance flags derived from one rating history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerformanceFlags {
    pub hot_streak: bool,
    pub consistent: bool,
    pub promising: bool,
}

/// Full per-candidate statistics: summary, history flags, and the card-level
/// versatility flag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceStats {
    pub average: f32,
    pub matches: usize,
    pub std_dev: f32,
    pub hot_streak: bool,
    pub consistent: bool,
    pub promising: bool,
    pub versatile: bool,
}

impl PerformanceStats {
    /// Compose full stats for one (card, position) history. `versatile` is a
    /// card-level property and identical across all of that card's positions.
    pub fn from_history(history: &[Rating], versatile: bool) -> Self {
        let summary = compute_stats(history);
        let flags = classify_performance(history, RECENT_WINDOW);
        Self {
            average: summary.average,
            matches: summary.matches,
            std_dev: summary.std_dev,
            hot_streak: flags.hot_streak,
            consistent: flags.consistent,
            promising: flags.promising,
            versatile,
        }
    }
}

/// Arithmetic mean and population standard deviation of a history.
///
/// Population (divide by n) rather than sample: these numbers describe the
/// recorded matches themselves, they do not estimate anything beyond them.
/// Empty input yields an all-zero summary; total over all finite inputs.
pub fn compute_stats(history: &[Rating]) -> RatingSummary {
    if history.is_empty() {
        return RatingSummary::default();
    }

    let matches = history.len();
    let sum: f32 = history.iter().map(|r| r.value).sum();
    let average = sum / matches as f32;

    let variance: f32 =
        history.iter().map(|r| (r.value - average).powi(2)).sum::<f32>() / matches as f32;

    RatingSummary { average, matches, std_dev: variance.sqrt() }
}

/// Flag a history as hot streak / consistent / promising.
///
/// Hot streak compares the trailing `recent_window` ratings against the
/// overall average, with a sample-size floor so two lucky matches do not
/// light the flag. Promising is independent of the other two: it simply
/// marks a small sample, which the substitute pass uses to give unproven
/// cards minutes.
pub fn classify_performance(history: &[Rating], recent_window: usize) -> PerformanceFlags {
    let summary = compute_stats(history);

    let hot_streak = summary.matches >= HOT_STREAK_MIN_MATCHES && {
        let tail = &history[history.len().saturating_sub(recent_window)..];
        let recent = compute_stats(tail);
        recent.average > summary.average + HOT_STREAK_MARGIN
    };

    let consistent =
        summary.matches >= CONSISTENT_MIN_MATCHES && summary.std_dev < CONSISTENT_MAX_STD_DEV;

    let promising = summary.matches < PROMISING_MAX_MATCHES;

    PerformanceFlags { hot_streak, consistent, promising }
}

/// Card-level versatility: strong (average >= 7.5) in at least three
/// positions with recorded history.
pub fn classify_versatility(card: &Card) -> bool {
    let strong = card
        .rated_positions()
        .filter(|(_, history)| compute_stats(history).average >= VERSATILE_MIN_AVERAGE)
        .count();
    strong >= VERSATILE_MIN_POSITIONS
}
