//! Substitute priority tiers.
//!
//! The substitute pass prefers form and potential over raw average: a card
//! on a hot streak gets the bench spot before a steady veteran, and an
//! unproven card gets it before nobody. Tiers are an ordered table of named
//! predicates so a new tier is one more row, not new control flow.

use crate::stats::PerformanceStats;

/// One substitute tier: a label (used in logs) and its admission predicate.
pub type Tier = (&'static str, fn(&PerformanceStats) -> bool);

/// Tiers in scan order. The last tier admits everyone, so a substitute is
/// found whenever any eligible candidate remains.
pub const SUBSTITUTE_TIERS: [Tier; 4] = [
    ("hot-streak", hot_streak),
    ("early-career", early_career),
    ("unrated", unrated),
    ("remaining", remaining),
];

/// In form right now.
fn hot_streak(stats: &PerformanceStats) -> bool {
    stats.hot_streak
}

/// Some history, still a small sample.
fn early_career(stats: &PerformanceStats) -> bool {
    stats.promising && stats.matches > 0
}

/// No recorded ratings at all.
fn unrated(stats: &PerformanceStats) -> bool {
    stats.promising && stats.matches == 0
}

/// Everyone else.
fn remaining(_stats: &PerformanceStats) -> bool {
    true
}
