//! # eleven_core - Deterministic Team-Selection Engine
//!
//! This library is the selection core of a roster-tracking application:
//! players own rating cards, cards carry per-position match-rating
//! histories, and the engine turns a pool snapshot plus a formation into an
//! ideal eleven with substitutes.
//!
//! ## Features
//! - 100% deterministic selection (same snapshot = byte-identical output)
//! - Per-position performance statistics and signals (hot streak,
//!   consistency, promise, versatility)
//! - Two-pass greedy assignment with style preferences and player-level
//!   uniqueness
//! - Total over degenerate input: vacancies become placeholders, never
//!   errors
//! - JSON API for easy host integration

pub mod api;
pub mod error;
pub mod models;
pub mod selection;
pub mod stats;

// Re-export the main entry points
pub use api::{generate_ideal_team_json, TeamRequest, TeamResponse};
pub use error::{Result, TeamError};
pub use selection::generate_ideal_team;

// Re-export the model types hosts work with
pub use models::{
    AssignedPlayer, Card, Formation, FormationSlot, IdealTeamSlot, PlayStyle, Player, Position,
    Rating, SlotRole, FORMATION_SIZE,
};
pub use stats::{
    classify_performance, classify_versatility, compute_stats, PerformanceFlags, PerformanceStats,
    RatingSummary,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
