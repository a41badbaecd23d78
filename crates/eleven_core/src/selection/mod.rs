pub mod candidate;
pub mod selector;
pub mod tiers;


pub use candidate::{build_candidates, Candidate};
pub use selector::generate_ideal_team;
