pub mod team_json;

pub use team_json::{generate_ideal_team_json, TeamRequest, TeamResponse};
