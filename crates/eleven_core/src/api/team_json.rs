//! JSON API for team selection.
//!
//! This is the integration surface for hosts that hold player and formation
//! documents as JSON (the roster app syncs them from its document store and
//! hands the engine materialized snapshots). The DTOs carry a
//! `schema_version` and derive `JsonSchema` so hosts can generate bindings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::error::{Result, TeamError};
use crate::models::{Formation, IdealTeamSlot, Player, FORMATION_SIZE};
use crate::selection::generate_ideal_team;
use crate::SCHEMA_VERSION;

/// Team selection request.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TeamRequest {
    pub schema_version: u8,
    pub players: Vec<Player>,
    pub formation: Formation,
    #[serde(default)]
    pub discarded_card_ids: HashSet<String>,
}

/// Team selection response. Slots mirror the request formation's order.
#[derive(Debug, Serialize, JsonSchema)]
pub struct TeamResponse {
    pub schema_version: u8,
    pub formation: String,
    pub slots: Vec<IdealTeamSlot>,
}

/// Run a full selection from a JSON request, returning the JSON response.
///
/// Malformed JSON and unknown schema versions are errors. Shape oddities
/// (slot count other than 11) are only logged: the engine is total and
/// mirrors whatever shape the external CRUD layer let through.
pub fn generate_ideal_team_json(request_json: &str) -> Result<String> {
    let request: TeamRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(TeamError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    info!(
        players = request.players.len(),
        formation = %request.formation.name,
        discarded = request.discarded_card_ids.len(),
        "processing team selection request"
    );

    if request.formation.slots.len() != FORMATION_SIZE {
        warn!(
            slots = request.formation.slots.len(),
            expected = FORMATION_SIZE,
            "formation slot count is off; output will mirror it"
        );
    }

    let slots =
        generate_ideal_team(&request.players, &request.formation, &request.discarded_card_ids);

    let response = TeamResponse {
        schema_version: SCHEMA_VERSION,
        formation: request.formation.name,
        slots,
    };

    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_with(players: serde_json::Value) -> String {
        json!({
            "schema_version": 1,
            "players": players,
            "formation": {
                "name": "test",
                "slots": [{ "position": "ST", "styles": [] }]
            }
        })
        .to_string()
    }

    #[test]
    fn test_round_trip_selects_starter() {
        let request = request_with(json!([{
            "id": "p1",
            "name": "Ada",
            "cards": [{
                "id": "c1",
                "name": "Season 1",
                "style": "Poacher",
                "ratings": { "ST": [{ "value": 8.0 }, { "value": 9.0 }] }
            }]
        }]));

        let response = generate_ideal_team_json(&request).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["slots"][0]["starter"]["player_id"], "p1");
        assert_eq!(parsed["slots"][0]["starter"]["stats"]["matches"], 2);
        assert_eq!(parsed["slots"][0]["substitute"]["placeholder"], true);
    }

    #[test]
    fn test_discard_field_defaults_to_empty() {
        let request = request_with(json!([]));
        let response = generate_ideal_team_json(&request).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["slots"][0]["starter"]["player_id"], "vacant-starter-0");
    }

    #[test]
    fn test_unknown_schema_version_is_rejected() {
        let request = json!({
            "schema_version": 9,
            "players": [],
            "formation": { "name": "test", "slots": [] }
        })
        .to_string();

        let err = generate_ideal_team_json(&request).unwrap_err();
        assert!(matches!(err, TeamError::SchemaVersion { found: 9, expected: 1 }));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(generate_ideal_team_json("{not json").is_err());
    }
}
