//! JSON API surface.
//!
//! String-in/string-out entry point for embedding hosts (web handler, game
//! shell) that do not want to depend on the crate's types: a request carries
//! a seed and both rosters, the response carries the full match outcome.
//! Same seed, same response.

use crate::engine::MatchEngine;
use crate::error::{CoreError, Result};
use crate::models::{GoalEvent, PenaltyShootout, Player, Position, Team};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub team1: TeamData,
    pub team2: TeamData,
    #[serde(default)]
    pub include_commentary: bool,
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    /// Stable id; omitted ids are generated per call.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub players: Vec<PlayerData>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    /// Position code: "GK" | "DF" | "MD" | "AT"
    pub position: Position,
    pub rating_gk: u8,
    pub rating_df: u8,
    pub rating_md: u8,
    pub rating_at: u8,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub team1_score: u8,
    pub team2_score: u8,
    pub winner_id: Uuid,
    pub goals: Vec<GoalEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_shootout: Option<PenaltyShootout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl TeamData {
    /// Materialize a [`Team`], generating ids where the request omitted them.
    pub fn into_team(self) -> Team {
        let players = self
            .players
            .into_iter()
            .map(|p| Player {
                id: p.id.unwrap_or_else(Uuid::new_v4),
                name: p.name,
                natural_position: p.position,
                rating_gk: p.rating_gk,
                rating_df: p.rating_df,
                rating_md: p.rating_md,
                rating_at: p.rating_at,
            })
            .collect();
        Team {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            rating: self.rating,
            players,
        }
    }
}

/// Parse a [`MatchRequest`], run the simulation, serialize the response.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchema(request.schema_version));
    }

    let seed = request.seed;
    let team1 = request.team1.into_team();
    let team2 = request.team2.into_team();

    let mut engine = MatchEngine::from_seed(seed);
    let result = engine.simulate(&team1, &team2, request.include_commentary);

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        seed,
        team1_id: team1.id,
        team2_id: team2.id,
        team1_score: result.team1_score,
        team2_score: result.team2_score,
        winner_id: result.winner_id,
        goals: result.goals,
        penalty_shootout: result.penalty_shootout,
        commentary: result.commentary,
    };
    Ok(serde_json::to_string(&response)?)
}
