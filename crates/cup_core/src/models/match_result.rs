//! Match result data structures.
//!
//! These are the sink of the simulation pipeline: the engine fills them in,
//! the storage collaborator persists them, the commentary formatter and UI
//! read them.

use super::events::GoalEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a penalty shootout.
///
/// Conversions are folded into the final team scores (matching how results
/// are persisted), but the raw tallies are kept here so consumers can show
/// "4-2 on penalties" style summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PenaltyShootout {
    pub kicks_taken_team1: u8,
    pub kicks_taken_team2: u8,
    pub converted_team1: u8,
    pub converted_team2: u8,
}

/// Complete outcome of one simulated fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub team1_score: u8,
    pub team2_score: u8,
    /// Goals in minute-ascending order. Shootout kicks are not goal events.
    pub goals: Vec<GoalEvent>,
    /// Always set: a knockout fixture cannot end without a winner.
    pub winner_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_shootout: Option<PenaltyShootout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl MatchResult {
    pub fn went_to_penalties(&self) -> bool {
        self.penalty_shootout.is_some()
    }

    /// Goals scored by the given team during play (shootout excluded).
    pub fn goals_for(&self, team_id: Uuid) -> usize {
        self.goals.iter().filter(|g| g.team_id == team_id).count()
    }
}
