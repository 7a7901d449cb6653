//! Storage collaborator boundary.
//!
//! The engine never talks to storage; the tournament runner fetches teams
//! and rosters through this trait and writes results back through it.
//! Production deployments put the hosted database behind it; tests and the
//! CLI use [`MemoryStore`].

use crate::error::{CoreError, Result};
use crate::models::{GoalEvent, MatchResult, Player, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One row of the top-scorer table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorerEntry {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub goals: u32,
}

/// A persisted match outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredMatch {
    pub match_id: Uuid,
    pub result: MatchResult,
    pub played_at: DateTime<Utc>,
}

/// Team/roster retrieval and result persistence.
///
/// Failures surface as [`CoreError`] values and are propagated to the caller
/// unchanged; the core performs no retries.
pub trait TournamentStore {
    /// Team record without its roster.
    fn fetch_team(&self, team_id: Uuid) -> Result<Team>;

    /// Roster for a known team; may be empty.
    fn fetch_roster(&self, team_id: Uuid) -> Result<Vec<Player>>;

    /// Persist a resolved match and its goal events.
    fn record_match(&mut self, match_id: Uuid, result: &MatchResult) -> Result<()>;

    /// Goal tally per player across all recorded matches, most goals first.
    fn top_scorers(&self, limit: usize) -> Vec<ScorerEntry>;
}

/// In-memory store for tests and the CLI tournament runner.
#[derive(Debug, Default)]
pub struct MemoryStore {
    teams: HashMap<Uuid, Team>,
    matches: HashMap<Uuid, StoredMatch>,
    goal_events: Vec<GoalEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with registered teams (rosters included).
    pub fn with_teams(teams: Vec<Team>) -> Self {
        let mut store = Self::new();
        for team in teams {
            store.insert_team(team);
        }
        store
    }

    pub fn insert_team(&mut self, team: Team) {
        self.teams.insert(team.id, team);
    }

    pub fn stored_match(&self, match_id: Uuid) -> Result<&StoredMatch> {
        self.matches.get(&match_id).ok_or(CoreError::MatchNotFound(match_id))
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

impl TournamentStore for MemoryStore {
    fn fetch_team(&self, team_id: Uuid) -> Result<Team> {
        let team = self.teams.get(&team_id).ok_or(CoreError::TeamNotFound(team_id))?;
        // Roster travels separately, mirroring the two-query backend shape
        Ok(Team { players: Vec::new(), ..team.clone() })
    }

    fn fetch_roster(&self, team_id: Uuid) -> Result<Vec<Player>> {
        let team = self.teams.get(&team_id).ok_or(CoreError::RosterNotFound(team_id))?;
        Ok(team.players.clone())
    }

    fn record_match(&mut self, match_id: Uuid, result: &MatchResult) -> Result<()> {
        self.goal_events.extend(result.goals.iter().cloned());
        self.matches.insert(
            match_id,
            StoredMatch { match_id, result: result.clone(), played_at: Utc::now() },
        );
        Ok(())
    }

    fn top_scorers(&self, limit: usize) -> Vec<ScorerEntry> {
        let mut tally: HashMap<Uuid, ScorerEntry> = HashMap::new();
        for goal in &self.goal_events {
            tally
                .entry(goal.player_id)
                .or_insert_with(|| ScorerEntry {
                    player_id: goal.player_id,
                    player_name: goal.player_name.clone(),
                    team_id: goal.team_id,
                    goals: 0,
                })
                .goals += 1;
        }
        let mut entries: Vec<ScorerEntry> = tally.into_values().collect();
        // Stable order for equal tallies so output does not jitter
        entries.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.player_name.cmp(&b.player_name)));
        entries.truncate(limit);
        entries
    }
}
