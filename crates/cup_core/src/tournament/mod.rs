//! Tournament runner.
//!
//! Composes the storage collaborator, the outcome generator, and the bracket:
//! fetch both teams and rosters, simulate, persist, advance the winner. Store
//! failures pass through unchanged.

use crate::bracket::{Stage, TournamentBracket};
use crate::engine::MatchEngine;
use crate::error::{CoreError, Result};
use crate::models::{MatchResult, Team};
use crate::store::TournamentStore;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

pub struct TournamentRunner<'a, S: TournamentStore, R: Rng> {
    store: &'a mut S,
    engine: MatchEngine<R>,
}

impl<'a, S: TournamentStore, R: Rng> TournamentRunner<'a, S, R> {
    pub fn new(store: &'a mut S, engine: MatchEngine<R>) -> Self {
        TournamentRunner { store, engine }
    }

    fn load_team(&self, team_id: Uuid) -> Result<Team> {
        let team = self.store.fetch_team(team_id)?;
        let roster = self.store.fetch_roster(team_id)?;
        Ok(team.with_players(roster))
    }

    /// Resolve one fixture: fetch, simulate, persist.
    pub fn run_match(
        &mut self,
        match_id: Uuid,
        team1_id: Uuid,
        team2_id: Uuid,
        include_commentary: bool,
    ) -> Result<MatchResult> {
        let team1 = self.load_team(team1_id)?;
        let team2 = self.load_team(team2_id)?;

        let result = self.engine.simulate(&team1, &team2, include_commentary);
        self.store.record_match(match_id, &result)?;

        info!(
            team1 = %team1.name,
            team2 = %team2.name,
            score = %format!("{}-{}", result.team1_score, result.team2_score),
            "fixture resolved"
        );
        Ok(result)
    }

    /// Resolve every fixture of one stage, advancing winners in the bracket.
    pub fn run_stage(
        &mut self,
        bracket: &mut TournamentBracket,
        stage: Stage,
        include_commentary: bool,
    ) -> Result<Vec<MatchResult>> {
        let fixtures: Vec<(Uuid, Option<Uuid>, Option<Uuid>)> = bracket
            .matches_for(stage)
            .iter()
            .map(|m| (m.id, m.team1_id, m.team2_id))
            .collect();

        let mut results = Vec::with_capacity(fixtures.len());
        for (index, (match_id, team1_id, team2_id)) in fixtures.into_iter().enumerate() {
            let (team1_id, team2_id) = match (team1_id, team2_id) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(CoreError::IncompleteBracket { stage: stage.label(), index }),
            };
            let result = self.run_match(match_id, team1_id, team2_id, include_commentary)?;
            bracket.record_result(stage, index, &result)?;
            results.push(result);
        }
        Ok(results)
    }

    /// Run the whole knockout, quarter-finals through the final, and return
    /// the champion's id.
    pub fn run_tournament(
        &mut self,
        bracket: &mut TournamentBracket,
        include_commentary: bool,
    ) -> Result<Uuid> {
        for stage in [Stage::QuarterFinal, Stage::SemiFinal, Stage::Final] {
            self.run_stage(bracket, stage, include_commentary)?;
        }
        bracket
            .champion()
            .ok_or(CoreError::IncompleteBracket { stage: "final", index: 0 })
    }
}
