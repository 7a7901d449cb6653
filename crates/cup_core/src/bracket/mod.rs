//! Single-elimination bracket for an 8-team knockout cup.
//!
//! Four quarter-finals feed two semi-finals feed one final. Teams are drawn
//! into the quarter-finals by shuffle; later rounds start empty and fill as
//! winners advance.

use crate::error::{CoreError, Result};
use crate::models::{MatchResult, Team};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const BRACKET_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    QuarterFinal,
    SemiFinal,
    Final,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::QuarterFinal => "Quarter-final",
            Stage::SemiFinal => "Semi-final",
            Stage::Final => "Final",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Stage::QuarterFinal => "quarter_final",
            Stage::SemiFinal => "semi_final",
            Stage::Final => "final",
        }
    }
}

/// One fixture slot in the bracket. Later-round slots have no teams until
/// the feeding matches resolve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BracketMatch {
    pub id: Uuid,
    pub stage: Stage,
    pub team1_id: Option<Uuid>,
    pub team2_id: Option<Uuid>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub team1_score: u8,
    pub team2_score: u8,
    pub winner_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub played_at: Option<DateTime<Utc>>,
}

impl BracketMatch {
    fn empty(stage: Stage) -> Self {
        BracketMatch {
            id: Uuid::new_v4(),
            stage,
            team1_id: None,
            team2_id: None,
            team1_name: None,
            team2_name: None,
            team1_score: 0,
            team2_score: 0,
            winner_id: None,
            played_at: None,
        }
    }

    fn between(stage: Stage, team1: &Team, team2: &Team) -> Self {
        BracketMatch {
            team1_id: Some(team1.id),
            team2_id: Some(team2.id),
            team1_name: Some(team1.name.clone()),
            team2_name: Some(team2.name.clone()),
            ..BracketMatch::empty(stage)
        }
    }

    pub fn is_played(&self) -> bool {
        self.winner_id.is_some()
    }

    /// Name of the winning side, once played.
    pub fn winner_name(&self) -> Option<&str> {
        let winner = self.winner_id?;
        if self.team1_id == Some(winner) {
            self.team1_name.as_deref()
        } else {
            self.team2_name.as_deref()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentBracket {
    pub quarter_finals: Vec<BracketMatch>,
    pub semi_finals: Vec<BracketMatch>,
    pub final_match: BracketMatch,
}

impl TournamentBracket {
    /// Draw the bracket: shuffle the field, pair the first eight into
    /// quarter-finals, leave later rounds empty.
    pub fn generate<R: Rng>(teams: &[Team], rng: &mut R) -> Result<Self> {
        if teams.len() < BRACKET_SIZE {
            return Err(CoreError::NotEnoughTeams { needed: BRACKET_SIZE, found: teams.len() });
        }

        let mut drawn: Vec<&Team> = teams.iter().take(BRACKET_SIZE).collect();
        drawn.shuffle(rng);

        let quarter_finals = drawn
            .chunks(2)
            .map(|pair| BracketMatch::between(Stage::QuarterFinal, pair[0], pair[1]))
            .collect();

        Ok(TournamentBracket {
            quarter_finals,
            semi_finals: vec![
                BracketMatch::empty(Stage::SemiFinal),
                BracketMatch::empty(Stage::SemiFinal),
            ],
            final_match: BracketMatch::empty(Stage::Final),
        })
    }

    pub fn matches_for(&self, stage: Stage) -> &[BracketMatch] {
        match stage {
            Stage::QuarterFinal => &self.quarter_finals,
            Stage::SemiFinal => &self.semi_finals,
            Stage::Final => std::slice::from_ref(&self.final_match),
        }
    }

    fn match_mut(&mut self, stage: Stage, index: usize) -> Result<&mut BracketMatch> {
        let fixture = match stage {
            Stage::QuarterFinal => self.quarter_finals.get_mut(index),
            Stage::SemiFinal => self.semi_finals.get_mut(index),
            Stage::Final if index == 0 => Some(&mut self.final_match),
            Stage::Final => None,
        };
        fixture.ok_or(CoreError::IncompleteBracket { stage: stage.name(), index })
    }

    /// Record a resolved fixture and advance its winner into the next round.
    ///
    /// Quarter-final `i` feeds semi-final `i / 2` (slot `i % 2`); semi-final
    /// `i` feeds final slot `i`.
    pub fn record_result(
        &mut self,
        stage: Stage,
        index: usize,
        result: &MatchResult,
    ) -> Result<()> {
        let fixture = self.match_mut(stage, index)?;
        fixture.team1_score = result.team1_score;
        fixture.team2_score = result.team2_score;
        fixture.winner_id = Some(result.winner_id);
        fixture.played_at = Some(Utc::now());
        let winner_name = fixture.winner_name().map(str::to_string);

        let next = match stage {
            Stage::QuarterFinal => Some((Stage::SemiFinal, index / 2, index % 2)),
            Stage::SemiFinal => Some((Stage::Final, 0, index)),
            Stage::Final => None,
        };
        if let Some((next_stage, next_index, slot)) = next {
            let next_fixture = self.match_mut(next_stage, next_index)?;
            if slot == 0 {
                next_fixture.team1_id = Some(result.winner_id);
                next_fixture.team1_name = winner_name;
            } else {
                next_fixture.team2_id = Some(result.winner_id);
                next_fixture.team2_name = winner_name;
            }
        }
        Ok(())
    }

    /// Tournament champion, once the final has been played.
    pub fn champion(&self) -> Option<Uuid> {
        self.final_match.winner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn field(count: usize) -> Vec<Team> {
        (0..count).map(|i| Team::new(format!("Team {i}"), 70)).collect()
    }

    fn decisive_result(match_: &BracketMatch, first_wins: bool) -> MatchResult {
        let winner = if first_wins { match_.team1_id } else { match_.team2_id };
        MatchResult {
            team1_score: if first_wins { 2 } else { 0 },
            team2_score: if first_wins { 0 } else { 2 },
            goals: Vec::new(),
            winner_id: winner.unwrap(),
            penalty_shootout: None,
            commentary: None,
        }
    }

    #[test]
    fn generation_requires_eight_teams() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = TournamentBracket::generate(&field(7), &mut rng).unwrap_err();
        assert!(matches!(err, CoreError::NotEnoughTeams { needed: 8, found: 7 }));
    }

    #[test]
    fn generation_pairs_every_team_exactly_once() {
        let teams = field(8);
        let mut rng = StdRng::seed_from_u64(2);
        let bracket = TournamentBracket::generate(&teams, &mut rng).unwrap();

        assert_eq!(bracket.quarter_finals.len(), 4);
        assert_eq!(bracket.semi_finals.len(), 2);

        let mut seen = HashSet::new();
        for qf in &bracket.quarter_finals {
            assert_eq!(qf.stage, Stage::QuarterFinal);
            assert!(seen.insert(qf.team1_id.unwrap()));
            assert!(seen.insert(qf.team2_id.unwrap()));
        }
        assert_eq!(seen.len(), 8);

        for sf in &bracket.semi_finals {
            assert!(sf.team1_id.is_none());
            assert!(sf.team2_id.is_none());
        }
        assert!(bracket.final_match.team1_id.is_none());
    }

    #[test]
    fn only_the_first_eight_registered_teams_enter() {
        let teams = field(10);
        let mut rng = StdRng::seed_from_u64(3);
        let bracket = TournamentBracket::generate(&teams, &mut rng).unwrap();
        let entered: HashSet<Uuid> = bracket
            .quarter_finals
            .iter()
            .flat_map(|m| [m.team1_id.unwrap(), m.team2_id.unwrap()])
            .collect();
        assert!(!entered.contains(&teams[8].id));
        assert!(!entered.contains(&teams[9].id));
    }

    #[test]
    fn winners_advance_through_the_bracket() {
        let teams = field(8);
        let mut rng = StdRng::seed_from_u64(4);
        let mut bracket = TournamentBracket::generate(&teams, &mut rng).unwrap();

        for i in 0..4 {
            let result = decisive_result(&bracket.quarter_finals[i], true);
            bracket.record_result(Stage::QuarterFinal, i, &result).unwrap();
        }
        // QF winners land in the right semi-final slots
        assert_eq!(bracket.semi_finals[0].team1_id, bracket.quarter_finals[0].winner_id);
        assert_eq!(bracket.semi_finals[0].team2_id, bracket.quarter_finals[1].winner_id);
        assert_eq!(bracket.semi_finals[1].team1_id, bracket.quarter_finals[2].winner_id);
        assert_eq!(bracket.semi_finals[1].team2_id, bracket.quarter_finals[3].winner_id);
        assert!(bracket.semi_finals[0].team1_name.is_some());

        for i in 0..2 {
            let result = decisive_result(&bracket.semi_finals[i], false);
            bracket.record_result(Stage::SemiFinal, i, &result).unwrap();
        }
        assert_eq!(bracket.final_match.team1_id, bracket.semi_finals[0].winner_id);
        assert_eq!(bracket.final_match.team2_id, bracket.semi_finals[1].winner_id);
        assert!(bracket.champion().is_none());

        let result = decisive_result(&bracket.final_match, true);
        bracket.record_result(Stage::Final, 0, &result).unwrap();
        assert_eq!(bracket.champion(), bracket.final_match.team1_id);
    }

    #[test]
    fn out_of_range_fixture_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut bracket = TournamentBracket::generate(&field(8), &mut rng).unwrap();
        let result = decisive_result(&bracket.quarter_finals[0], true);
        let err = bracket.record_result(Stage::Final, 1, &result).unwrap_err();
        assert!(matches!(err, CoreError::IncompleteBracket { stage: "final", index: 1 }));
    }
}
