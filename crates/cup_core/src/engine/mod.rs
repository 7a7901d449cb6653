//! Match simulation engine.
//!
//! Minute-stepped stochastic simulation: 90 regulation minutes, extra time
//! if level, then a penalty shootout. Each call is pure computation over the
//! two rosters and the injected RNG; the engine holds no state between
//! matches and never mutates caller data.

pub mod commentary;
pub mod probability;
pub mod scorer;


use crate::models::{
    GoalEvent, MatchResult, PenaltyShootout, Team, EXTRA_TIME_MINUTES, REGULATION_MINUTES,
};
use probability::{goal_probability, EXTRA_TIME_SCALE, PENALTY_CONVERSION, PENALTY_ROUNDS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scorer::select_goal_scorer;
use tracing::debug;

/// The outcome generator.
///
/// Generic over its random source so tests can inject deterministic
/// sequences; production callers use [`MatchEngine::from_seed`] or
/// [`MatchEngine::from_entropy`].
pub struct MatchEngine<R: Rng> {
    rng: R,
}

impl MatchEngine<ChaCha8Rng> {
    /// Seeded engine with a stream-stable RNG: same seed, same result,
    /// across platforms and releases.
    pub fn from_seed(seed: u64) -> Self {
        MatchEngine { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl MatchEngine<StdRng> {
    pub fn from_entropy() -> Self {
        MatchEngine { rng: StdRng::from_entropy() }
    }
}

impl<R: Rng> MatchEngine<R> {
    pub fn new(rng: R) -> Self {
        MatchEngine { rng }
    }

    /// Simulate one fixture to a decisive result.
    ///
    /// Regulation runs the full 90 minutes. If level, extra time runs minute
    /// by minute and stops the instant scores diverge; if still level after
    /// 120, a 5-round penalty shootout (with sudden-death early exit)
    /// settles it. Shootout conversions are folded into the final scores
    /// but do not appear in the goal timeline.
    pub fn simulate(&mut self, team1: &Team, team2: &Team, include_commentary: bool) -> MatchResult {
        let mut goals: Vec<GoalEvent> = Vec::new();
        let mut team1_score: u8 = 0;
        let mut team2_score: u8 = 0;

        for minute in 1..=REGULATION_MINUTES {
            let p1 = goal_probability(team1.rating, team2.rating, minute);
            let p2 = goal_probability(team2.rating, team1.rating, minute);
            self.try_goal(team1, minute, p1, &mut team1_score, &mut goals);
            self.try_goal(team2, minute, p2, &mut team2_score, &mut goals);
        }

        let mut penalty_shootout = None;
        let winner_id = if team1_score != team2_score {
            if team1_score > team2_score {
                team1.id
            } else {
                team2.id
            }
        } else {
            let extra = self.play_extra_time(team1, team2, &mut team1_score, &mut team2_score, &mut goals);
            match extra {
                Some(winner) => winner,
                None => {
                    let (winner, shootout) =
                        self.play_shootout(team1, team2, &mut team1_score, &mut team2_score);
                    penalty_shootout = Some(shootout);
                    winner
                }
            }
        };

        debug!(
            team1 = %team1.name,
            team2 = %team2.name,
            score = %format!("{team1_score}-{team2_score}"),
            penalties = penalty_shootout.is_some(),
            "match resolved"
        );

        let commentary = include_commentary
            .then(|| commentary::render(team1, team2, &goals, team1_score, team2_score));

        MatchResult { team1_score, team2_score, goals, winner_id, penalty_shootout, commentary }
    }

    /// One Bernoulli trial for one team in one minute. A success with an
    /// empty roster is silently discarded: no scorer, no goal.
    fn try_goal(
        &mut self,
        team: &Team,
        minute: u8,
        prob: f64,
        score: &mut u8,
        goals: &mut Vec<GoalEvent>,
    ) {
        if self.rng.gen::<f64>() >= prob {
            return;
        }
        if let Some(scorer) = select_goal_scorer(team, &mut self.rng) {
            *score += 1;
            goals.push(GoalEvent {
                player_id: scorer.id,
                player_name: scorer.name.clone(),
                team_id: team.id,
                minute,
            });
        }
    }

    /// Minutes 91..=120 with the model scaled down; returns the winner the
    /// moment scores diverge, `None` if still level after 120.
    fn play_extra_time(
        &mut self,
        team1: &Team,
        team2: &Team,
        team1_score: &mut u8,
        team2_score: &mut u8,
        goals: &mut Vec<GoalEvent>,
    ) -> Option<uuid::Uuid> {
        let full_time = REGULATION_MINUTES + EXTRA_TIME_MINUTES;
        for minute in (REGULATION_MINUTES + 1)..=full_time {
            let p1 = goal_probability(team1.rating, team2.rating, minute) * EXTRA_TIME_SCALE;
            let p2 = goal_probability(team2.rating, team1.rating, minute) * EXTRA_TIME_SCALE;
            self.try_goal(team1, minute, p1, team1_score, goals);
            self.try_goal(team2, minute, p2, team2_score, goals);

            if team1_score != team2_score {
                return Some(if team1_score > team2_score { team1.id } else { team2.id });
            }
        }
        None
    }

    /// Five shootout rounds at a fixed conversion rate, stopping early once
    /// the trailing side cannot catch up. Conversions increment the team
    /// scores directly; no goal events are emitted for kicks.
    ///
    /// If all five rounds finish level the tie breaks toward the higher
    /// score, defaulting to team1 when even. Structurally asymmetric, kept
    /// for compatibility with recorded results.
    fn play_shootout(
        &mut self,
        team1: &Team,
        team2: &Team,
        team1_score: &mut u8,
        team2_score: &mut u8,
    ) -> (uuid::Uuid, PenaltyShootout) {
        let mut shootout = PenaltyShootout {
            kicks_taken_team1: 0,
            kicks_taken_team2: 0,
            converted_team1: 0,
            converted_team2: 0,
        };

        for round in 0..PENALTY_ROUNDS {
            let team1_converts = self.rng.gen::<f64>() < PENALTY_CONVERSION;
            let team2_converts = self.rng.gen::<f64>() < PENALTY_CONVERSION;
            shootout.kicks_taken_team1 += 1;
            shootout.kicks_taken_team2 += 1;
            if team1_converts {
                shootout.converted_team1 += 1;
                *team1_score += 1;
            }
            if team2_converts {
                shootout.converted_team2 += 1;
                *team2_score += 1;
            }

            // Sudden death: lead bigger than the rounds left cannot be caught
            let remaining = PENALTY_ROUNDS - round - 1;
            if *team1_score > *team2_score + remaining {
                return (team1.id, shootout);
            }
            if *team2_score > *team1_score + remaining {
                return (team2.id, shootout);
            }
        }

        let winner = if *team1_score >= *team2_score { team1.id } else { team2.id };
        (winner, shootout)
    }
}
