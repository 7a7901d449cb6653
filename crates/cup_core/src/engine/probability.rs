//! Per-minute goal probability model.
//!
//! Each simulated minute runs one Bernoulli trial per team against this
//! probability. The two trials are independent; both teams may score in the
//! same minute.

/// Chance of a goal per minute for two evenly rated teams at kick-off pace.
pub const BASE_GOAL_PROBABILITY: f64 = 0.02;
/// Hard ceiling on the per-minute goal probability.
pub const MAX_GOAL_PROBABILITY: f64 = 0.15;
/// Scale applied to the model during extra time (tired legs, cagey play).
pub const EXTRA_TIME_SCALE: f64 = 0.7;
/// Fixed conversion probability for a penalty-shootout kick.
pub const PENALTY_CONVERSION: f64 = 0.75;
/// Number of regular shootout rounds.
pub const PENALTY_ROUNDS: u8 = 5;

/// Probability that `own` scores against `opponent` in the given absolute
/// match minute (1-indexed, not reset for extra time).
///
/// The rating factor is clamped to [0.5, 1.5] so a mismatch can at most
/// halve or half-again the base rate; the time factor ramps from 0.6 up to
/// 1.2 as the match opens up. The product is capped at
/// [`MAX_GOAL_PROBABILITY`].
pub fn goal_probability(own_rating: u8, opponent_rating: u8, elapsed_minutes: u8) -> f64 {
    let rating_diff = own_rating as f64 - opponent_rating as f64;
    let rating_factor = (1.0 + rating_diff / 100.0).clamp(0.5, 1.5);
    let time_factor = (0.6 + elapsed_minutes as f64 / 150.0).min(1.2);
    (BASE_GOAL_PROBABILITY * rating_factor * time_factor).min(MAX_GOAL_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn even_teams_at_kickoff() {
        // 1.0 rating factor, 0.6 + 1/150 time factor
        let p = goal_probability(70, 70, 1);
        assert!((p - 0.02 * (0.6 + 1.0 / 150.0)).abs() < 1e-12);
    }

    #[test]
    fn rating_factor_clamps_at_extremes() {
        // 100 vs 0 clamps to 1.5, 0 vs 100 clamps to 0.5
        let strong = goal_probability(100, 0, 90);
        let weak = goal_probability(0, 100, 90);
        assert!((strong / weak - 3.0).abs() < 1e-9);
    }

    #[test]
    fn time_factor_saturates_at_minute_90() {
        // 0.6 + 90/150 = 1.2 exactly; later minutes add nothing
        assert_eq!(goal_probability(70, 70, 90), goal_probability(70, 70, 120));
    }

    proptest! {
        // Clamp invariant: the model never leaves [0, 0.15] for any input.
        #[test]
        fn probability_stays_in_range(own in 0u8..=100, opp in 0u8..=100, minute in 1u8..=120) {
            let p = goal_probability(own, opp, minute);
            prop_assert!(p >= 0.0);
            prop_assert!(p <= MAX_GOAL_PROBABILITY);
        }
    }
}
