//! Goal scorer selection.

use crate::models::{Player, Team};
use rand::Rng;

/// Pick the player credited with a goal.
///
/// Midfielders and attackers form the candidate pool, weighted by their
/// natural-position rating via cumulative-weight roulette. A team without
/// midfielders or attackers credits its first rostered player; an empty
/// roster yields `None` and the goal opportunity is discarded by the caller.
pub fn select_goal_scorer<'a, R: Rng>(team: &'a Team, rng: &mut R) -> Option<&'a Player> {
    if team.players.is_empty() {
        return None;
    }

    let pool: Vec<&Player> = team
        .players
        .iter()
        .filter(|p| p.natural_position.is_midfielder() || p.natural_position.is_attacker())
        .collect();

    if pool.is_empty() {
        return team.players.first();
    }

    let total_weight: f64 = pool.iter().map(|p| p.natural_rating() as f64).sum();
    let mut remaining = rng.gen::<f64>() * total_weight;
    for candidate in &pool {
        remaining -= candidate.natural_rating() as f64;
        if remaining <= 0.0 {
            return Some(candidate);
        }
    }

    // Unreachable under exact roulette math; guards against float rounding.
    pool.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn player(name: &str, position: Position, rating: u8) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: name.to_string(),
            natural_position: position,
            rating_gk: rating,
            rating_df: rating,
            rating_md: rating,
            rating_at: rating,
        }
    }

    #[test]
    fn empty_roster_yields_no_scorer() {
        let team = Team::new("Ghosts", 50);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_goal_scorer(&team, &mut rng).is_none());
    }

    #[test]
    fn team_without_forwards_credits_first_player() {
        let team = Team::new("Wall", 50).with_players(vec![
            player("Keeper", Position::Goalkeeper, 80),
            player("Stopper", Position::Defender, 75),
            player("Sweeper", Position::Defender, 90),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let scorer = select_goal_scorer(&team, &mut rng).unwrap();
            assert_eq!(scorer.name, "Keeper");
        }
    }

    #[test]
    fn roulette_favors_higher_rated_attackers() {
        let team = Team::new("Strikers", 70).with_players(vec![
            player("Star", Position::Attacker, 95),
            player("Squad", Position::Attacker, 5),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, u32> = HashMap::new();
        for _ in 0..2000 {
            let scorer = select_goal_scorer(&team, &mut rng).unwrap();
            *counts.entry(scorer.name.clone()).or_default() += 1;
        }
        let star = counts.get("Star").copied().unwrap_or(0);
        let squad = counts.get("Squad").copied().unwrap_or(0);
        // Expected split is 95:5; allow wide slack
        assert!(star > squad * 8, "star {star} vs squad {squad}");
    }

    #[test]
    fn goalkeeper_never_selected_when_pool_exists() {
        let team = Team::new("Mixed", 60).with_players(vec![
            player("Keeper", Position::Goalkeeper, 99),
            player("Mid", Position::Midfielder, 50),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let scorer = select_goal_scorer(&team, &mut rng).unwrap();
            assert_eq!(scorer.name, "Mid");
        }
    }
}
