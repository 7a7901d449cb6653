use super::Player;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered team with its roster.
///
/// The simulation engine reads teams but never mutates them; the caller can
/// reuse the same `Team` for any number of simulations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    /// Aggregate team strength, 0..=100. Drives the per-minute goal model.
    pub rating: u8,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, rating: u8) -> Self {
        Team { id: Uuid::new_v4(), name: name.into(), rating, players: Vec::new() }
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_defaults_to_empty_on_deserialize() {
        let team: Team = serde_json::from_str(
            r#"{"id":"7f2c1a90-0000-0000-0000-000000000001","name":"Brazil","rating":88}"#,
        )
        .unwrap();
        assert_eq!(team.name, "Brazil");
        assert!(team.players.is_empty());
    }
}
