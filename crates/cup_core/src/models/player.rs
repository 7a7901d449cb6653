use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Player data for the match simulation engine.
///
/// Carries one rating per position; scorer selection weighs a player by the
/// rating of their natural position. Ratings are 0..=100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub natural_position: Position,
    pub rating_gk: u8,
    pub rating_df: u8,
    pub rating_md: u8,
    pub rating_at: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MD")]
    Midfielder,
    #[serde(rename = "AT")]
    Attacker,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, Position::Defender)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, Position::Midfielder)
    }

    pub fn is_attacker(&self) -> bool {
        matches!(self, Position::Attacker)
    }

    /// Short code as stored by the roster backend ("GK"/"DF"/"MD"/"AT").
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MD",
            Position::Attacker => "AT",
        }
    }
}

impl Player {
    /// Rating of this player at the given position.
    pub fn position_rating(&self, position: Position) -> u8 {
        match position {
            Position::Goalkeeper => self.rating_gk,
            Position::Defender => self.rating_df,
            Position::Midfielder => self.rating_md,
            Position::Attacker => self.rating_at,
        }
    }

    /// Rating at the player's natural position; this is the scorer-selection
    /// roulette weight.
    pub fn natural_rating(&self) -> u8 {
        self.position_rating(self.natural_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(position: Position) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: "Test Player".to_string(),
            natural_position: position,
            rating_gk: 10,
            rating_df: 20,
            rating_md: 30,
            rating_at: 40,
        }
    }

    #[test]
    fn position_rating_maps_to_the_right_field() {
        let p = player(Position::Midfielder);
        assert_eq!(p.position_rating(Position::Goalkeeper), 10);
        assert_eq!(p.position_rating(Position::Defender), 20);
        assert_eq!(p.position_rating(Position::Midfielder), 30);
        assert_eq!(p.position_rating(Position::Attacker), 40);
        assert_eq!(p.natural_rating(), 30);
    }

    #[test]
    fn position_serde_uses_backend_codes() {
        let json = serde_json::to_string(&Position::Attacker).unwrap();
        assert_eq!(json, "\"AT\"");
        let back: Position = serde_json::from_str("\"GK\"").unwrap();
        assert_eq!(back, Position::Goalkeeper);
    }
}
