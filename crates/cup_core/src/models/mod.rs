pub mod events;
pub mod match_result;
pub mod player;
pub mod team;

pub use events::{GoalEvent, EXTRA_TIME_MINUTES, REGULATION_MINUTES};
pub use match_result::{MatchResult, PenaltyShootout};
pub use player::{Player, Position};
pub use team::Team;
