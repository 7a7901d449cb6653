//! # cup_core - Knockout-Cup Match Simulation Engine
//!
//! Core library for an 8-team single-elimination tournament: a stochastic
//! match engine turns two rated rosters into a minute-by-minute goal
//! timeline, a decisive result, and an optional commentary transcript.
//!
//! ## Features
//! - Injectable RNG: seeded runs are fully reproducible
//! - Goal model with rating and match-time factors, capped per minute
//! - Extra time and penalty-shootout resolution, always a winner
//! - Bracket draw and winner advancement for the 8-team knockout
//! - JSON API for embedding hosts

pub mod api;
pub mod bracket;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod tournament;

pub use api::{simulate_match_json, MatchRequest, MatchResponse};
pub use bracket::{BracketMatch, Stage, TournamentBracket, BRACKET_SIZE};
pub use engine::{commentary, MatchEngine};
pub use error::{CoreError, Result};
pub use models::{
    GoalEvent, MatchResult, PenaltyShootout, Player, Position, Team, EXTRA_TIME_MINUTES,
    REGULATION_MINUTES,
};
pub use store::{MemoryStore, ScorerEntry, StoredMatch, TournamentStore};
pub use tournament::TournamentRunner;
