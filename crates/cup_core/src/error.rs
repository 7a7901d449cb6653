use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("team not found: {0}")]
    TeamNotFound(Uuid),

    #[error("roster not found for team: {0}")]
    RosterNotFound(Uuid),

    #[error("match not found: {0}")]
    MatchNotFound(Uuid),

    #[error("not enough teams to generate bracket: need {needed}, have {found}")]
    NotEnoughTeams { needed: usize, found: usize },

    #[error("bracket slot not filled: {stage} match {index}")]
    IncompleteBracket { stage: &'static str, index: usize },

    #[error("storage write failed: {0}")]
    WriteFailed(String),

    #[error("unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
