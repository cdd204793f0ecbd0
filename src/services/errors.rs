use thiserror::Error;

use crate::domain::repositories::StoreError;

/// Errors returned by [`TeamService`](super::TeamService) operations
///
/// Every check runs before any write, so an error always means the store
/// was left as it was.
#[derive(Debug, Error)]
pub enum TeamServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Team not found: {0}")]
    NotFound(String),

    #[error("A team named '{0}' already exists")]
    DuplicateName(String),

    #[error("Caller is not the owner of team {team_id}")]
    Unauthorized { team_id: String },

    #[error("Player '{player_name}' not found in team {team_id}")]
    PlayerNotFound {
        team_id: String,
        player_name: String,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl TeamServiceError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            TeamServiceError::InvalidInput(_) => "invalid_input",
            TeamServiceError::NotFound(_) => "not_found",
            TeamServiceError::DuplicateName(_) => "duplicate_name",
            TeamServiceError::Unauthorized { .. } => "unauthorized",
            TeamServiceError::PlayerNotFound { .. } => "player_not_found",
            TeamServiceError::Storage(_) => "storage_error",
        }
    }
}

pub type TeamServiceResult<T> = Result<T, TeamServiceError>;
