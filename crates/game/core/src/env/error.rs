//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardId, EnemyId};

/// Errors that occur when accessing content oracles.
///
/// A missing oracle means the host wired the engine incorrectly; a missing
/// definition for an id that already passed validation means the content
/// changed underneath a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CardOracle is not available in the environment.
    #[error("CardOracle not available")]
    CardsNotAvailable,

    /// EnemyOracle is not available in the environment.
    #[error("EnemyOracle not available")]
    EnemiesNotAvailable,

    /// Card definition was not found.
    #[error("card definition '{0}' not found")]
    CardNotFound(CardId),

    /// Enemy definition was not found.
    #[error("enemy definition '{0}' not found")]
    EnemyNotFound(EnemyId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            CardsNotAvailable | EnemiesNotAvailable => ErrorSeverity::Fatal,
            CardNotFound(_) | EnemyNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CardsNotAvailable => "ORACLE_CARDS_NOT_AVAILABLE",
            EnemiesNotAvailable => "ORACLE_ENEMIES_NOT_AVAILABLE",
            CardNotFound(_) => "ORACLE_CARD_NOT_FOUND",
            EnemyNotFound(_) => "ORACLE_ENEMY_NOT_FOUND",
        }
    }
}
