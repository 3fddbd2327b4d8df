//! State management errors.
//!
//! Errors raised while building a game state or when a finished transition
//! leaves the state violating one of its invariants.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EnemyInstanceId, PlayerId};

/// Errors that occur while building the initial game state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// No players were seated.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// More players than the table supports.
    #[error("too many players (max: {max}, requested: {requested})")]
    TooManyPlayers { max: usize, requested: usize },

    /// The same player id was seated twice.
    #[error("player {0} is seated twice")]
    DuplicatePlayer(PlayerId),

    /// Configured armor must be positive.
    #[error("base armor must be positive")]
    ZeroArmor,

    /// Configured hand limit must be positive.
    #[error("hand limit must be positive")]
    ZeroHandLimit,
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            NoPlayers => "INIT_NO_PLAYERS",
            TooManyPlayers { .. } => "INIT_TOO_MANY_PLAYERS",
            DuplicatePlayer(_) => "INIT_DUPLICATE_PLAYER",
            ZeroArmor => "INIT_ZERO_ARMOR",
            ZeroHandLimit => "INIT_ZERO_HAND_LIMIT",
        }
    }
}

/// A state invariant that no completed transition may break.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    /// A knocked-out player holds a non-wound card.
    #[error("player {0} is knocked out but holds non-wound cards")]
    KnockedOutWithCards(PlayerId),

    /// Armor and hand limit must stay positive.
    #[error("player {0} has non-positive armor or hand limit")]
    NonPositiveLimits(PlayerId),

    /// Two enemies in the same combat share an instance id.
    #[error("enemy instance {0} appears more than once")]
    DuplicateEnemyInstance(EnemyInstanceId),

    /// The turn pointer does not reference a seated player.
    #[error("current player index {index} is out of range ({players} players)")]
    CurrentPlayerOutOfRange { index: usize, players: usize },

    /// Enemy instance ids are exhausted.
    #[error("enemy instance id overflow")]
    EnemyInstanceIdOverflow,
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use InvariantViolation::*;
        match self {
            KnockedOutWithCards(_) => "STATE_KNOCKED_OUT_WITH_CARDS",
            NonPositiveLimits(_) => "STATE_NON_POSITIVE_LIMITS",
            DuplicateEnemyInstance(_) => "STATE_DUPLICATE_ENEMY_INSTANCE",
            CurrentPlayerOutOfRange { .. } => "STATE_CURRENT_PLAYER_OUT_OF_RANGE",
            EnemyInstanceIdOverflow => "STATE_ENEMY_INSTANCE_ID_OVERFLOW",
        }
    }
}
