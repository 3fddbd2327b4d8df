//! Action errors.
//!
//! [`ValidationError`] is the user-facing rejection produced by the validation
//! pipeline. [`CommandError`] is a contract violation raised while executing
//! or undoing a command that validation should have excluded.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardId, EnemyInstanceId, InvariantViolation, PlayerId};

use super::{ActionType, EffectError};

// ============================================================================
// Validation
// ============================================================================

/// Stable reason code attached to every rejection.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    PlayerNotFound,
    NotYourTurn,
    AlreadyActed,
    NothingSelected,
    CardNotInHand,
    InvalidRestComposition,
    SlowRecoveryNotAllowed,
    UnknownCard,
    CannotPlayWound,
    AlreadyInCombat,
    NotInCombat,
    NoEnemies,
    UnknownEnemy,
    WrongCombatPhase,
    InvalidAttackType,
    EnemyNotFound,
    EnemyAlreadyDefeated,
    EnemyAlreadyBlocked,
    DamageAlreadyAssigned,
    NothingToUndo,
}

/// A rule violation detected before any mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl GameError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        match self.code {
            ValidationCode::NotYourTurn | ValidationCode::NothingToUndo => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        self.code.into()
    }
}

// ============================================================================
// Command execution
// ============================================================================

/// Contract violations raised by command execution and undo.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("not in combat")]
    NotInCombat,

    #[error("enemy instance {0} not found")]
    EnemyNotFound(EnemyInstanceId),

    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    /// The hand slot captured at construction no longer holds the card.
    #[error("hand slot {index} does not hold {card}")]
    HandSlotMismatch { index: usize, card: CardId },

    #[error("cannot undo {0}")]
    NotReversible(ActionType),

    /// The state no longer matches what execute produced.
    #[error("undo context mismatch: {0}")]
    UndoContextMismatch(String),

    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(error) => error.severity(),
            Self::Invariant(error) => error.severity(),
            Self::NotReversible(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerNotFound(_) => "COMMAND_PLAYER_NOT_FOUND",
            Self::NotInCombat => "COMMAND_NOT_IN_COMBAT",
            Self::EnemyNotFound(_) => "COMMAND_ENEMY_NOT_FOUND",
            Self::CardNotInHand(_) => "COMMAND_CARD_NOT_IN_HAND",
            Self::HandSlotMismatch { .. } => "COMMAND_HAND_SLOT_MISMATCH",
            Self::NotReversible(_) => "COMMAND_NOT_REVERSIBLE",
            Self::UndoContextMismatch(_) => "COMMAND_UNDO_CONTEXT_MISMATCH",
            Self::Effect(EffectError::Overflow { .. }) => "COMMAND_EFFECT_OVERFLOW",
            Self::Effect(EffectError::Underflow { .. }) => "COMMAND_EFFECT_REVERSAL",
            Self::Oracle(error) => error.error_code(),
            Self::Invariant(error) => error.error_code(),
        }
    }
}
