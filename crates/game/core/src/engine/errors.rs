//! Error types for the action pipeline.

use crate::action::{ActionType, CommandError};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    Build,
    Execute,
    Undo,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::Build => "build",
            TransitionPhase::Execute => "execute",
            TransitionPhase::Undo => "undo",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a pipeline stage with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Contract violation surfaced by [`GameEngine::process_action`].
///
/// User mistakes never produce this error; they become `INVALID_ACTION`
/// events instead.
///
/// [`GameEngine::process_action`]: super::GameEngine::process_action
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{action_type} action failed: {source}")]
pub struct ExecuteError {
    pub action_type: ActionType,
    pub source: TransitionPhaseError<CommandError>,
}

impl ExecuteError {
    pub fn new(action_type: ActionType, phase: TransitionPhase, error: CommandError) -> Self {
        Self {
            action_type,
            source: TransitionPhaseError::new(phase, error),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.source.phase
    }

    pub fn error(&self) -> &CommandError {
        &self.source.error
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self.source.phase {
            TransitionPhase::PostValidate => ErrorSeverity::Fatal,
            _ => self.source.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        self.source.error.error_code()
    }
}
