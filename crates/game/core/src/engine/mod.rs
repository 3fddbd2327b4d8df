//! Action dispatch and the undo stack.
//!
//! The [`GameEngine`] is the single entry point for player input. Every
//! action flows through the same pipeline:
//!
//! 1. validation: a rejection becomes an `INVALID_ACTION` event and the
//!    state is returned unchanged
//! 2. build: the action becomes a [`Command`] capturing its undo context
//! 3. execute (or undo, for `UNDO_ACTION`)
//! 4. post_validate: state invariants are re-checked
//!
//! Only contract violations escape as [`ExecuteError`]; the input state is
//! never modified in either case.
mod errors;
mod undo;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use undo::UndoStack;

use crate::action::{
    ActionType, Command, CommandError, CommandResult, CommandTransition, PlayerAction,
    ValidationCode, ValidationError, validate,
};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::event::GameEvent;
use crate::state::{GameState, PlayerId};

/// New state and the events emitted while producing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl From<CommandResult> for ActionOutcome {
    fn from(result: CommandResult) -> Self {
        Self {
            state: result.state,
            events: result.events,
        }
    }
}

/// Validates, executes and records player actions for one game session.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    undo: UndoStack,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo
    }

    /// Processes one action from `player_id` against `state`.
    ///
    /// Illegal input is not an error: it yields the unchanged state and a
    /// single `INVALID_ACTION` event. An `Err` means a command hit a contract
    /// violation; the caller's state is still the latest valid one.
    pub fn process_action(
        &mut self,
        state: &GameState,
        player_id: &PlayerId,
        action: &PlayerAction,
        env: &GameEnv<'_>,
    ) -> Result<ActionOutcome, ExecuteError> {
        let action_type = action.action_type();
        tracing::debug!(player = %player_id, action = %action_type, "processing action");

        if let Err(error) = validate(state, player_id, action, env) {
            return Ok(Self::reject(state, player_id, action_type, error));
        }

        let command = Command::from_action(state, player_id, action, env)
            .map_err(|error| Self::fail(action_type, TransitionPhase::Build, error))?;
        let Some(command) = command else {
            return self.undo_last(state, player_id);
        };

        let result = command
            .execute(state, env)
            .map_err(|error| Self::fail(action_type, TransitionPhase::Execute, error))?;
        Self::post_validate(action_type, &result.state)?;

        if command.is_reversible() {
            self.undo.push(command);
        } else {
            self.undo.clear(player_id);
        }

        tracing::debug!(
            player = %player_id,
            action = %action_type,
            events = result.events.len(),
            "action executed"
        );
        Ok(result.into())
    }

    /// Reverts the player's most recent reversible command. The entry is only
    /// popped once the undo has succeeded.
    fn undo_last(
        &mut self,
        state: &GameState,
        player_id: &PlayerId,
    ) -> Result<ActionOutcome, ExecuteError> {
        let Some(command) = self.undo.peek(player_id) else {
            let error = ValidationError::new(ValidationCode::NothingToUndo, "Nothing to undo");
            return Ok(Self::reject(state, player_id, ActionType::Undo, error));
        };

        let result = command
            .undo(state)
            .map_err(|error| Self::fail(ActionType::Undo, TransitionPhase::Undo, error))?;
        Self::post_validate(ActionType::Undo, &result.state)?;

        let undone = self.undo.pop(player_id);
        tracing::debug!(
            player = %player_id,
            command = ?undone.as_ref().map(CommandTransition::action_type),
            "command undone"
        );
        Ok(result.into())
    }

    fn post_validate(action_type: ActionType, state: &GameState) -> Result<(), ExecuteError> {
        state.check_invariants().map_err(|violation| {
            Self::fail(
                action_type,
                TransitionPhase::PostValidate,
                CommandError::Invariant(violation),
            )
        })
    }

    fn reject(
        state: &GameState,
        player_id: &PlayerId,
        action_type: ActionType,
        error: ValidationError,
    ) -> ActionOutcome {
        tracing::debug!(
            player = %player_id,
            action = %action_type,
            code = error.error_code(),
            reason = %error.message,
            "action rejected"
        );
        ActionOutcome {
            state: state.clone(),
            events: vec![GameEvent::InvalidAction {
                player_id: player_id.clone(),
                action_type,
                code: error.code,
                reason: error.message,
            }],
        }
    }

    fn fail(action_type: ActionType, phase: TransitionPhase, error: CommandError) -> ExecuteError {
        let error = ExecuteError::new(action_type, phase, error);
        tracing::warn!(
            action = %action_type,
            phase = phase.as_str(),
            code = error.error_code(),
            %error,
            "action aborted"
        );
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RngState;
    use crate::state::{CardId, InvariantViolation, PlayerState};

    #[test]
    fn rejection_leaves_state_and_stack_untouched() {
        let state = GameState::new(
            vec![PlayerState::new("p1").with_hand([CardId::from_static("march")])],
            RngState::new(1),
        );
        let mut engine = GameEngine::new();
        let outcome = engine
            .process_action(
                &state,
                &PlayerId::from("p1"),
                &PlayerAction::standard_rest([]),
                &GameEnv::empty(),
            )
            .unwrap();
        assert_eq!(outcome.state, state);
        assert!(matches!(
            &outcome.events[..],
            [GameEvent::InvalidAction { reason, code: ValidationCode::NothingSelected, .. }]
                if reason == "Must discard at least one card to rest"
        ));
        assert!(engine.undo_stack().is_empty(&PlayerId::from("p1")));
    }

    #[test]
    fn undo_with_empty_history_is_rejected() {
        let state = GameState::new(vec![PlayerState::new("p1")], RngState::new(1));
        let outcome = GameEngine::new()
            .process_action(
                &state,
                &PlayerId::from("p1"),
                &PlayerAction::Undo,
                &GameEnv::empty(),
            )
            .unwrap();
        assert!(matches!(
            &outcome.events[..],
            [GameEvent::InvalidAction { action_type: ActionType::Undo, reason, .. }]
                if reason == "Nothing to undo"
        ));
    }

    #[test]
    fn broken_invariants_abort_in_post_validate() {
        let mut player = PlayerState::new("p1").with_hand([
            CardId::from_static("march"),
            CardId::from_static("rage"),
        ]);
        player.knocked_out = true;
        let state = GameState::new(vec![player], RngState::new(1));

        let err = GameEngine::new()
            .process_action(
                &state,
                &PlayerId::from("p1"),
                &PlayerAction::standard_rest([CardId::from_static("march")]),
                &GameEnv::empty(),
            )
            .unwrap_err();
        assert_eq!(err.phase(), TransitionPhase::PostValidate);
        assert_eq!(
            err.error(),
            &CommandError::Invariant(InvariantViolation::KnockedOutWithCards(PlayerId::from("p1")))
        );
        assert_eq!(err.severity(), crate::error::ErrorSeverity::Fatal);
    }
}
