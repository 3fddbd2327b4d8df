//! Checks shared by several pipelines.

use crate::action::{PlayerAction, ValidationCode, ValidationError};
use crate::env::GameEnv;
use crate::state::{CombatState, GameState, PlayerId, PlayerState};

/// Looks up the actor, rejecting unknown ids.
pub(super) fn actor<'a>(
    state: &'a GameState,
    player_id: &PlayerId,
) -> Result<&'a PlayerState, ValidationError> {
    state.player(player_id).ok_or_else(|| {
        ValidationError::new(
            ValidationCode::PlayerNotFound,
            format!("Player {player_id} not found"),
        )
    })
}

/// Borrows the active combat, rejecting when there is none.
pub(super) fn combat(state: &GameState) -> Result<&CombatState, ValidationError> {
    state
        .combat
        .as_ref()
        .ok_or_else(|| ValidationError::new(ValidationCode::NotInCombat, "Not in combat"))
}

pub(super) fn player_exists(
    state: &GameState,
    player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    actor(state, player_id).map(|_| ())
}

pub(super) fn is_players_turn(
    state: &GameState,
    player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    match state.current_player() {
        Some(current) if &current.id == player_id => Ok(()),
        _ => Err(ValidationError::new(
            ValidationCode::NotYourTurn,
            "It is not your turn",
        )),
    }
}

pub(super) fn has_not_acted(
    state: &GameState,
    player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    if actor(state, player_id)?.has_taken_action_this_turn {
        return Err(ValidationError::new(
            ValidationCode::AlreadyActed,
            "You have already taken an action this turn",
        ));
    }
    Ok(())
}

pub(super) fn in_combat(
    state: &GameState,
    _player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    combat(state).map(|_| ())
}
