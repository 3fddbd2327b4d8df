//! Validation pipeline.
//!
//! A validator is a pure check over `(state, player, action)`. Each action
//! type has a fixed, ordered list of validators; [`validate`] runs them in
//! order and stops at the first rejection. Validators never touch state.
mod card;
mod combat;
mod common;
mod rest;

use crate::env::GameEnv;
use crate::state::{GameState, PlayerId};

use super::{ActionType, PlayerAction, ValidationError};

/// One check in the pipeline.
pub type Validator =
    fn(&GameState, &PlayerId, &PlayerAction, &GameEnv<'_>) -> Result<(), ValidationError>;

const REST: &[Validator] = &[
    common::player_exists,
    common::is_players_turn,
    rest::not_in_combat,
    common::has_not_acted,
    rest::has_selection,
    rest::cards_in_hand,
    rest::composition,
];

const UNDO: &[Validator] = &[common::player_exists, common::is_players_turn];

const PLAY_CARD: &[Validator] = &[
    common::player_exists,
    common::is_players_turn,
    card::card_at_hand_index,
    card::card_is_known,
    card::not_a_wound,
];

const ENTER_COMBAT: &[Validator] = &[
    common::player_exists,
    common::is_players_turn,
    combat::not_in_combat,
    combat::has_enemies,
    combat::enemies_are_known,
];

const DECLARE_BLOCK: &[Validator] = &[
    common::player_exists,
    common::is_players_turn,
    common::in_combat,
    combat::block_phase,
    combat::block_target_is_open,
    combat::has_blocks,
];

const DECLARE_ATTACK: &[Validator] = &[
    common::player_exists,
    common::is_players_turn,
    common::in_combat,
    combat::attack_phase,
    combat::attack_type_allowed,
    combat::has_targets,
    combat::targets_are_live,
];

const ASSIGN_DAMAGE: &[Validator] = &[
    common::player_exists,
    common::is_players_turn,
    common::in_combat,
    combat::assign_damage_phase,
    combat::damage_source_is_open,
];

const END_COMBAT_PHASE: &[Validator] = &[
    common::player_exists,
    common::is_players_turn,
    common::in_combat,
];

/// Ordered validators for an action type.
pub fn validators_for(action_type: ActionType) -> &'static [Validator] {
    match action_type {
        ActionType::Rest => REST,
        ActionType::Undo => UNDO,
        ActionType::PlayCard => PLAY_CARD,
        ActionType::EnterCombat => ENTER_COMBAT,
        ActionType::DeclareBlock => DECLARE_BLOCK,
        ActionType::DeclareAttack => DECLARE_ATTACK,
        ActionType::AssignDamage => ASSIGN_DAMAGE,
        ActionType::EndCombatPhase => END_COMBAT_PHASE,
    }
}

/// Runs the pipeline for `action`, returning the first rejection.
pub fn validate(
    state: &GameState,
    player_id: &PlayerId,
    action: &PlayerAction,
    env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    validators_for(action.action_type())
        .iter()
        .try_for_each(|validator| validator(state, player_id, action, env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ValidationCode;
    use crate::env::RngState;
    use crate::state::{CardId, PlayerState};

    fn state() -> GameState {
        GameState::new(
            vec![
                PlayerState::new("p1").with_hand([CardId::from_static("march")]),
                PlayerState::new("p2").with_hand([CardId::from_static("rage")]),
            ],
            RngState::new(1),
        )
    }

    #[test]
    fn every_pipeline_starts_with_identity_and_turn() {
        use strum::IntoEnumIterator;
        for action_type in ActionType::iter() {
            let validators = validators_for(action_type);
            assert!(validators.len() >= 2, "{action_type}");
        }
    }

    #[test]
    fn unknown_player_is_rejected_first() {
        let action = PlayerAction::standard_rest([]);
        let err = validate(&state(), &PlayerId::from("ghost"), &action, &GameEnv::empty())
            .unwrap_err();
        assert_eq!(err.code, ValidationCode::PlayerNotFound);
        assert_eq!(err.message, "Player ghost not found");
    }

    #[test]
    fn turn_is_checked_before_action_rules() {
        let action = PlayerAction::standard_rest([]);
        let err = validate(&state(), &PlayerId::from("p2"), &action, &GameEnv::empty())
            .unwrap_err();
        assert_eq!(err.code, ValidationCode::NotYourTurn);
        assert_eq!(err.message, "It is not your turn");
    }
}
