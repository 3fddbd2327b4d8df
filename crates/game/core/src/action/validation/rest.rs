//! Rest rules.
//!
//! | Rest type     | Hand                | Discard selection                     |
//! |---------------|---------------------|---------------------------------------|
//! | Standard      | any                 | exactly one non-wound, any wounds     |
//! | Slow Recovery | only wound cards    | exactly one wound                     |

use crate::action::{PlayerAction, RestType, ValidationCode, ValidationError};
use crate::env::GameEnv;
use crate::state::{CardId, GameState, PlayerId};

use super::common::actor;

fn selection(action: &PlayerAction) -> Option<(RestType, &[CardId])> {
    match action {
        PlayerAction::Rest {
            rest_type,
            discard_card_ids,
            ..
        } => Some((*rest_type, discard_card_ids)),
        _ => None,
    }
}

pub(super) fn not_in_combat(
    state: &GameState,
    _player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    if state.in_combat() {
        return Err(ValidationError::new(
            ValidationCode::AlreadyInCombat,
            "Cannot rest during combat",
        ));
    }
    Ok(())
}

pub(super) fn has_selection(
    _state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    match selection(action) {
        Some((_, [])) => Err(ValidationError::new(
            ValidationCode::NothingSelected,
            "Must discard at least one card to rest",
        )),
        _ => Ok(()),
    }
}

/// Every selected id must be in hand, counting duplicates: discarding two
/// wounds needs two wounds in hand.
pub(super) fn cards_in_hand(
    state: &GameState,
    player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let Some((_, discards)) = selection(action) else {
        return Ok(());
    };
    let player = actor(state, player_id)?;

    let mut used = vec![false; player.hand.len()];
    for card in discards {
        let slot = player
            .hand
            .iter()
            .zip(&used)
            .position(|(held, taken)| held == card && !taken);
        match slot {
            Some(index) => used[index] = true,
            None => {
                return Err(ValidationError::new(
                    ValidationCode::CardNotInHand,
                    format!("{card} is not in your hand"),
                ));
            }
        }
    }
    Ok(())
}

pub(super) fn composition(
    state: &GameState,
    player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let Some((rest_type, discards)) = selection(action) else {
        return Ok(());
    };
    let non_wounds = discards.iter().filter(|card| !card.is_wound()).count();

    match rest_type {
        RestType::Standard => {
            if non_wounds != 1 {
                return Err(ValidationError::new(
                    ValidationCode::InvalidRestComposition,
                    "Standard Rest requires exactly one non-wound card (plus any number of wounds)",
                ));
            }
        }
        RestType::SlowRecovery => {
            if !actor(state, player_id)?.hand_is_all_wounds() {
                return Err(ValidationError::new(
                    ValidationCode::SlowRecoveryNotAllowed,
                    "Slow Recovery is only allowed when your hand contains only wound cards",
                ));
            }
            if discards.len() != 1 || non_wounds != 0 {
                return Err(ValidationError::new(
                    ValidationCode::InvalidRestComposition,
                    "Slow Recovery requires discarding exactly one wound card",
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RngState;
    use crate::state::{CombatState, PlayerState};

    const MARCH: CardId = CardId::from_static("march");
    const RAGE: CardId = CardId::from_static("rage");

    fn check(hand: Vec<CardId>, action: PlayerAction) -> Result<(), ValidationError> {
        let state = GameState::new(
            vec![PlayerState::new("p1").with_hand(hand)],
            RngState::new(1),
        );
        crate::action::validate(&state, &PlayerId::from("p1"), &action, &GameEnv::empty())
    }

    fn reason(result: Result<(), ValidationError>) -> String {
        result.unwrap_err().message
    }

    #[test]
    fn standard_rest_composition() {
        assert!(check(
            vec![MARCH, CardId::WOUND, CardId::WOUND],
            PlayerAction::standard_rest([MARCH, CardId::WOUND, CardId::WOUND])
        )
        .is_ok());
        assert_eq!(
            reason(check(vec![MARCH, RAGE], PlayerAction::standard_rest([MARCH, RAGE]))),
            "Standard Rest requires exactly one non-wound card (plus any number of wounds)"
        );
        assert_eq!(
            reason(check(
                vec![MARCH, CardId::WOUND],
                PlayerAction::standard_rest([CardId::WOUND])
            )),
            "Standard Rest requires exactly one non-wound card (plus any number of wounds)"
        );
        assert_eq!(
            reason(check(vec![MARCH], PlayerAction::standard_rest([]))),
            "Must discard at least one card to rest"
        );
    }

    #[test]
    fn selection_must_be_in_hand_with_multiplicity() {
        assert_eq!(
            reason(check(vec![MARCH], PlayerAction::standard_rest([RAGE]))),
            "rage is not in your hand"
        );
        assert_eq!(
            reason(check(
                vec![MARCH, CardId::WOUND],
                PlayerAction::standard_rest([MARCH, CardId::WOUND, CardId::WOUND])
            )),
            "wound is not in your hand"
        );
    }

    #[test]
    fn slow_recovery_rules() {
        assert!(check(
            vec![CardId::WOUND, CardId::WOUND],
            PlayerAction::slow_recovery([CardId::WOUND])
        )
        .is_ok());
        assert_eq!(
            reason(check(
                vec![MARCH, CardId::WOUND],
                PlayerAction::slow_recovery([CardId::WOUND])
            )),
            "Slow Recovery is only allowed when your hand contains only wound cards"
        );
        assert_eq!(
            reason(check(
                vec![CardId::WOUND, CardId::WOUND],
                PlayerAction::slow_recovery([CardId::WOUND, CardId::WOUND])
            )),
            "Slow Recovery requires discarding exactly one wound card"
        );
    }

    #[test]
    fn acting_twice_is_rejected() {
        let state = GameState::new(
            vec![PlayerState::new("p1").with_hand([MARCH]).with_taken_action(true)],
            RngState::new(1),
        );
        let err = crate::action::validate(
            &state,
            &PlayerId::from("p1"),
            &PlayerAction::standard_rest([MARCH]),
            &GameEnv::empty(),
        )
        .unwrap_err();
        assert_eq!(err.code, ValidationCode::AlreadyActed);
    }

    #[test]
    fn resting_in_combat_is_rejected() {
        let state = GameState::new(
            vec![PlayerState::new("p1").with_hand([MARCH])],
            RngState::new(1),
        )
        .with_combat(CombatState::new(Vec::new()));
        let err = crate::action::validate(
            &state,
            &PlayerId::from("p1"),
            &PlayerAction::standard_rest([MARCH]),
            &GameEnv::empty(),
        )
        .unwrap_err();
        assert_eq!(err.message, "Cannot rest during combat");
    }
}
