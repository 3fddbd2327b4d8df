//! Play-card rules.

use crate::action::{PlayerAction, ValidationCode, ValidationError};
use crate::env::GameEnv;
use crate::state::{CardId, GameState, PlayerId};

use super::common::actor;

fn played(action: &PlayerAction) -> Option<(&CardId, usize)> {
    match action {
        PlayerAction::PlayCard {
            card_id,
            hand_index,
        } => Some((card_id, *hand_index)),
        _ => None,
    }
}

/// The claimed slot must hold the claimed card; undo restores to that slot.
pub(super) fn card_at_hand_index(
    state: &GameState,
    player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let Some((card_id, hand_index)) = played(action) else {
        return Ok(());
    };
    let hand = &actor(state, player_id)?.hand;

    if hand.get(hand_index) == Some(card_id) {
        return Ok(());
    }
    let message = if hand.contains(card_id) {
        format!("{card_id} is not at hand position {hand_index}")
    } else {
        format!("{card_id} is not in your hand")
    };
    Err(ValidationError::new(ValidationCode::CardNotInHand, message))
}

pub(super) fn card_is_known(
    _state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let Some((card_id, _)) = played(action) else {
        return Ok(());
    };
    // wounds have no definition; the next check gives the better message
    if card_id.is_wound() {
        return Ok(());
    }
    let known = env.cards().is_ok_and(|cards| cards.card(card_id).is_some());
    if !known {
        return Err(ValidationError::new(
            ValidationCode::UnknownCard,
            format!("Unknown card {card_id}"),
        ));
    }
    Ok(())
}

pub(super) fn not_a_wound(
    _state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    match played(action) {
        Some((card_id, _)) if card_id.is_wound() => Err(ValidationError::new(
            ValidationCode::CannotPlayWound,
            "Wound cards cannot be played",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{CardEffect, validate};
    use crate::env::{CardDefinition, CardKind, ContentSnapshot, RngState};
    use crate::state::PlayerState;

    const MARCH: CardId = CardId::from_static("march");

    fn content() -> ContentSnapshot {
        ContentSnapshot::new().with_card(CardDefinition::new(
            MARCH,
            "March",
            CardKind::BasicAction,
            CardEffect::movement(2),
        ))
    }

    fn check(hand: Vec<CardId>, card_id: CardId, hand_index: usize) -> Result<(), ValidationError> {
        let state = GameState::new(vec![PlayerState::new("p1").with_hand(hand)], RngState::new(1));
        let content = content();
        validate(
            &state,
            &PlayerId::from("p1"),
            &PlayerAction::PlayCard {
                card_id,
                hand_index,
            },
            &content.env(),
        )
    }

    #[test]
    fn slot_must_hold_the_card() {
        assert!(check(vec![CardId::WOUND, MARCH], MARCH, 1).is_ok());
        assert_eq!(
            check(vec![CardId::WOUND, MARCH], MARCH, 0).unwrap_err().message,
            "march is not at hand position 0"
        );
        assert_eq!(
            check(vec![CardId::WOUND], MARCH, 3).unwrap_err().message,
            "march is not in your hand"
        );
    }

    #[test]
    fn unknown_cards_and_wounds_are_rejected() {
        let rage = CardId::from_static("rage");
        assert_eq!(
            check(vec![rage.clone()], rage, 0).unwrap_err().code,
            ValidationCode::UnknownCard
        );
        assert_eq!(
            check(vec![CardId::WOUND], CardId::WOUND, 0).unwrap_err().message,
            "Wound cards cannot be played"
        );
    }
}
