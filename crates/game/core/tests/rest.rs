mod common;

use common::*;
use mage_core::{CardId, GameEvent, PlayerAction, RestType};
use proptest::prelude::*;

#[test]
fn standard_rest_discards_one_card_and_wounds() {
    let mut session = Session::new(solo(vec![MARCH, WOUND, WOUND]));
    let events = session.act(&p1(), PlayerAction::standard_rest([MARCH, WOUND]));

    assert_eq!(
        events,
        vec![GameEvent::PlayerRested {
            player_id: p1(),
            rest_type: RestType::Standard,
            cards_discarded: 2,
            wounds_discarded: 1,
        }]
    );
    let player = session.player();
    assert_eq!(player.hand, vec![WOUND]);
    assert_eq!(player.discard, vec![MARCH, WOUND]);
    assert!(player.has_taken_action_this_turn);
}

#[test]
fn resting_twice_in_a_turn_is_rejected() {
    let mut session = Session::new(solo(vec![MARCH, RAGE]));
    session.act(&p1(), PlayerAction::standard_rest([MARCH]));
    let before = session.state.clone();

    let events = session.act(&p1(), PlayerAction::standard_rest([RAGE]));
    assert_eq!(
        rejection(&events),
        Some("You have already taken an action this turn")
    );
    assert_eq!(session.state, before);
}

#[test]
fn announcing_end_of_round_is_undone_with_the_rest() {
    let mut session = Session::new(solo(vec![MARCH]));
    let before = session.state.clone();

    let events = session.act(
        &p1(),
        PlayerAction::Rest {
            rest_type: RestType::Standard,
            discard_card_ids: vec![MARCH],
            announce_end_of_round: true,
        },
    );
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        GameEvent::EndOfRoundAnnounced { player_id: p1() }
    );
    assert_eq!(session.state.end_of_round_announced_by, Some(p1()));

    let events = session.act(&p1(), PlayerAction::Undo);
    assert_eq!(events, vec![GameEvent::RestUndone { player_id: p1() }]);
    assert_eq!(session.state, before);
}

#[test]
fn slow_recovery_then_undo() {
    let mut session = Session::new(solo(vec![WOUND, WOUND]));
    let before = session.state.clone();

    let events = session.act(&p1(), PlayerAction::slow_recovery([WOUND]));
    assert!(matches!(
        &events[..],
        [GameEvent::PlayerRested {
            rest_type: RestType::SlowRecovery,
            cards_discarded: 1,
            wounds_discarded: 1,
            ..
        }]
    ));
    assert_eq!(session.player().hand, vec![WOUND]);

    session.act(&p1(), PlayerAction::Undo);
    assert_eq!(session.state, before);

    let events = session.act(&p1(), PlayerAction::Undo);
    assert_eq!(rejection(&events), Some("Nothing to undo"));
}

fn hand_from(wounds: &[bool]) -> Vec<CardId> {
    wounds
        .iter()
        .enumerate()
        .map(|(index, is_wound)| match (*is_wound, index % 2) {
            (true, _) => WOUND,
            (false, 0) => MARCH,
            (false, _) => RAGE,
        })
        .collect()
}

proptest! {
    /// Standard Rest succeeds iff exactly one non-wound is selected.
    #[test]
    fn standard_rest_accepts_exactly_one_non_wound(
        slots in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..8),
    ) {
        let wounds: Vec<bool> = slots.iter().map(|(wound, _)| *wound).collect();
        let hand = hand_from(&wounds);
        let selection: Vec<CardId> = hand
            .iter()
            .zip(&slots)
            .filter(|(_, (_, selected))| *selected)
            .map(|(card, _)| card.clone())
            .collect();
        let non_wounds = selection.iter().filter(|card| !card.is_wound()).count();

        let mut session = Session::new(solo(hand.clone()));
        let before = session.state.clone();
        let events = session.act(&p1(), PlayerAction::standard_rest(selection.clone()));

        if selection.is_empty() {
            prop_assert_eq!(rejection(&events), Some("Must discard at least one card to rest"));
            prop_assert_eq!(&session.state, &before);
        } else if non_wounds != 1 {
            prop_assert_eq!(
                rejection(&events),
                Some("Standard Rest requires exactly one non-wound card (plus any number of wounds)")
            );
            prop_assert_eq!(&session.state, &before);
        } else {
            let player = session.player();
            prop_assert_eq!(player.discard.len(), selection.len());
            prop_assert_eq!(player.hand.len(), hand.len() - selection.len());
            // undo is exact
            session.act(&p1(), PlayerAction::Undo);
            prop_assert_eq!(&session.state, &before);
        }
    }

    /// Slow Recovery succeeds iff the hand is all wounds and one wound is selected.
    #[test]
    fn slow_recovery_requires_an_all_wound_hand(
        wounds in proptest::collection::vec(any::<bool>(), 1..6),
        discard_count in 1usize..3,
    ) {
        let hand = hand_from(&wounds);
        let selection: Vec<CardId> = hand.iter().filter(|card| card.is_wound()).take(discard_count).cloned().collect();
        prop_assume!(!selection.is_empty());

        let mut session = Session::new(solo(hand.clone()));
        let events = session.act(&p1(), PlayerAction::slow_recovery(selection.clone()));
        let all_wounds = wounds.iter().all(|wound| *wound);

        match rejection(&events) {
            None => {
                prop_assert!(all_wounds && selection.len() == 1);
                prop_assert_eq!(session.player().hand.len(), hand.len() - 1);
            }
            Some(reason) if !all_wounds => prop_assert_eq!(
                reason,
                "Slow Recovery is only allowed when your hand contains only wound cards"
            ),
            Some(reason) => prop_assert_eq!(
                reason,
                "Slow Recovery requires discarding exactly one wound card"
            ),
        }
    }
}
