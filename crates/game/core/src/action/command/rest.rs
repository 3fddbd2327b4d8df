use crate::action::{ActionType, CommandError, RestType};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{CardId, GameState, PlayerId};

use super::{CommandResult, CommandTransition, player_in};

/// Discards the selected cards and ends the player's action for the turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestCommand {
    pub player_id: PlayerId,
    pub rest_type: RestType,
    pub announce_end_of_round: bool,
    /// Hand slots removed by the rest, ascending by index.
    pub removed: Vec<(usize, CardId)>,
    pub previous_has_taken_action: bool,
    pub previous_announcement: Option<PlayerId>,
}

impl RestCommand {
    /// Resolves each selected id to the first matching hand slot not already
    /// claimed by an earlier id.
    pub fn new(
        state: &GameState,
        player_id: &PlayerId,
        rest_type: RestType,
        discard_card_ids: &[CardId],
        announce_end_of_round: bool,
    ) -> Result<Self, CommandError> {
        let player = state
            .player(player_id)
            .ok_or_else(|| CommandError::PlayerNotFound(player_id.clone()))?;

        let mut removed: Vec<(usize, CardId)> = Vec::with_capacity(discard_card_ids.len());
        for card in discard_card_ids {
            let index = player
                .hand
                .iter()
                .enumerate()
                .find(|(index, held)| {
                    *held == card && !removed.iter().any(|(taken, _)| taken == index)
                })
                .map(|(index, _)| index)
                .ok_or_else(|| CommandError::CardNotInHand(card.clone()))?;
            removed.push((index, card.clone()));
        }
        removed.sort_unstable_by_key(|(index, _)| *index);

        Ok(Self {
            player_id: player_id.clone(),
            rest_type,
            announce_end_of_round,
            removed,
            previous_has_taken_action: player.has_taken_action_this_turn,
            previous_announcement: state.end_of_round_announced_by.clone(),
        })
    }

    fn wounds_discarded(&self) -> u32 {
        self.removed.iter().filter(|(_, card)| card.is_wound()).count() as u32
    }
}

impl CommandTransition for RestCommand {
    fn action_type(&self) -> ActionType {
        ActionType::Rest
    }

    fn is_reversible(&self) -> bool {
        true
    }

    fn execute(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        let mut next = state.clone();
        let player = player_in(&mut next.players, &self.player_id)?;

        for (index, card) in &self.removed {
            if player.hand.get(*index) != Some(card) {
                return Err(CommandError::HandSlotMismatch {
                    index: *index,
                    card: card.clone(),
                });
            }
        }
        for (index, _) in self.removed.iter().rev() {
            player.hand.remove(*index);
        }
        player
            .discard
            .extend(self.removed.iter().map(|(_, card)| card.clone()));
        player.has_taken_action_this_turn = true;

        let mut events = vec![GameEvent::PlayerRested {
            player_id: self.player_id.clone(),
            rest_type: self.rest_type,
            cards_discarded: self.removed.len() as u32,
            wounds_discarded: self.wounds_discarded(),
        }];

        if self.announce_end_of_round {
            next.end_of_round_announced_by = Some(self.player_id.clone());
            events.push(GameEvent::EndOfRoundAnnounced {
                player_id: self.player_id.clone(),
            });
        }

        Ok(CommandResult::new(next, events))
    }

    fn undo(&self, state: &GameState) -> Result<CommandResult, CommandError> {
        let mut next = state.clone();
        let player = player_in(&mut next.players, &self.player_id)?;

        let keep = player
            .discard
            .len()
            .checked_sub(self.removed.len())
            .ok_or_else(|| CommandError::UndoContextMismatch("discard pile too short".into()))?;
        let tail_matches = player.discard[keep..]
            .iter()
            .eq(self.removed.iter().map(|(_, card)| card));
        if !tail_matches {
            return Err(CommandError::UndoContextMismatch(
                "discard pile changed since rest".into(),
            ));
        }
        player.discard.truncate(keep);

        for (index, card) in &self.removed {
            if *index > player.hand.len() {
                return Err(CommandError::UndoContextMismatch(format!(
                    "hand too short to restore slot {index}"
                )));
            }
            player.hand.insert(*index, card.clone());
        }
        player.has_taken_action_this_turn = self.previous_has_taken_action;
        next.end_of_round_announced_by = self.previous_announcement.clone();

        Ok(CommandResult::new(
            next,
            vec![GameEvent::RestUndone {
                player_id: self.player_id.clone(),
            }],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RngState;
    use crate::state::PlayerState;

    const MARCH: CardId = CardId::from_static("march");
    const RAGE: CardId = CardId::from_static("rage");

    fn state(hand: Vec<CardId>) -> GameState {
        GameState::new(vec![PlayerState::new("p1").with_hand(hand)], RngState::new(1))
    }

    #[test]
    fn duplicate_ids_claim_distinct_slots() {
        let state = state(vec![CardId::WOUND, MARCH, CardId::WOUND]);
        let command = RestCommand::new(
            &state,
            &PlayerId::from("p1"),
            RestType::Standard,
            &[CardId::WOUND, MARCH, CardId::WOUND],
            false,
        )
        .unwrap();
        assert_eq!(
            command.removed,
            vec![(0, CardId::WOUND), (1, MARCH), (2, CardId::WOUND)]
        );
    }

    #[test]
    fn undo_restores_hand_order_and_flags() {
        let before = state(vec![RAGE, CardId::WOUND, MARCH, CardId::WOUND]);
        let command = RestCommand::new(
            &before,
            &PlayerId::from("p1"),
            RestType::Standard,
            &[MARCH, CardId::WOUND],
            true,
        )
        .unwrap();

        let executed = command.execute(&before, &GameEnv::empty()).unwrap();
        let player = &executed.state.players[0];
        assert_eq!(player.hand, vec![RAGE, CardId::WOUND]);
        assert_eq!(player.discard, vec![CardId::WOUND, MARCH]);
        assert_eq!(
            executed.state.end_of_round_announced_by,
            Some(PlayerId::from("p1"))
        );
        assert_eq!(executed.events.len(), 2);

        let undone = command.undo(&executed.state).unwrap();
        assert_eq!(undone.state, before);
    }

    #[test]
    fn undo_refuses_when_discard_changed() {
        let before = state(vec![MARCH]);
        let command =
            RestCommand::new(&before, &PlayerId::from("p1"), RestType::Standard, &[MARCH], false)
                .unwrap();
        let mut executed = command.execute(&before, &GameEnv::empty()).unwrap().state;
        executed.players[0].discard.clear();
        assert!(matches!(
            command.undo(&executed),
            Err(CommandError::UndoContextMismatch(_))
        ));
    }
}
