use crate::action::{ActionType, CardEffect, CommandError};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{CardId, GameState, PlayerId};

use super::{CommandResult, CommandTransition, player_in};

/// Moves a card from hand to the play area and applies its basic effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayCardCommand {
    pub player_id: PlayerId,
    pub card_id: CardId,
    /// Slot the card occupied; undo puts it back there.
    pub hand_index: usize,
    /// Effect applied on execute; undo subtracts it.
    pub effect: CardEffect,
}

impl PlayCardCommand {
    pub fn new(
        player_id: PlayerId,
        card_id: CardId,
        hand_index: usize,
        env: &GameEnv<'_>,
    ) -> Result<Self, CommandError> {
        let effect = env.card(&card_id)?.basic_effect;
        Ok(Self {
            player_id,
            card_id,
            hand_index,
            effect,
        })
    }
}

impl CommandTransition for PlayCardCommand {
    fn action_type(&self) -> ActionType {
        ActionType::PlayCard
    }

    fn is_reversible(&self) -> bool {
        true
    }

    fn execute(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        let mut next = state.clone();
        let player = player_in(&mut next.players, &self.player_id)?;

        if player.hand.get(self.hand_index) != Some(&self.card_id) {
            return Err(CommandError::HandSlotMismatch {
                index: self.hand_index,
                card: self.card_id.clone(),
            });
        }
        let card = player.hand.remove(self.hand_index);
        player.play_area.push(card);
        self.effect.apply(&mut player.resources)?;

        let event = GameEvent::CardPlayed {
            player_id: self.player_id.clone(),
            card_id: self.card_id.clone(),
            powered: false,
            sideways: false,
            effect: self.effect.describe(),
        };
        Ok(CommandResult::new(next, vec![event]))
    }

    fn undo(&self, state: &GameState) -> Result<CommandResult, CommandError> {
        let mut next = state.clone();
        let player = player_in(&mut next.players, &self.player_id)?;

        let position = player
            .play_area
            .iter()
            .rposition(|card| card == &self.card_id)
            .ok_or_else(|| {
                CommandError::UndoContextMismatch(format!("{} is not in play", self.card_id))
            })?;
        if self.hand_index > player.hand.len() {
            return Err(CommandError::UndoContextMismatch(format!(
                "hand too short to restore slot {}",
                self.hand_index
            )));
        }
        let card = player.play_area.remove(position);
        player.hand.insert(self.hand_index, card);
        self.effect.reverse(&mut player.resources)?;

        let event = GameEvent::CardPlayUndone {
            player_id: self.player_id.clone(),
            card_id: self.card_id.clone(),
        };
        Ok(CommandResult::new(next, vec![event]))
    }
}
