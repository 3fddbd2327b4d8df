//! Per-actor undo history.

use std::collections::BTreeMap;

use crate::action::{Command, CommandTransition};
use crate::state::PlayerId;

/// LIFO of reversible commands, one stack per player.
///
/// The stack belongs to a single game session; hosts running several games
/// keep one engine (and so one stack) per game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoStack {
    entries: BTreeMap<PlayerId, Vec<Command>>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reversible command under its issuing player.
    pub fn push(&mut self, command: Command) {
        debug_assert!(command.is_reversible());
        self.entries
            .entry(command.player_id().clone())
            .or_default()
            .push(command);
    }

    pub fn peek(&self, player_id: &PlayerId) -> Option<&Command> {
        self.entries.get(player_id).and_then(|stack| stack.last())
    }

    pub fn pop(&mut self, player_id: &PlayerId) -> Option<Command> {
        let stack = self.entries.get_mut(player_id)?;
        let command = stack.pop();
        if stack.is_empty() {
            self.entries.remove(player_id);
        }
        command
    }

    /// Drops the player's history; earlier commands can no longer be undone.
    pub fn clear(&mut self, player_id: &PlayerId) {
        self.entries.remove(player_id);
    }

    pub fn len(&self, player_id: &PlayerId) -> usize {
        self.entries.get(player_id).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, player_id: &PlayerId) -> bool {
        self.len(player_id) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{CardEffect, PlayCardCommand};
    use crate::state::CardId;

    fn play(player: &str, index: usize) -> Command {
        Command::PlayCard(PlayCardCommand {
            player_id: PlayerId::from(player),
            card_id: CardId::from_static("march"),
            hand_index: index,
            effect: CardEffect::movement(2),
        })
    }

    #[test]
    fn stacks_are_per_player_lifo() {
        let mut stack = UndoStack::new();
        stack.push(play("p1", 0));
        stack.push(play("p1", 1));
        stack.push(play("p2", 2));

        let p1 = PlayerId::from("p1");
        assert_eq!(stack.len(&p1), 2);
        assert_eq!(stack.pop(&p1), Some(play("p1", 1)));
        assert_eq!(stack.peek(&p1), Some(&play("p1", 0)));

        stack.clear(&p1);
        assert!(stack.is_empty(&p1));
        assert_eq!(stack.len(&PlayerId::from("p2")), 1);
        assert_eq!(stack.pop(&p1), None);
    }
}
