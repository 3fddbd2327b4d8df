//! Commands: the only way game state changes.
//!
//! A command is built from a validated action and captures, as plain data,
//! everything it needs to execute and (when reversible) to invert itself:
//! the hand slots a rest removed, the effect a played card applied, the enemy
//! definitions revealed by entering combat.
//!
//! Execution never mutates its input. Each command copies the state, edits
//! the copy, and returns it only once every step has succeeded, so a failing
//! command leaves nothing behind.
mod combat;
mod play_card;
mod rest;

pub use combat::{
    AssignDamageCommand, DeclareAttackCommand, DeclareBlockCommand, EndCombatPhaseCommand,
    EnterCombatCommand,
};
pub use play_card::PlayCardCommand;
pub use rest::RestCommand;

use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{CombatState, GameState, PlayerId, PlayerState};

use super::{ActionType, CommandError, PlayerAction};

/// New state plus the events produced while reaching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl CommandResult {
    pub fn new(state: GameState, events: Vec<GameEvent>) -> Self {
        Self { state, events }
    }
}

/// Defines how a command moves the game from one snapshot to the next.
///
/// Undo is a capability: the default implementation refuses, and only
/// reversible commands override it.
pub trait CommandTransition {
    fn action_type(&self) -> ActionType;

    /// Whether [`undo`](Self::undo) can invert [`execute`](Self::execute).
    fn is_reversible(&self) -> bool {
        false
    }

    /// Produces the next state. Implementations may assume validation passed;
    /// anything else is a contract violation.
    fn execute(&self, state: &GameState, env: &GameEnv<'_>) -> Result<CommandResult, CommandError>;

    /// Restores the state that preceded [`execute`](Self::execute).
    fn undo(&self, _state: &GameState) -> Result<CommandResult, CommandError> {
        Err(CommandError::NotReversible(self.action_type()))
    }
}

/// Executable record of one accepted action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Command {
    Rest(RestCommand),
    PlayCard(PlayCardCommand),
    EnterCombat(EnterCombatCommand),
    DeclareBlock(DeclareBlockCommand),
    DeclareAttack(DeclareAttackCommand),
    AssignDamage(AssignDamageCommand),
    EndCombatPhase(EndCombatPhaseCommand),
}

impl Command {
    /// Builds the command for a validated action, capturing its undo context
    /// from `state`. Returns `None` for `UNDO_ACTION`, which the engine
    /// serves from its undo stack instead.
    pub fn from_action(
        state: &GameState,
        player_id: &PlayerId,
        action: &PlayerAction,
        env: &GameEnv<'_>,
    ) -> Result<Option<Self>, CommandError> {
        let command = match action {
            PlayerAction::Undo => return Ok(None),
            PlayerAction::Rest {
                rest_type,
                discard_card_ids,
                announce_end_of_round,
            } => Self::Rest(RestCommand::new(
                state,
                player_id,
                *rest_type,
                discard_card_ids,
                *announce_end_of_round,
            )?),
            PlayerAction::PlayCard {
                card_id,
                hand_index,
            } => Self::PlayCard(PlayCardCommand::new(
                player_id.clone(),
                card_id.clone(),
                *hand_index,
                env,
            )?),
            PlayerAction::EnterCombat { enemy_ids } => {
                Self::EnterCombat(EnterCombatCommand::new(player_id.clone(), enemy_ids, env)?)
            }
            PlayerAction::DeclareBlock {
                target_enemy_instance_id,
                blocks,
            } => Self::DeclareBlock(DeclareBlockCommand {
                player_id: player_id.clone(),
                target_enemy_instance_id: *target_enemy_instance_id,
                blocks: blocks.clone(),
            }),
            PlayerAction::DeclareAttack {
                target_enemy_instance_ids,
                attack_value,
                attack_type,
                element,
            } => Self::DeclareAttack(DeclareAttackCommand {
                player_id: player_id.clone(),
                target_enemy_instance_ids: target_enemy_instance_ids.clone(),
                attack_value: *attack_value,
                attack_type: *attack_type,
                element: *element,
            }),
            PlayerAction::AssignDamage { enemy_instance_id } => {
                Self::AssignDamage(AssignDamageCommand {
                    player_id: player_id.clone(),
                    enemy_instance_id: *enemy_instance_id,
                })
            }
            PlayerAction::EndCombatPhase => Self::EndCombatPhase(EndCombatPhaseCommand {
                player_id: player_id.clone(),
            }),
        };
        Ok(Some(command))
    }

    /// Player who issued the command.
    pub fn player_id(&self) -> &PlayerId {
        match self {
            Self::Rest(command) => &command.player_id,
            Self::PlayCard(command) => &command.player_id,
            Self::EnterCombat(command) => &command.player_id,
            Self::DeclareBlock(command) => &command.player_id,
            Self::DeclareAttack(command) => &command.player_id,
            Self::AssignDamage(command) => &command.player_id,
            Self::EndCombatPhase(command) => &command.player_id,
        }
    }

    fn as_transition(&self) -> &dyn CommandTransition {
        match self {
            Self::Rest(command) => command,
            Self::PlayCard(command) => command,
            Self::EnterCombat(command) => command,
            Self::DeclareBlock(command) => command,
            Self::DeclareAttack(command) => command,
            Self::AssignDamage(command) => command,
            Self::EndCombatPhase(command) => command,
        }
    }
}

impl CommandTransition for Command {
    fn action_type(&self) -> ActionType {
        self.as_transition().action_type()
    }

    fn is_reversible(&self) -> bool {
        self.as_transition().is_reversible()
    }

    fn execute(&self, state: &GameState, env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        self.as_transition().execute(state, env)
    }

    fn undo(&self, state: &GameState) -> Result<CommandResult, CommandError> {
        self.as_transition().undo(state)
    }
}

// ===== shared lookups =====
//
// These take individual `GameState` fields so a command can hold the acting
// player and the combat mutably at the same time.

fn player_in<'a>(
    players: &'a mut [PlayerState],
    player_id: &PlayerId,
) -> Result<&'a mut PlayerState, CommandError> {
    players
        .iter_mut()
        .find(|player| &player.id == player_id)
        .ok_or_else(|| CommandError::PlayerNotFound(player_id.clone()))
}

fn combat_in(combat: &mut Option<CombatState>) -> Result<&mut CombatState, CommandError> {
    combat.as_mut().ok_or(CommandError::NotInCombat)
}

fn ensure_player(state: &GameState, player_id: &PlayerId) -> Result<(), CommandError> {
    state
        .player_index(player_id)
        .map(|_| ())
        .ok_or_else(|| CommandError::PlayerNotFound(player_id.clone()))
}
