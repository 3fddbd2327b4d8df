use crate::action::{ActionType, CommandError};
use crate::combat::{ElementalValue, calculate_total_block};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{EnemyInstanceId, GameState, PlayerId};

use super::super::{CommandResult, CommandTransition, combat_in, ensure_player};
use super::enemy_in;

/// Blocks one enemy's attack with the declared block values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclareBlockCommand {
    pub player_id: PlayerId,
    pub target_enemy_instance_id: EnemyInstanceId,
    pub blocks: Vec<ElementalValue>,
}

impl CommandTransition for DeclareBlockCommand {
    fn action_type(&self) -> ActionType {
        ActionType::DeclareBlock
    }

    fn execute(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        ensure_player(state, &self.player_id)?;
        let mut next = state.clone();
        let enemy = enemy_in(combat_in(&mut next.combat)?, self.target_enemy_instance_id)?;

        let block_value = calculate_total_block(&self.blocks, enemy.definition.attack_element);
        let required_block = enemy.definition.attack;

        if block_value < required_block {
            return Ok(CommandResult::new(
                state.clone(),
                vec![GameEvent::BlockFailed {
                    enemy_instance_id: self.target_enemy_instance_id,
                    block_value,
                    required_block,
                }],
            ));
        }

        enemy.is_blocked = true;
        Ok(CommandResult::new(
            next,
            vec![GameEvent::EnemyBlocked {
                enemy_instance_id: self.target_enemy_instance_id,
                block_value,
            }],
        ))
    }
}
