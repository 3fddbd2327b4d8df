use crate::action::{ActionType, CommandError};
use crate::env::{EnemyDefinition, GameEnv};
use crate::event::{GameEvent, RevealedEnemy};
use crate::state::{CombatState, EnemyId, EnemyInstance, GameState, PlayerId};

use super::super::{CommandResult, CommandTransition, ensure_player};

/// Reveals enemies and opens combat in the Ranged/Siege phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnterCombatCommand {
    pub player_id: PlayerId,
    /// Definitions resolved when the command was built, in declaration order.
    pub enemies: Vec<EnemyDefinition>,
}

impl EnterCombatCommand {
    pub fn new(
        player_id: PlayerId,
        enemy_ids: &[EnemyId],
        env: &GameEnv<'_>,
    ) -> Result<Self, CommandError> {
        let enemies = enemy_ids
            .iter()
            .map(|id| env.enemy(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { player_id, enemies })
    }
}

impl CommandTransition for EnterCombatCommand {
    fn action_type(&self) -> ActionType {
        ActionType::EnterCombat
    }

    fn execute(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        ensure_player(state, &self.player_id)?;
        let mut next = state.clone();

        let mut instances = Vec::with_capacity(self.enemies.len());
        for definition in &self.enemies {
            let instance_id = next.allocate_enemy_instance_id()?;
            instances.push(EnemyInstance::new(instance_id, definition.clone()));
        }

        let revealed = instances
            .iter()
            .map(|enemy| RevealedEnemy {
                instance_id: enemy.instance_id,
                name: enemy.definition.name.clone(),
                attack: enemy.definition.attack,
                attack_element: enemy.definition.attack_element,
                armor: enemy.definition.armor,
            })
            .collect();
        next.combat = Some(CombatState::new(instances));

        tracing::info!(
            player = %self.player_id,
            enemies = self.enemies.len(),
            "combat started"
        );

        Ok(CommandResult::new(
            next,
            vec![GameEvent::CombatStarted {
                player_id: self.player_id.clone(),
                enemies: revealed,
            }],
        ))
    }
}
