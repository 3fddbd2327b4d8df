use crate::action::{ActionType, CommandError};
use crate::combat::{
    CombatType, Element, ElementalValue, calculate_effective_attack, combine_resistances,
};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{EnemyInstance, EnemyInstanceId, GameState, PlayerId};

use super::super::{CommandResult, CommandTransition, combat_in, player_in};

/// Attacks a group of enemies as one lump sum: either every live target is
/// defeated or none is.
///
/// Without a declared element the attack value is compared to the summed
/// armor directly. A declared element is first reduced by the combined
/// resistances of the live targets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclareAttackCommand {
    pub player_id: PlayerId,
    pub target_enemy_instance_ids: Vec<EnemyInstanceId>,
    pub attack_value: u32,
    pub attack_type: CombatType,
    pub element: Option<Element>,
}

impl DeclareAttackCommand {
    fn is_live_target(&self, enemy: &EnemyInstance) -> bool {
        enemy.is_live() && self.target_enemy_instance_ids.contains(&enemy.instance_id)
    }
}

impl CommandTransition for DeclareAttackCommand {
    fn action_type(&self) -> ActionType {
        ActionType::DeclareAttack
    }

    fn execute(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        let mut next = state.clone();
        let player = player_in(&mut next.players, &self.player_id)?;
        let combat = combat_in(&mut next.combat)?;

        for id in &self.target_enemy_instance_ids {
            combat.enemy(*id).ok_or(CommandError::EnemyNotFound(*id))?;
        }
        let targets: Vec<&EnemyInstance> = combat
            .enemies
            .iter()
            .filter(|enemy| self.is_live_target(enemy))
            .collect();

        let required_attack = targets
            .iter()
            .map(|enemy| enemy.definition.armor)
            .fold(0u32, u32::saturating_add);
        let effective_attack = match self.element {
            None => self.attack_value,
            Some(element) => calculate_effective_attack(
                &[ElementalValue::new(element, self.attack_value)],
                combine_resistances(targets.iter().map(|enemy| enemy.definition.resistances)),
            ),
        };

        if effective_attack < required_attack {
            return Ok(CommandResult::new(
                state.clone(),
                vec![GameEvent::AttackFailed {
                    target_enemy_instance_ids: self.target_enemy_instance_ids.clone(),
                    attack_value: self.attack_value,
                    effective_attack,
                    required_attack,
                }],
            ));
        }

        let mut events = Vec::new();
        let mut fame = 0u32;
        for enemy in combat
            .enemies
            .iter_mut()
            .filter(|enemy| self.is_live_target(enemy))
        {
            enemy.is_defeated = true;
            fame = fame.saturating_add(enemy.definition.fame);
            events.push(GameEvent::EnemyDefeated {
                enemy_instance_id: enemy.instance_id,
                enemy_name: enemy.definition.name.clone(),
                fame_gained: enemy.definition.fame,
            });
        }
        combat.fame_gained = combat.fame_gained.saturating_add(fame);
        combat.attacks_this_phase += 1;
        player.fame = player.fame.saturating_add(fame);

        Ok(CommandResult::new(next, events))
    }
}
