use std::iter;

use crate::action::{ActionType, CommandError};
use crate::combat::{is_knocked_out, wounds_from_attack};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{CardId, EnemyInstanceId, GameState, PlayerId};

use super::super::{CommandResult, CommandTransition, combat_in, player_in};
use super::enemy_in;

/// Takes an unblocked enemy's attack as wounds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignDamageCommand {
    pub player_id: PlayerId,
    pub enemy_instance_id: EnemyInstanceId,
}

impl CommandTransition for AssignDamageCommand {
    fn action_type(&self) -> ActionType {
        ActionType::AssignDamage
    }

    fn execute(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        let mut next = state.clone();
        let player = player_in(&mut next.players, &self.player_id)?;
        let combat = combat_in(&mut next.combat)?;
        let enemy = enemy_in(combat, self.enemy_instance_id)?;

        let damage = enemy.definition.attack;
        let wounds = wounds_from_attack(damage, player.armor);
        enemy.damage_assigned = true;

        player
            .hand
            .extend(iter::repeat_n(CardId::WOUND, wounds as usize));
        combat.wounds_this_combat = combat.wounds_this_combat.saturating_add(wounds);

        let mut events = vec![GameEvent::DamageAssigned {
            enemy_instance_id: self.enemy_instance_id,
            damage,
            wounds_taken: wounds,
        }];

        if !player.knocked_out && is_knocked_out(combat.wounds_this_combat, player.hand_limit) {
            player.hand.retain(CardId::is_wound);
            player.knocked_out = true;
            tracing::info!(
                player = %self.player_id,
                wounds = combat.wounds_this_combat,
                "player knocked out"
            );
            events.push(GameEvent::PlayerKnockedOut {
                player_id: self.player_id.clone(),
                wounds_this_combat: combat.wounds_this_combat,
            });
        }

        Ok(CommandResult::new(next, events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::command::combat::test_support::{enemy, in_combat};
    use crate::state::{CombatPhase, PlayerState};

    fn assign(id: u32) -> AssignDamageCommand {
        AssignDamageCommand {
            player_id: PlayerId::from("p1"),
            enemy_instance_id: EnemyInstanceId(id),
        }
    }

    #[test]
    fn crossing_the_hand_limit_knocks_out() {
        let player = PlayerState::new("p1")
            .with_hand([CardId::from_static("march"), CardId::WOUND])
            .with_hand_limit(3);
        let state = in_combat(player, CombatPhase::AssignDamage, vec![enemy("ogre", 6, 4, 3)]);

        let result = assign(1).execute(&state, &GameEnv::empty()).unwrap();
        let player = &result.state.players[0];
        assert!(player.knocked_out);
        assert_eq!(player.hand, vec![CardId::WOUND; 4]);
        assert_eq!(result.state.combat.as_ref().unwrap().wounds_this_combat, 3);
        assert_eq!(
            result.events,
            vec![
                GameEvent::DamageAssigned {
                    enemy_instance_id: EnemyInstanceId(1),
                    damage: 6,
                    wounds_taken: 3,
                },
                GameEvent::PlayerKnockedOut {
                    player_id: PlayerId::from("p1"),
                    wounds_this_combat: 3,
                },
            ]
        );
    }

    #[test]
    fn knockout_waits_for_the_crossing_assignment() {
        let player = PlayerState::new("p1").with_hand([CardId::from_static("march")]);
        let state = in_combat(
            player,
            CombatPhase::AssignDamage,
            vec![enemy("orc", 3, 3, 2), enemy("orc", 5, 3, 2)],
        );

        let first = assign(1).execute(&state, &GameEnv::empty()).unwrap();
        assert!(!first.state.players[0].knocked_out);
        assert_eq!(first.events.len(), 1);
        assert!(first.state.combat.as_ref().unwrap().enemies[0].damage_assigned);

        // 2 wounds, then 3 more reaches the default hand limit of 5
        let second = assign(2).execute(&first.state, &GameEnv::empty()).unwrap();
        assert!(second.state.players[0].knocked_out);
        assert_eq!(second.events.len(), 2);
    }
}
