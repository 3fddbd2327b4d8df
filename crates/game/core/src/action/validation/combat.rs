//! Combat rules: entering, blocking, attacking and damage assignment.

use crate::action::{PlayerAction, ValidationCode, ValidationError};
use crate::env::GameEnv;
use crate::state::{CombatPhase, CombatState, EnemyInstance, EnemyInstanceId, GameState, PlayerId};

use super::common::combat;

fn wrong_phase(message: &str) -> ValidationError {
    ValidationError::new(ValidationCode::WrongCombatPhase, message)
}

fn enemy(combat: &CombatState, id: EnemyInstanceId) -> Result<&EnemyInstance, ValidationError> {
    combat.enemy(id).ok_or_else(|| {
        ValidationError::new(ValidationCode::EnemyNotFound, format!("Enemy {id} not found"))
    })
}

fn live_enemy(combat: &CombatState, id: EnemyInstanceId) -> Result<&EnemyInstance, ValidationError> {
    let enemy = enemy(combat, id)?;
    if enemy.is_defeated {
        return Err(ValidationError::new(
            ValidationCode::EnemyAlreadyDefeated,
            format!("Enemy {id} is already defeated"),
        ));
    }
    Ok(enemy)
}

// ===== enter combat =====

pub(super) fn not_in_combat(
    state: &GameState,
    _player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    if state.in_combat() {
        return Err(ValidationError::new(
            ValidationCode::AlreadyInCombat,
            "Already in combat",
        ));
    }
    Ok(())
}

pub(super) fn has_enemies(
    _state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    match action {
        PlayerAction::EnterCombat { enemy_ids } if enemy_ids.is_empty() => Err(
            ValidationError::new(ValidationCode::NoEnemies, "Must fight at least one enemy"),
        ),
        _ => Ok(()),
    }
}

pub(super) fn enemies_are_known(
    _state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let PlayerAction::EnterCombat { enemy_ids } = action else {
        return Ok(());
    };
    let enemies = env.enemies().ok();
    for id in enemy_ids {
        if enemies.and_then(|oracle| oracle.enemy(id)).is_none() {
            return Err(ValidationError::new(
                ValidationCode::UnknownEnemy,
                format!("Unknown enemy {id}"),
            ));
        }
    }
    Ok(())
}

// ===== block =====

pub(super) fn block_phase(
    state: &GameState,
    _player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    if combat(state)?.phase != CombatPhase::Block {
        return Err(wrong_phase("Can only declare blocks in the Block phase"));
    }
    Ok(())
}

pub(super) fn block_target_is_open(
    state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let PlayerAction::DeclareBlock {
        target_enemy_instance_id,
        ..
    } = action
    else {
        return Ok(());
    };
    let target = live_enemy(combat(state)?, *target_enemy_instance_id)?;
    if target.is_blocked {
        return Err(ValidationError::new(
            ValidationCode::EnemyAlreadyBlocked,
            format!("Enemy {target_enemy_instance_id} is already blocked"),
        ));
    }
    Ok(())
}

pub(super) fn has_blocks(
    _state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    match action {
        PlayerAction::DeclareBlock { blocks, .. } if blocks.is_empty() => Err(
            ValidationError::new(ValidationCode::NothingSelected, "Must declare at least one block"),
        ),
        _ => Ok(()),
    }
}

// ===== attack =====

pub(super) fn attack_phase(
    state: &GameState,
    _player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    if !combat(state)?.phase.allows_attacks() {
        return Err(wrong_phase(
            "Can only declare attacks in the Ranged/Siege or Attack phase",
        ));
    }
    Ok(())
}

pub(super) fn attack_type_allowed(
    state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let PlayerAction::DeclareAttack { attack_type, .. } = action else {
        return Ok(());
    };
    if combat(state)?.phase == CombatPhase::RangedSiege && !attack_type.is_ranged_or_siege() {
        return Err(ValidationError::new(
            ValidationCode::InvalidAttackType,
            "Only ranged or siege attacks can be declared in the Ranged/Siege phase",
        ));
    }
    Ok(())
}

pub(super) fn has_targets(
    _state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    match action {
        PlayerAction::DeclareAttack {
            target_enemy_instance_ids,
            ..
        } if target_enemy_instance_ids.is_empty() => Err(ValidationError::new(
            ValidationCode::NothingSelected,
            "Must target at least one enemy",
        )),
        _ => Ok(()),
    }
}

pub(super) fn targets_are_live(
    state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let PlayerAction::DeclareAttack {
        target_enemy_instance_ids,
        ..
    } = action
    else {
        return Ok(());
    };
    let combat = combat(state)?;
    for id in target_enemy_instance_ids {
        live_enemy(combat, *id)?;
    }
    Ok(())
}

// ===== assign damage =====

pub(super) fn assign_damage_phase(
    state: &GameState,
    _player_id: &PlayerId,
    _action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    if combat(state)?.phase != CombatPhase::AssignDamage {
        return Err(wrong_phase("Can only assign damage in the Assign Damage phase"));
    }
    Ok(())
}

pub(super) fn damage_source_is_open(
    state: &GameState,
    _player_id: &PlayerId,
    action: &PlayerAction,
    _env: &GameEnv<'_>,
) -> Result<(), ValidationError> {
    let PlayerAction::AssignDamage { enemy_instance_id } = action else {
        return Ok(());
    };
    let source = live_enemy(combat(state)?, *enemy_instance_id)?;
    if source.is_blocked {
        return Err(ValidationError::new(
            ValidationCode::EnemyAlreadyBlocked,
            format!("Enemy {enemy_instance_id} is blocked"),
        ));
    }
    if source.damage_assigned {
        return Err(ValidationError::new(
            ValidationCode::DamageAlreadyAssigned,
            format!("Damage from enemy {enemy_instance_id} has already been assigned"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::validate;
    use crate::combat::CombatType;
    use crate::env::{EnemyColor, EnemyDefinition, RngState};
    use crate::state::{EnemyId, PlayerState};

    fn in_phase(phase: CombatPhase) -> GameState {
        let orc = EnemyDefinition::new(EnemyId::from_static("orc"), "Orc", EnemyColor::Green, 3, 3, 2);
        let mut combat = CombatState::new(vec![
            EnemyInstance::new(EnemyInstanceId(1), orc.clone()),
            EnemyInstance::new(EnemyInstanceId(2), orc),
        ]);
        combat.phase = phase;
        combat.enemies[1].is_defeated = true;
        GameState::new(vec![PlayerState::new("p1")], RngState::new(1)).with_combat(combat)
    }

    fn check(state: &GameState, action: PlayerAction) -> Result<(), ValidationError> {
        validate(state, &PlayerId::from("p1"), &action, &GameEnv::empty())
    }

    #[test]
    fn melee_is_rejected_in_ranged_phase() {
        let state = in_phase(CombatPhase::RangedSiege);
        let err = check(&state, PlayerAction::attack([EnemyInstanceId(1)], 3)).unwrap_err();
        assert_eq!(err.code, ValidationCode::InvalidAttackType);

        let ranged = PlayerAction::DeclareAttack {
            target_enemy_instance_ids: vec![EnemyInstanceId(1)],
            attack_value: 3,
            attack_type: CombatType::Ranged,
            element: None,
        };
        assert!(check(&state, ranged).is_ok());
    }

    #[test]
    fn attacks_need_live_existing_targets() {
        let state = in_phase(CombatPhase::Attack);
        assert_eq!(
            check(&state, PlayerAction::attack([], 3)).unwrap_err().code,
            ValidationCode::NothingSelected
        );
        assert_eq!(
            check(&state, PlayerAction::attack([EnemyInstanceId(9)], 3)).unwrap_err().code,
            ValidationCode::EnemyNotFound
        );
        assert_eq!(
            check(&state, PlayerAction::attack([EnemyInstanceId(2)], 3)).unwrap_err().code,
            ValidationCode::EnemyAlreadyDefeated
        );
    }

    #[test]
    fn phase_gates() {
        let state = in_phase(CombatPhase::Block);
        let assign = PlayerAction::AssignDamage {
            enemy_instance_id: EnemyInstanceId(1),
        };
        assert_eq!(check(&state, assign.clone()).unwrap_err().code, ValidationCode::WrongCombatPhase);
        assert_eq!(
            check(&state, PlayerAction::attack([EnemyInstanceId(1)], 3)).unwrap_err().code,
            ValidationCode::WrongCombatPhase
        );

        let mut state = in_phase(CombatPhase::AssignDamage);
        assert!(check(&state, assign.clone()).is_ok());
        if let Some(combat) = state.combat.as_mut() {
            combat.enemies[0].damage_assigned = true;
        }
        assert_eq!(check(&state, assign).unwrap_err().code, ValidationCode::DamageAlreadyAssigned);
    }

    #[test]
    fn combat_actions_need_combat() {
        let state = GameState::new(vec![PlayerState::new("p1")], RngState::new(1));
        assert_eq!(
            check(&state, PlayerAction::EndCombatPhase).unwrap_err().code,
            ValidationCode::NotInCombat
        );
        assert_eq!(
            check(&state, PlayerAction::EnterCombat { enemy_ids: vec![] }).unwrap_err().code,
            ValidationCode::NoEnemies
        );
        assert_eq!(
            check(
                &state,
                PlayerAction::EnterCombat {
                    enemy_ids: vec![EnemyId::from_static("orc")]
                }
            )
            .unwrap_err()
            .code,
            ValidationCode::UnknownEnemy
        );
    }
}
