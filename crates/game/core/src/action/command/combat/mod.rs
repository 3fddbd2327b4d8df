//! Combat state machine commands.
//!
//! Phases run `RangedSiege -> Block -> AssignDamage -> Attack` and then combat
//! ends. Every combat command is irreversible: revealed enemies and resolved
//! blocks, attacks and wounds cannot be taken back.
mod attack;
mod block;
mod damage;
mod enter;
mod phase;

pub use attack::DeclareAttackCommand;
pub use block::DeclareBlockCommand;
pub use damage::AssignDamageCommand;
pub use enter::EnterCombatCommand;
pub use phase::EndCombatPhaseCommand;

use crate::action::CommandError;
use crate::state::{CombatState, EnemyInstance, EnemyInstanceId};

fn enemy_in(
    combat: &mut CombatState,
    id: EnemyInstanceId,
) -> Result<&mut EnemyInstance, CommandError> {
    combat.enemy_mut(id).ok_or(CommandError::EnemyNotFound(id))
}
