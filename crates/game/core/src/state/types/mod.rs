//! State type definitions.
mod combat;
mod common;
mod player;

pub use combat::{CombatPhase, CombatState, EnemyInstance};
pub use common::{CardId, EnemyId, EnemyInstanceId, GamePhase, PlayerId, TimeOfDay};
pub use player::{AttackPool, PlayerState, TurnResources};
