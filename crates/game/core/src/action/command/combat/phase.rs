use crate::action::{ActionType, CommandError};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{GameState, PlayerId};

use super::super::{CommandResult, CommandTransition, combat_in, ensure_player};

/// Advances combat to its next phase, ending it after the Attack phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndCombatPhaseCommand {
    pub player_id: PlayerId,
}

impl CommandTransition for EndCombatPhaseCommand {
    fn action_type(&self) -> ActionType {
        ActionType::EndCombatPhase
    }

    fn execute(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<CommandResult, CommandError> {
        ensure_player(state, &self.player_id)?;
        let mut next = state.clone();
        let combat = combat_in(&mut next.combat)?;
        let previous_phase = combat.phase;

        let event = match previous_phase.next() {
            Some(new_phase) => {
                combat.phase = new_phase;
                combat.attacks_this_phase = 0;
                GameEvent::CombatPhaseChanged {
                    previous_phase,
                    new_phase,
                }
            }
            None => {
                let enemies_survived = combat.surviving_count();
                let event = GameEvent::CombatEnded {
                    victory: enemies_survived == 0,
                    total_fame_gained: combat.fame_gained,
                    enemies_defeated: combat.defeated_count(),
                    enemies_survived,
                };
                next.combat = None;
                tracing::info!(player = %self.player_id, ?event, "combat ended");
                event
            }
        };

        Ok(CommandResult::new(next, vec![event]))
    }
}
