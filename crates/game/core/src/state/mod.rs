//! Authoritative game state representation.
//!
//! [`GameState`] is an immutable snapshot: commands read one snapshot and
//! produce the next. Only the substructures a transition touches (the player
//! list, the combat block) are copied into the new value; the previous
//! snapshot is never aliased as mutable.
mod error;
mod setup;
pub mod types;

pub use error::{InitializationError, InvariantViolation};
pub use setup::SeatSpec;
pub use types::{
    AttackPool, CardId, CombatPhase, CombatState, EnemyId, EnemyInstance, EnemyInstanceId,
    GamePhase, PlayerId, PlayerState, TimeOfDay, TurnResources,
};

use crate::env::RngState;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Seated players in turn order.
    pub players: Vec<PlayerState>,
    /// Active encounter; `None` outside combat.
    pub combat: Option<CombatState>,
    /// Seeded stream threaded through every random draw.
    pub rng: RngState,
    pub round: u32,
    pub phase: GamePhase,
    pub time_of_day: TimeOfDay,
    /// Index into `players` of the player whose turn it is.
    pub current_player_index: usize,
    /// Player who announced the end of the round, if anyone has.
    pub end_of_round_announced_by: Option<PlayerId>,

    /// Sequential enemy instance allocator (monotonically increasing, never reused).
    next_enemy_instance_id: u32,
}

impl GameState {
    /// Creates a state in the first round with the given players.
    pub fn new(players: Vec<PlayerState>, rng: RngState) -> Self {
        Self {
            players,
            combat: None,
            rng,
            round: 1,
            phase: GamePhase::Round,
            time_of_day: TimeOfDay::Day,
            current_player_index: 0,
            end_of_round_announced_by: None,
            next_enemy_instance_id: 1,
        }
    }

    /// Attaches an active combat (builder pattern, mostly for tests and replays).
    #[must_use]
    pub fn with_combat(mut self, combat: CombatState) -> Self {
        self.next_enemy_instance_id = combat
            .enemies
            .iter()
            .map(|enemy| enemy.instance_id.0.saturating_add(1))
            .max()
            .unwrap_or(0)
            .max(self.next_enemy_instance_id);
        self.combat = Some(combat);
        self
    }

    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|player| &player.id == id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|player| &player.id == id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut PlayerState> {
        self.players.iter_mut().find(|player| &player.id == id)
    }

    pub fn current_player(&self) -> Option<&PlayerState> {
        self.players.get(self.current_player_index)
    }

    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    /// Allocates a fresh enemy instance id.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation::EnemyInstanceIdOverflow` if ids are exhausted.
    pub fn allocate_enemy_instance_id(&mut self) -> Result<EnemyInstanceId, InvariantViolation> {
        let id = EnemyInstanceId(self.next_enemy_instance_id);
        self.next_enemy_instance_id = self
            .next_enemy_instance_id
            .checked_add(1)
            .ok_or(InvariantViolation::EnemyInstanceIdOverflow)?;
        Ok(id)
    }

    /// Verifies the invariants every completed transition must preserve.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.players.is_empty() && self.current_player_index >= self.players.len() {
            return Err(InvariantViolation::CurrentPlayerOutOfRange {
                index: self.current_player_index,
                players: self.players.len(),
            });
        }

        for player in &self.players {
            if player.armor == 0 || player.hand_limit == 0 {
                return Err(InvariantViolation::NonPositiveLimits(player.id.clone()));
            }
            if player.knocked_out && !player.hand_is_all_wounds() {
                return Err(InvariantViolation::KnockedOutWithCards(player.id.clone()));
            }
        }

        if let Some(combat) = &self.combat {
            for (index, enemy) in combat.enemies.iter().enumerate() {
                if combat.enemies[..index]
                    .iter()
                    .any(|other| other.instance_id == enemy.instance_id)
                {
                    return Err(InvariantViolation::DuplicateEnemyInstance(enemy.instance_id));
                }
            }
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Vec::new(), RngState::default())
    }
}
