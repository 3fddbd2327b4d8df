//! Observable events emitted by the engine.
//!
//! Events are an append-only log: the engine produces them for hosts to
//! render, persist or broadcast, and never reads them back.

use crate::action::{ActionType, RestType, ValidationCode};
use crate::combat::Element;
use crate::state::{CardId, CombatPhase, EnemyInstanceId, PlayerId};

/// Enemy as revealed by `COMBAT_STARTED`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RevealedEnemy {
    pub instance_id: EnemyInstanceId,
    pub name: String,
    pub attack: u32,
    pub attack_element: Element,
    pub armor: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        tag = "type",
        rename_all = "SCREAMING_SNAKE_CASE",
        rename_all_fields = "camelCase"
    )
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    PlayerRested {
        player_id: PlayerId,
        rest_type: RestType,
        cards_discarded: u32,
        wounds_discarded: u32,
    },
    RestUndone {
        player_id: PlayerId,
    },
    EndOfRoundAnnounced {
        player_id: PlayerId,
    },
    /// Rejected action; state is unchanged.
    InvalidAction {
        player_id: PlayerId,
        action_type: ActionType,
        code: ValidationCode,
        reason: String,
    },
    CardPlayed {
        player_id: PlayerId,
        card_id: CardId,
        powered: bool,
        sideways: bool,
        effect: String,
    },
    CardPlayUndone {
        player_id: PlayerId,
        card_id: CardId,
    },
    CombatStarted {
        player_id: PlayerId,
        enemies: Vec<RevealedEnemy>,
    },
    CombatPhaseChanged {
        previous_phase: CombatPhase,
        new_phase: CombatPhase,
    },
    EnemyBlocked {
        enemy_instance_id: EnemyInstanceId,
        block_value: u32,
    },
    BlockFailed {
        enemy_instance_id: EnemyInstanceId,
        block_value: u32,
        required_block: u32,
    },
    AttackFailed {
        target_enemy_instance_ids: Vec<EnemyInstanceId>,
        attack_value: u32,
        effective_attack: u32,
        required_attack: u32,
    },
    EnemyDefeated {
        enemy_instance_id: EnemyInstanceId,
        enemy_name: String,
        fame_gained: u32,
    },
    DamageAssigned {
        enemy_instance_id: EnemyInstanceId,
        damage: u32,
        wounds_taken: u32,
    },
    PlayerKnockedOut {
        player_id: PlayerId,
        wounds_this_combat: u32,
    },
    CombatEnded {
        victory: bool,
        total_fame_gained: u32,
        enemies_defeated: u32,
        enemies_survived: u32,
    },
}

impl GameEvent {
    /// Wire discriminant, e.g. `"PLAYER_RESTED"`.
    pub fn event_type(&self) -> &'static str {
        self.into()
    }
}
