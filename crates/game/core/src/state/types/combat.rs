use crate::env::EnemyDefinition;

use super::common::EnemyInstanceId;

/// Ordered combat phases. Combat only ever moves forward, one step at a time.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatPhase {
    #[default]
    RangedSiege,
    Block,
    AssignDamage,
    Attack,
}

impl CombatPhase {
    /// Next phase, or `None` when ending this phase ends combat.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::RangedSiege => Some(Self::Block),
            Self::Block => Some(Self::AssignDamage),
            Self::AssignDamage => Some(Self::Attack),
            Self::Attack => None,
        }
    }

    /// Phases in which attacks may be declared.
    pub const fn allows_attacks(self) -> bool {
        matches!(self, Self::RangedSiege | Self::Attack)
    }
}

/// One enemy token in play.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub instance_id: EnemyInstanceId,
    pub definition: EnemyDefinition,
    pub is_blocked: bool,
    pub is_defeated: bool,
    pub damage_assigned: bool,
}

impl EnemyInstance {
    pub fn new(instance_id: EnemyInstanceId, definition: EnemyDefinition) -> Self {
        Self {
            instance_id,
            definition,
            is_blocked: false,
            is_defeated: false,
            damage_assigned: false,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        !self.is_defeated
    }
}

/// State of the active encounter. Present only while combat is running.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub phase: CombatPhase,
    pub enemies: Vec<EnemyInstance>,
    pub wounds_this_combat: u32,
    pub fame_gained: u32,
    pub attacks_this_phase: u32,
}

impl CombatState {
    pub fn new(enemies: Vec<EnemyInstance>) -> Self {
        Self {
            phase: CombatPhase::RangedSiege,
            enemies,
            wounds_this_combat: 0,
            fame_gained: 0,
            attacks_this_phase: 0,
        }
    }

    pub fn enemy(&self, id: EnemyInstanceId) -> Option<&EnemyInstance> {
        self.enemies.iter().find(|enemy| enemy.instance_id == id)
    }

    pub fn enemy_mut(&mut self, id: EnemyInstanceId) -> Option<&mut EnemyInstance> {
        self.enemies.iter_mut().find(|enemy| enemy.instance_id == id)
    }

    pub fn defeated_count(&self) -> u32 {
        self.enemies.iter().filter(|enemy| enemy.is_defeated).count() as u32
    }

    pub fn surviving_count(&self) -> u32 {
        self.enemies.iter().filter(|enemy| enemy.is_live()).count() as u32
    }
}
