use crate::combat::{CombatType, Element, ElementalValue};
use crate::state::{CardId, EnemyId, EnemyInstanceId};

/// Rest variants.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
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
pub enum RestType {
    /// Discard exactly one non-wound card plus any number of wounds.
    #[default]
    Standard,
    /// Discard a single wound from a hand made only of wounds.
    SlowRecovery,
}

/// Player-submitted action.
///
/// Every action is a closed, plain-data record; the dispatcher matches on the
/// variant to pick validators and build the matching command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        tag = "type",
        rename_all = "SCREAMING_SNAKE_CASE",
        rename_all_fields = "camelCase"
    )
)]
pub enum PlayerAction {
    #[cfg_attr(feature = "serde", serde(rename = "REST_ACTION"))]
    Rest {
        rest_type: RestType,
        discard_card_ids: Vec<CardId>,
        #[cfg_attr(feature = "serde", serde(default))]
        announce_end_of_round: bool,
    },

    #[cfg_attr(feature = "serde", serde(rename = "UNDO_ACTION"))]
    Undo,

    PlayCard { card_id: CardId, hand_index: usize },

    EnterCombat { enemy_ids: Vec<EnemyId> },

    DeclareBlock {
        target_enemy_instance_id: EnemyInstanceId,
        blocks: Vec<ElementalValue>,
    },

    DeclareAttack {
        target_enemy_instance_ids: Vec<EnemyInstanceId>,
        attack_value: u32,
        attack_type: CombatType,
        /// Declared element. When absent the attack value is compared to the
        /// targets' armor as is, ignoring resistances.
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        element: Option<Element>,
    },

    AssignDamage { enemy_instance_id: EnemyInstanceId },

    EndCombatPhase,
}

/// Discriminant of [`PlayerAction`], used for logging and `INVALID_ACTION`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ActionType {
    #[strum(serialize = "REST_ACTION")]
    #[cfg_attr(feature = "serde", serde(rename = "REST_ACTION"))]
    Rest,
    #[strum(serialize = "UNDO_ACTION")]
    #[cfg_attr(feature = "serde", serde(rename = "UNDO_ACTION"))]
    Undo,
    PlayCard,
    EnterCombat,
    DeclareBlock,
    DeclareAttack,
    AssignDamage,
    EndCombatPhase,
}

impl PlayerAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::Rest { .. } => ActionType::Rest,
            Self::Undo => ActionType::Undo,
            Self::PlayCard { .. } => ActionType::PlayCard,
            Self::EnterCombat { .. } => ActionType::EnterCombat,
            Self::DeclareBlock { .. } => ActionType::DeclareBlock,
            Self::DeclareAttack { .. } => ActionType::DeclareAttack,
            Self::AssignDamage { .. } => ActionType::AssignDamage,
            Self::EndCombatPhase => ActionType::EndCombatPhase,
        }
    }

    pub fn standard_rest(discard_card_ids: impl IntoIterator<Item = CardId>) -> Self {
        Self::Rest {
            rest_type: RestType::Standard,
            discard_card_ids: discard_card_ids.into_iter().collect(),
            announce_end_of_round: false,
        }
    }

    pub fn slow_recovery(discard_card_ids: impl IntoIterator<Item = CardId>) -> Self {
        Self::Rest {
            rest_type: RestType::SlowRecovery,
            discard_card_ids: discard_card_ids.into_iter().collect(),
            announce_end_of_round: false,
        }
    }

    /// Melee attack with no declared element (the common case in the Attack phase).
    pub fn attack(targets: impl IntoIterator<Item = EnemyInstanceId>, attack_value: u32) -> Self {
        Self::DeclareAttack {
            target_enemy_instance_ids: targets.into_iter().collect(),
            attack_value,
            attack_type: CombatType::Melee,
            element: None,
        }
    }

    /// Attack of a declared element; resistances of the targets apply.
    pub fn elemental_attack(
        targets: impl IntoIterator<Item = EnemyInstanceId>,
        attack_value: u32,
        attack_type: CombatType,
        element: Element,
    ) -> Self {
        Self::DeclareAttack {
            target_enemy_instance_ids: targets.into_iter().collect(),
            attack_value,
            attack_type,
            element: Some(element),
        }
    }
}
