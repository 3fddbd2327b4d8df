use crate::combat::{Element, Resistances};
use crate::state::EnemyId;

/// Enemy token back color.
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
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyColor {
    Green,
    Gray,
    Brown,
    Violet,
    Red,
    White,
}

/// Immutable enemy definition shared by every token of that type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDefinition {
    pub id: EnemyId,
    pub name: String,
    pub color: EnemyColor,
    pub attack: u32,
    pub attack_element: Element,
    pub armor: u32,
    pub fame: u32,
    pub resistances: Resistances,
}

impl EnemyDefinition {
    /// Physical attacker without resistances.
    pub fn new(
        id: EnemyId,
        name: impl Into<String>,
        color: EnemyColor,
        attack: u32,
        armor: u32,
        fame: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            attack,
            attack_element: Element::Physical,
            armor,
            fame,
            resistances: Resistances::NONE,
        }
    }

    pub fn with_attack_element(mut self, element: Element) -> Self {
        self.attack_element = element;
        self
    }

    pub fn with_resistances(mut self, resistances: Resistances) -> Self {
        self.resistances = resistances;
        self
    }
}

/// Enemy definition lookup.
pub trait EnemyOracle: Send + Sync {
    /// Returns the definition for `id`, or `None` if the enemy is unknown.
    fn enemy(&self, id: &EnemyId) -> Option<EnemyDefinition>;
}
