//! Combat resolution math.
//!
//! Pure, side-effect free helpers used by the combat commands:
//!
//! - `elemental`: block efficiency, resistances and effective totals
//! - `damage`: wounds from unblocked attacks and the knockout threshold
//!
//! The phase state machine itself lives with the commands that drive it
//! (see [`crate::action::command`]).

pub mod damage;
pub mod elemental;

pub use damage::{is_knocked_out, wounds_from_attack};
pub use elemental::{
    Element, ElementalValue, ElementalValues, Resistances, calculate_effective_attack,
    calculate_total_block, combine_resistances, is_attack_resisted, is_block_efficient,
};

/// How an attack is delivered. Ranged and siege attacks may be declared in the
/// Ranged/Siege phase; every type may be declared in the Attack phase.
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
pub enum CombatType {
    #[default]
    Melee,
    Ranged,
    Siege,
}

impl CombatType {
    pub const fn is_ranged_or_siege(self) -> bool {
        matches!(self, Self::Ranged | Self::Siege)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Melee => "",
            Self::Ranged => "Ranged ",
            Self::Siege => "Siege ",
        }
    }
}
