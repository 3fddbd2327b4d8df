use crate::action::CardEffect;
use crate::state::CardId;

/// Deed card families.
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
pub enum CardKind {
    BasicAction,
    AdvancedAction,
    Spell,
    Artifact,
    Wound,
}

/// Static definition of a deed card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
    /// Effect applied when the card is played without mana.
    pub basic_effect: CardEffect,
}

impl CardDefinition {
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        kind: CardKind,
        basic_effect: CardEffect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            basic_effect,
        }
    }
}

/// Card definition lookup.
pub trait CardOracle: Send + Sync {
    /// Returns the definition for `id`, or `None` if the card is unknown.
    fn card(&self, id: &CardId) -> Option<CardDefinition>;
}
