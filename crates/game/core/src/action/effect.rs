//! Card effects and their application to turn resources.
//!
//! A played card contributes points to the acting player's
//! [`TurnResources`]. The effect is stored as plain data on the play-card
//! command so that undo can subtract exactly what was added.

use crate::combat::{CombatType, Element};
use crate::state::TurnResources;

/// Basic (unpowered) effect of a deed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")
)]
pub enum CardEffect {
    GainMove { amount: u32 },
    GainInfluence { amount: u32 },
    GainAttack {
        amount: u32,
        element: Element,
        combat_type: CombatType,
    },
    GainBlock { amount: u32, element: Element },
}

/// Raised when an effect cannot be applied or reversed exactly. Either case
/// leaves the resources untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectError {
    /// The resource would exceed `u32::MAX`.
    #[error("cannot apply '{effect:?}': {available} already held")]
    Overflow { effect: CardEffect, available: u32 },

    /// The resource would drop below zero, so the points were spent after
    /// the card was played.
    #[error("cannot reverse '{effect:?}': only {available} remaining")]
    Underflow { effect: CardEffect, available: u32 },
}

impl EffectError {
    /// Amount held by the resource when the effect was refused.
    pub fn available(&self) -> u32 {
        match *self {
            Self::Overflow { available, .. } | Self::Underflow { available, .. } => available,
        }
    }
}

impl CardEffect {
    pub const fn movement(amount: u32) -> Self {
        Self::GainMove { amount }
    }

    pub const fn influence(amount: u32) -> Self {
        Self::GainInfluence { amount }
    }

    pub const fn attack(amount: u32) -> Self {
        Self::GainAttack {
            amount,
            element: Element::Physical,
            combat_type: CombatType::Melee,
        }
    }

    pub const fn block(amount: u32) -> Self {
        Self::GainBlock {
            amount,
            element: Element::Physical,
        }
    }

    /// Adds the effect's points to `resources`. On overflow the resources are
    /// left untouched, so [`reverse`](Self::reverse) always inverts a
    /// successful apply.
    pub fn apply(&self, resources: &mut TurnResources) -> Result<(), EffectError> {
        let overflow = |available: u32| EffectError::Overflow {
            effect: *self,
            available,
        };
        match *self {
            Self::GainMove { amount } => {
                resources.move_points = resources
                    .move_points
                    .checked_add(amount)
                    .ok_or_else(|| overflow(resources.move_points))?;
            }
            Self::GainInfluence { amount } => {
                resources.influence_points = resources
                    .influence_points
                    .checked_add(amount)
                    .ok_or_else(|| overflow(resources.influence_points))?;
            }
            Self::GainAttack {
                amount,
                element,
                combat_type,
            } => {
                let pool = resources.attack.get_mut(combat_type);
                let available = pool.get(element);
                pool.checked_add(element, amount)
                    .ok_or_else(|| overflow(available))?;
            }
            Self::GainBlock { amount, element } => {
                let available = resources.block.get(element);
                resources
                    .block
                    .checked_add(element, amount)
                    .ok_or_else(|| overflow(available))?;
            }
        }
        Ok(())
    }

    /// Subtracts the effect's points from `resources`. On underflow the
    /// resources are left untouched.
    pub fn reverse(&self, resources: &mut TurnResources) -> Result<(), EffectError> {
        let underflow = |available: u32| EffectError::Underflow {
            effect: *self,
            available,
        };
        match *self {
            Self::GainMove { amount } => {
                resources.move_points = resources
                    .move_points
                    .checked_sub(amount)
                    .ok_or_else(|| underflow(resources.move_points))?;
            }
            Self::GainInfluence { amount } => {
                resources.influence_points = resources
                    .influence_points
                    .checked_sub(amount)
                    .ok_or_else(|| underflow(resources.influence_points))?;
            }
            Self::GainAttack {
                amount,
                element,
                combat_type,
            } => {
                let pool = resources.attack.get_mut(combat_type);
                let available = pool.get(element);
                pool.checked_sub(element, amount)
                    .ok_or_else(|| underflow(available))?;
            }
            Self::GainBlock { amount, element } => {
                let available = resources.block.get(element);
                resources
                    .block
                    .checked_sub(element, amount)
                    .ok_or_else(|| underflow(available))?;
            }
        }
        Ok(())
    }

    /// Human-readable summary carried by `CARD_PLAYED`, e.g. "Move 2",
    /// "Ice Block 3" or "Ranged Fire Attack 2".
    pub fn describe(&self) -> String {
        match *self {
            Self::GainMove { amount } => format!("Move {amount}"),
            Self::GainInfluence { amount } => format!("Influence {amount}"),
            Self::GainAttack {
                amount,
                element,
                combat_type,
            } => format!(
                "{}{}Attack {amount}",
                combat_type.label(),
                element_prefix(element)
            ),
            Self::GainBlock { amount, element } => {
                format!("{}Block {amount}", element_prefix(element))
            }
        }
    }
}

fn element_prefix(element: Element) -> String {
    match element {
        Element::Physical => String::new(),
        other => format!("{} ", other.label()),
    }
}
