//! Elemental interactions for block and attack resolution.
//!
//! Four elements exist: Physical, Fire, Ice and Cold Fire. Blocks are either
//! *efficient* against an attack element (full value) or inefficient (pooled,
//! halved, rounded down). Attacks are either unresisted (full value) or
//! resisted (pooled, halved, rounded down). Both rules share the same
//! arithmetic: `full + floor(pooled / 2)`.

use bitflags::bitflags;

/// Element of an attack or block.
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
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    #[default]
    Physical,
    Fire,
    Ice,
    ColdFire,
}

impl Element {
    /// Label used in effect descriptions ("Cold Fire Block 3").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Fire => "Fire",
            Self::Ice => "Ice",
            Self::ColdFire => "Cold Fire",
        }
    }
}

bitflags! {
    /// Enemy resistances. Cold Fire has no flag of its own: it is resisted only
    /// when FIRE and ICE are both present.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Resistances: u8 {
        const PHYSICAL = 1 << 0;
        const FIRE     = 1 << 1;
        const ICE      = 1 << 2;
    }
}

impl Resistances {
    pub const NONE: Self = Self::empty();
}

/// A single block or attack contribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementalValue {
    pub element: Element,
    pub value: u32,
}

impl ElementalValue {
    pub const fn new(element: Element, value: u32) -> Self {
        Self { element, value }
    }

    pub const fn physical(value: u32) -> Self {
        Self::new(Element::Physical, value)
    }
}

/// Per-element accumulator (attack or block gathered from played cards).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementalValues {
    pub physical: u32,
    pub fire: u32,
    pub ice: u32,
    pub cold_fire: u32,
}

impl ElementalValues {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Physical => self.physical,
            Element::Fire => self.fire,
            Element::Ice => self.ice,
            Element::ColdFire => self.cold_fire,
        }
    }

    fn slot_mut(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Physical => &mut self.physical,
            Element::Fire => &mut self.fire,
            Element::Ice => &mut self.ice,
            Element::ColdFire => &mut self.cold_fire,
        }
    }

    /// Adds `amount`; returns `None` (leaving the value untouched) on overflow.
    pub fn checked_add(&mut self, element: Element, amount: u32) -> Option<()> {
        let slot = self.slot_mut(element);
        *slot = slot.checked_add(amount)?;
        Some(())
    }

    /// Removes `amount`; returns `None` (leaving the value untouched) on underflow.
    pub fn checked_sub(&mut self, element: Element, amount: u32) -> Option<()> {
        let slot = self.slot_mut(element);
        *slot = slot.checked_sub(amount)?;
        Some(())
    }

    pub fn total(&self) -> u32 {
        [self.fire, self.ice, self.cold_fire]
            .into_iter()
            .fold(self.physical, u32::saturating_add)
    }
}

#[inline]
fn full_plus_halved(full: u32, halved: u32) -> u32 {
    full.saturating_add(halved / 2)
}

/// Whether a block element counts at full value against an attack element.
///
/// - Any block is efficient against Physical
/// - Ice or Cold Fire is efficient against Fire
/// - Fire or Cold Fire is efficient against Ice
/// - Only Cold Fire is efficient against Cold Fire
pub fn is_block_efficient(block: Element, attack: Element) -> bool {
    match attack {
        Element::Physical => true,
        Element::Fire => matches!(block, Element::Ice | Element::ColdFire),
        Element::Ice => matches!(block, Element::Fire | Element::ColdFire),
        Element::ColdFire => block == Element::ColdFire,
    }
}

/// Total effective block against an attack element.
///
/// Inefficient blocks are summed first, then halved (rounded down), then added
/// to the full value of all efficient blocks.
pub fn calculate_total_block(blocks: &[ElementalValue], attack: Element) -> u32 {
    let (efficient, inefficient) =
        blocks
            .iter()
            .fold((0u32, 0u32), |(efficient, inefficient), block| {
                if is_block_efficient(block.element, attack) {
                    (efficient.saturating_add(block.value), inefficient)
                } else {
                    (efficient, inefficient.saturating_add(block.value))
                }
            });
    full_plus_halved(efficient, inefficient)
}

/// Whether an attack element is halved by the given resistances.
pub fn is_attack_resisted(attack: Element, resistances: Resistances) -> bool {
    match attack {
        Element::Physical => resistances.contains(Resistances::PHYSICAL),
        Element::Fire => resistances.contains(Resistances::FIRE),
        Element::Ice => resistances.contains(Resistances::ICE),
        Element::ColdFire => resistances.contains(Resistances::FIRE | Resistances::ICE),
    }
}

/// Effective attack against a defender with the given resistances.
pub fn calculate_effective_attack(attacks: &[ElementalValue], resistances: Resistances) -> u32 {
    let (unresisted, resisted) =
        attacks
            .iter()
            .fold((0u32, 0u32), |(unresisted, resisted), attack| {
                if is_attack_resisted(attack.element, resistances) {
                    (unresisted, resisted.saturating_add(attack.value))
                } else {
                    (unresisted.saturating_add(attack.value), resisted)
                }
            });
    full_plus_halved(unresisted, resisted)
}

/// Resistances of a group of enemies attacked together: any member's
/// resistance applies to the whole group. An empty group resists nothing.
pub fn combine_resistances<I>(resistances: I) -> Resistances
where
    I: IntoIterator<Item = Resistances>,
{
    resistances
        .into_iter()
        .fold(Resistances::NONE, |combined, next| combined | next)
}
