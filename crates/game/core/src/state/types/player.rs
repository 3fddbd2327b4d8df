use crate::combat::{CombatType, ElementalValues};
use crate::config::GameConfig;

use super::common::{CardId, PlayerId};

/// Attack gathered this turn, split by delivery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackPool {
    pub melee: ElementalValues,
    pub ranged: ElementalValues,
    pub siege: ElementalValues,
}

impl AttackPool {
    pub fn get(&self, combat_type: CombatType) -> &ElementalValues {
        match combat_type {
            CombatType::Melee => &self.melee,
            CombatType::Ranged => &self.ranged,
            CombatType::Siege => &self.siege,
        }
    }

    pub fn get_mut(&mut self, combat_type: CombatType) -> &mut ElementalValues {
        match combat_type {
            CombatType::Melee => &mut self.melee,
            CombatType::Ranged => &mut self.ranged,
            CombatType::Siege => &mut self.siege,
        }
    }
}

/// Points produced by played cards and not yet spent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResources {
    pub move_points: u32,
    pub influence_points: u32,
    pub attack: AttackPool,
    pub block: ElementalValues,
}

/// One seated hero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: PlayerId,
    /// Ordered; undo restores cards to their exact slots.
    pub hand: Vec<CardId>,
    /// Draw pile, top of deck first.
    pub deck: Vec<CardId>,
    pub play_area: Vec<CardId>,
    pub discard: Vec<CardId>,
    pub fame: u32,
    pub armor: u32,
    pub hand_limit: u32,
    pub has_taken_action_this_turn: bool,
    pub knocked_out: bool,
    pub resources: TurnResources,
}

impl PlayerState {
    /// Creates a player with rulebook defaults and empty card zones.
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self::from_config(id, &GameConfig::default())
    }

    pub fn from_config(id: impl Into<PlayerId>, config: &GameConfig) -> Self {
        Self {
            id: id.into(),
            hand: Vec::new(),
            deck: Vec::new(),
            play_area: Vec::new(),
            discard: Vec::new(),
            fame: config.starting_fame,
            armor: config.base_armor,
            hand_limit: config.hand_limit,
            has_taken_action_this_turn: false,
            knocked_out: false,
            resources: TurnResources::default(),
        }
    }

    pub fn with_hand(mut self, hand: impl IntoIterator<Item = CardId>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    pub fn with_deck(mut self, deck: impl IntoIterator<Item = CardId>) -> Self {
        self.deck = deck.into_iter().collect();
        self
    }

    pub fn with_discard(mut self, discard: impl IntoIterator<Item = CardId>) -> Self {
        self.discard = discard.into_iter().collect();
        self
    }

    pub fn with_armor(mut self, armor: u32) -> Self {
        self.armor = armor;
        self
    }

    pub fn with_hand_limit(mut self, hand_limit: u32) -> Self {
        self.hand_limit = hand_limit;
        self
    }

    pub fn with_taken_action(mut self, taken: bool) -> Self {
        self.has_taken_action_this_turn = taken;
        self
    }

    /// Number of wound cards in hand.
    pub fn wounds_in_hand(&self) -> usize {
        self.hand.iter().filter(|card| card.is_wound()).count()
    }

    /// True when every card in hand is a wound (vacuously true for an empty hand).
    pub fn hand_is_all_wounds(&self) -> bool {
        self.hand.iter().all(CardId::is_wound)
    }

    /// Draws up to `count` cards from the top of the deck into hand.
    pub fn draw(&mut self, count: usize) {
        let count = count.min(self.deck.len());
        self.hand.extend(self.deck.drain(..count));
    }
}
