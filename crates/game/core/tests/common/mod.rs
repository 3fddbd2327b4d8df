//! Shared fixtures for integration tests.
#![allow(dead_code)]

use mage_core::{
    CardDefinition, CardEffect, CardId, CardKind, CombatType, ContentSnapshot, Element,
    EnemyColor, EnemyDefinition, EnemyId, GameEngine, GameEvent, GameState, PlayerAction,
    PlayerId, PlayerState, Resistances, RngState,
};

pub const MARCH: CardId = CardId::from_static("march");
pub const RAGE: CardId = CardId::from_static("rage");
pub const DETERMINATION: CardId = CardId::from_static("determination");
pub const ICE_BOLT: CardId = CardId::from_static("ice_bolt");
pub const WOUND: CardId = CardId::WOUND;

pub const ORC: EnemyId = EnemyId::from_static("orc");
pub const GOLEM: EnemyId = EnemyId::from_static("golem");
pub const OGRE: EnemyId = EnemyId::from_static("ogre");
pub const FIRE_MAGE: EnemyId = EnemyId::from_static("fire_mage");
pub const GARGOYLE: EnemyId = EnemyId::from_static("gargoyle");

pub fn content() -> ContentSnapshot {
    ContentSnapshot::new()
        .with_card(CardDefinition::new(
            MARCH,
            "March",
            CardKind::BasicAction,
            CardEffect::movement(2),
        ))
        .with_card(CardDefinition::new(
            RAGE,
            "Rage",
            CardKind::BasicAction,
            CardEffect::attack(2),
        ))
        .with_card(CardDefinition::new(
            DETERMINATION,
            "Determination",
            CardKind::BasicAction,
            CardEffect::block(2),
        ))
        .with_card(CardDefinition::new(
            ICE_BOLT,
            "Ice Bolt",
            CardKind::Spell,
            CardEffect::GainAttack {
                amount: 3,
                element: Element::Ice,
                combat_type: CombatType::Ranged,
            },
        ))
        .with_enemy(EnemyDefinition::new(ORC, "Orc", EnemyColor::Green, 3, 3, 2))
        .with_enemy(EnemyDefinition::new(GOLEM, "Golem", EnemyColor::Brown, 2, 4, 4))
        .with_enemy(EnemyDefinition::new(OGRE, "Ogre", EnemyColor::Brown, 6, 4, 3))
        .with_enemy(
            EnemyDefinition::new(FIRE_MAGE, "Fire Mage", EnemyColor::Red, 6, 5, 5)
                .with_attack_element(Element::Fire),
        )
        .with_enemy(
            EnemyDefinition::new(GARGOYLE, "Gargoyle", EnemyColor::Brown, 5, 7, 5)
                .with_resistances(Resistances::PHYSICAL),
        )
}

pub fn p1() -> PlayerId {
    PlayerId::from("p1")
}

pub fn p2() -> PlayerId {
    PlayerId::from("p2")
}

/// Single-player game with the given hand.
pub fn solo(hand: Vec<CardId>) -> GameState {
    GameState::new(vec![PlayerState::new("p1").with_hand(hand)], RngState::new(42))
}

/// Engine, state and content for one game, threaded through each action.
pub struct Session {
    pub engine: GameEngine,
    pub state: GameState,
    pub content: ContentSnapshot,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self {
            engine: GameEngine::new(),
            state,
            content: content(),
        }
    }

    /// Applies an action and returns its events. Panics on contract violations.
    pub fn act(&mut self, player: &PlayerId, action: PlayerAction) -> Vec<GameEvent> {
        let outcome = self
            .engine
            .process_action(&self.state, player, &action, &self.content.env())
            .expect("no contract violation");
        self.state = outcome.state;
        outcome.events
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.players[0]
    }
}

/// Reason carried by a single `INVALID_ACTION` event.
pub fn rejection(events: &[GameEvent]) -> Option<&str> {
    match events {
        [GameEvent::InvalidAction { reason, .. }] => Some(reason),
        _ => None,
    }
}
