//! Map-backed content snapshot.
//!
//! Hosts that load content from data files (or tests that build a handful of
//! definitions by hand) collect them into a [`ContentSnapshot`], which
//! implements every oracle trait and hands out a [`GameEnv`] borrowing it.

use std::collections::BTreeMap;

use super::{CardDefinition, CardOracle, EnemyDefinition, EnemyOracle, Env, GameEnv};
use crate::state::{CardId, EnemyId};

/// Serializable bundle of static content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentSnapshot {
    pub cards: BTreeMap<CardId, CardDefinition>,
    pub enemies: BTreeMap<EnemyId, EnemyDefinition>,
}

impl ContentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a card definition (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardDefinition) -> Self {
        self.cards.insert(card.id.clone(), card);
        self
    }

    /// Adds (or replaces) an enemy definition (builder pattern).
    #[must_use]
    pub fn with_enemy(mut self, enemy: EnemyDefinition) -> Self {
        self.enemies.insert(enemy.id.clone(), enemy);
        self
    }

    /// Borrows this snapshot as the engine environment.
    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(self as &dyn CardOracle, self as &dyn EnemyOracle)
    }
}

impl CardOracle for ContentSnapshot {
    fn card(&self, id: &CardId) -> Option<CardDefinition> {
        self.cards.get(id).cloned()
    }
}

impl EnemyOracle for ContentSnapshot {
    fn enemy(&self, id: &EnemyId) -> Option<EnemyDefinition> {
        self.enemies.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CardEffect;
    use crate::env::{CardKind, EnemyColor, OracleError};

    #[test]
    fn snapshot_serves_both_oracles() {
        let snapshot = ContentSnapshot::new()
            .with_card(CardDefinition::new(
                CardId::from_static("march"),
                "March",
                CardKind::BasicAction,
                CardEffect::movement(2),
            ))
            .with_enemy(EnemyDefinition::new(
                EnemyId::from_static("orc"),
                "Orc",
                EnemyColor::Green,
                3,
                3,
                2,
            ));
        let env = snapshot.env();

        let cards = env.cards().unwrap();
        assert_eq!(cards.card(&CardId::new("march")).unwrap().name, "March");
        assert!(cards.card(&CardId::new("rage")).is_none());
        assert_eq!(env.enemies().unwrap().enemy(&EnemyId::new("orc")).unwrap().armor, 3);
    }

    #[test]
    fn empty_env_reports_missing_oracles() {
        let env = GameEnv::empty();
        assert_eq!(env.cards().err(), Some(OracleError::CardsNotAvailable));
        assert_eq!(env.enemies().err(), Some(OracleError::EnemiesNotAvailable));
    }
}
