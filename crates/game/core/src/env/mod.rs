//! Traits describing read-only content and the deterministic RNG.
//!
//! Oracles expose static card and enemy definitions. The [`Env`] aggregate
//! bundles them so commands can look up what they need without hard coupling
//! to concrete content tables, which live outside this crate.
mod cards;
mod enemies;
mod error;
mod rng;
mod snapshot;

pub use cards::{CardDefinition, CardKind, CardOracle};
pub use enemies::{EnemyColor, EnemyDefinition, EnemyOracle};
pub use error::OracleError;
pub use rng::RngState;
pub use snapshot::ContentSnapshot;

/// Aggregates read-only oracles required by validators and commands.
pub struct Env<'a, C, E>
where
    C: CardOracle + ?Sized,
    E: EnemyOracle + ?Sized,
{
    cards: Option<&'a C>,
    enemies: Option<&'a E>,
}

pub type GameEnv<'a> = Env<'a, dyn CardOracle + 'a, dyn EnemyOracle + 'a>;

impl<C, E> Clone for Env<'_, C, E>
where
    C: CardOracle + ?Sized,
    E: EnemyOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, E> Copy for Env<'_, C, E>
where
    C: CardOracle + ?Sized,
    E: EnemyOracle + ?Sized,
{
}

impl<'a, C, E> Env<'a, C, E>
where
    C: CardOracle + ?Sized,
    E: EnemyOracle + ?Sized,
{
    pub fn new(cards: Option<&'a C>, enemies: Option<&'a E>) -> Self {
        Self { cards, enemies }
    }

    pub fn with_all(cards: &'a C, enemies: &'a E) -> Self {
        Self::new(Some(cards), Some(enemies))
    }

    pub fn empty() -> Self {
        Self {
            cards: None,
            enemies: None,
        }
    }

    /// Returns the CardOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CardsNotAvailable` if no card oracle was provided.
    pub fn cards(&self) -> Result<&'a C, OracleError> {
        self.cards.ok_or(OracleError::CardsNotAvailable)
    }

    /// Returns the EnemyOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EnemiesNotAvailable` if no enemy oracle was provided.
    pub fn enemies(&self) -> Result<&'a E, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    /// Looks up a card definition, failing on a missing oracle or unknown id.
    pub fn card(&self, id: &crate::state::CardId) -> Result<CardDefinition, OracleError> {
        self.cards()?
            .card(id)
            .ok_or_else(|| OracleError::CardNotFound(id.clone()))
    }

    /// Looks up an enemy definition, failing on a missing oracle or unknown id.
    pub fn enemy(&self, id: &crate::state::EnemyId) -> Result<EnemyDefinition, OracleError> {
        self.enemies()?
            .enemy(id)
            .ok_or_else(|| OracleError::EnemyNotFound(id.clone()))
    }
}
