//! Initial state construction.

use std::collections::BTreeSet;

use super::{CardId, GameState, InitializationError, PlayerId, PlayerState};
use crate::config::GameConfig;
use crate::env::RngState;

/// One seat at the table: who sits there and which deck they start with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatSpec {
    pub player_id: PlayerId,
    pub starting_deck: Vec<CardId>,
}

impl SeatSpec {
    pub fn new(player_id: impl Into<PlayerId>, starting_deck: Vec<CardId>) -> Self {
        Self {
            player_id: player_id.into(),
            starting_deck,
        }
    }
}

impl GameState {
    /// Seats the players, shuffles every starting deck with the seeded stream
    /// and deals each hero up to their hand limit.
    ///
    /// Decks are shuffled in seat order, so the same seed and roster always
    /// produce the same opening hands.
    pub fn setup(
        config: &GameConfig,
        seed: u32,
        seats: &[SeatSpec],
    ) -> Result<Self, InitializationError> {
        config.validate()?;

        if seats.is_empty() {
            return Err(InitializationError::NoPlayers);
        }
        if seats.len() > GameConfig::MAX_PLAYERS {
            return Err(InitializationError::TooManyPlayers {
                max: GameConfig::MAX_PLAYERS,
                requested: seats.len(),
            });
        }

        let mut seen = BTreeSet::new();
        let mut rng = RngState::new(seed);
        let mut players = Vec::with_capacity(seats.len());

        for seat in seats {
            if !seen.insert(&seat.player_id) {
                return Err(InitializationError::DuplicatePlayer(seat.player_id.clone()));
            }

            let (deck, next) = rng.shuffle(&seat.starting_deck);
            rng = next;

            let mut player = PlayerState::from_config(seat.player_id.clone(), config).with_deck(deck);
            player.draw(config.hand_limit as usize);
            players.push(player);
        }

        tracing::debug!(players = players.len(), seed, "game state initialized");

        Ok(Self::new(players, rng))
    }
}
