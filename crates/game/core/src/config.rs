use crate::state::InitializationError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Armor every hero starts with; divides incoming enemy attack into wounds.
    pub base_armor: u32,
    /// Starting hand limit; also the knockout threshold for wounds in one combat.
    pub hand_limit: u32,
    /// Fame every hero starts with.
    pub starting_fame: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const MAX_PLAYERS: usize = 4;
    pub const BASE_ARMOR: u32 = 2;
    pub const DEFAULT_HAND_LIMIT: u32 = 5;

    pub fn new() -> Self {
        Self {
            base_armor: Self::BASE_ARMOR,
            hand_limit: Self::DEFAULT_HAND_LIMIT,
            starting_fame: 0,
        }
    }

    pub fn with_base_armor(mut self, base_armor: u32) -> Self {
        self.base_armor = base_armor;
        self
    }

    pub fn with_hand_limit(mut self, hand_limit: u32) -> Self {
        self.hand_limit = hand_limit;
        self
    }

    pub fn with_starting_fame(mut self, starting_fame: u32) -> Self {
        self.starting_fame = starting_fame;
        self
    }

    /// Rejects configurations that would break player invariants.
    pub fn validate(&self) -> Result<(), InitializationError> {
        if self.base_armor == 0 {
            return Err(InitializationError::ZeroArmor);
        }
        if self.hand_limit == 0 {
            return Err(InitializationError::ZeroHandLimit);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
