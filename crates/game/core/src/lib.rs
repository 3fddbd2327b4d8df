//! Deterministic rules core: actions, commands, combat and events.
//!
//! `mage-core` validates player-submitted actions, executes them as
//! reversible or irreversible state transitions, resolves combat (block
//! efficiency, elemental resistance, damage and knockout) and emits a
//! structured event log. Every operation is a pure function from
//! `(state, player, action)` to `(new state, events)`; all of it flows
//! through [`engine::GameEngine`].
//!
//! Static content (card and enemy definitions) is supplied by the host
//! through the oracle traits in [`env`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{
    ActionType, CardEffect, Command, CommandError, CommandResult, CommandTransition,
    PlayerAction, RestType, ValidationCode, ValidationError,
};
pub use combat::{CombatType, Element, ElementalValue, Resistances};
pub use config::GameConfig;
pub use engine::{
    ActionOutcome, ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, UndoStack,
};
pub use env::{
    CardDefinition, CardKind, CardOracle, ContentSnapshot, EnemyColor, EnemyDefinition,
    EnemyOracle, Env, GameEnv, OracleError, RngState,
};
pub use error::{ErrorSeverity, GameError};
pub use event::{GameEvent, RevealedEnemy};
pub use state::{
    CardId, CombatPhase, CombatState, EnemyId, EnemyInstance, EnemyInstanceId, GamePhase,
    GameState, InitializationError, InvariantViolation, PlayerId, PlayerState, SeatSpec,
    TimeOfDay, TurnResources,
};
