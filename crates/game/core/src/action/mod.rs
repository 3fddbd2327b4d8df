//! Action domain: what players submit and how it becomes a state change.
//!
//! # Module Structure
//!
//! - `types`: [`PlayerAction`] (the closed set of player inputs), [`ActionType`], [`RestType`]
//! - `effect`: [`CardEffect`], the basic effect of a deed card
//! - `error`: [`ValidationError`] (user-facing) and [`CommandError`] (contract violations)
//! - `validation`: ordered validator pipelines per action type
//! - `command`: executable [`Command`] records with optional undo
pub mod command;
pub mod effect;
pub mod error;
pub mod types;
pub mod validation;

pub use command::{
    AssignDamageCommand, Command, CommandResult, CommandTransition, DeclareAttackCommand,
    DeclareBlockCommand, EndCombatPhaseCommand, EnterCombatCommand, PlayCardCommand, RestCommand,
};
pub use effect::{CardEffect, EffectError};
pub use error::{CommandError, ValidationCode, ValidationError};
pub use types::{ActionType, PlayerAction, RestType};
pub use validation::{Validator, validate, validators_for};
