//! Common error infrastructure for mage-core.
//!
//! This module provides shared types and traits used across all error types in
//! mage-core. Domain-specific errors (`ValidationError`, `CommandError`,
//! `OracleError`, ...) are defined in their respective modules alongside the
//! code that produces them.
//!
//! # Error Classes
//!
//! The engine distinguishes two disjoint classes:
//!
//! - **User-facing**: rule violations caught by the validation pipeline. They
//!   are reported as `INVALID_ACTION` events and never escalated.
//! - **Contract violations**: a command referenced a player, enemy or combat
//!   that does not exist, or undo was requested on an irreversible command.
//!   These abort the call with no observable mutation.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed after another action
/// - **Validation**: invalid input, should not be retried unchanged
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: required collaborator missing or invariant broken
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry after the state changes.
    ///
    /// Examples: not your turn, nothing to undo
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: card not in hand, wrong rest composition
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: missing enemy instance, hand slot mismatch during undo
    Internal,

    /// Fatal error - engine cannot continue with this state.
    ///
    /// Examples: missing content oracle, post-execution invariant violated
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all mage-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
