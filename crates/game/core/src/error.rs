//! Common error infrastructure for farm-core.
//!
//! This module provides shared types and traits used across all error types in farm-core.
//! Handler-specific errors (e.g., `SeedBoughtError`, `RemoveBuildingError`) are defined
//! alongside the actions they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action has its own error type with one variant per precondition
//! - **Stable Codes**: Every variant maps to a stable symbolic code the caller can translate
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Taxonomy**: Every variant also maps onto a small cross-handler [`ErrorCategory`]

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The action may succeed later without changing it (e.g. stock refills)
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating corrupted game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed later with the same action.
    ///
    /// Examples: building still under construction, not enough coins
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown item, non-integer amount
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs in a handler and should be investigated.
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    ///
    /// Examples: a committed state with a negative balance
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

/// Cross-handler error taxonomy.
///
/// Each handler keeps its own precise error enum; the category groups those
/// variants so callers can share message templates across handler families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// The player has no avatar.
    MissingAvatar,
    /// Unknown item, building or instance id.
    InvalidTarget,
    /// Temporal precondition failed (under construction, wrong moon phase).
    PreconditionNotMet,
    /// Not enough coins, stock or inventory.
    InsufficientResources,
    /// Actor lacks the level or prerequisite item.
    IneligibleActor,
    /// A domain-specific restriction forbids the operation.
    RestrictedOperation,
    /// The action tag has no registered handler.
    UnknownAction,
    /// The action payload could not be decoded or has an invalid amount.
    MalformedAction,
    /// A handler produced a state that breaks a global invariant.
    InvariantViolation,
}

/// Common trait for all farm-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are part of the public contract; never rename them
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the taxonomy bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// Returns a stable string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
