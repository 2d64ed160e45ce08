//! Error types for action execution pipeline.

#[cfg(feature = "serde")]
use crate::action::ActionParseError;
use crate::action::{
    ActionTransition, RemoveBuildingAction, SeedBoughtAction, TreasureSoldAction,
};
use crate::error::{ErrorCategory, ErrorSeverity, GameError};
use crate::state::InvariantError;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("remove building action failed: {0}")]
    RemoveBuilding(TransitionPhaseError<<RemoveBuildingAction as ActionTransition>::Error>),

    #[error("seed bought action failed: {0}")]
    SeedBought(TransitionPhaseError<<SeedBoughtAction as ActionTransition>::Error>),

    #[error("treasure sold action failed: {0}")]
    TreasureSold(TransitionPhaseError<<TreasureSoldAction as ActionTransition>::Error>),

    #[cfg(feature = "serde")]
    #[error(transparent)]
    Parse(#[from] ActionParseError),

    /// The committed draft broke a state-wide invariant.
    #[error("state invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl ExecuteError {
    /// Pipeline phase that rejected the action, if a handler did.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            Self::RemoveBuilding(err) => Some(err.phase),
            Self::SeedBought(err) => Some(err.phase),
            Self::TreasureSold(err) => Some(err.phase),
            #[cfg(feature = "serde")]
            Self::Parse(_) => None,
            Self::Invariant(_) => None,
        }
    }

    /// The underlying error as the common trait object.
    pub fn source_error(&self) -> &dyn GameError {
        match self {
            Self::RemoveBuilding(err) => &err.error,
            Self::SeedBought(err) => &err.error,
            Self::TreasureSold(err) => &err.error,
            #[cfg(feature = "serde")]
            Self::Parse(err) => err,
            Self::Invariant(err) => err,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.source_error().severity()
    }

    fn category(&self) -> ErrorCategory {
        self.source_error().category()
    }

    fn error_code(&self) -> &'static str {
        self.source_error().error_code()
    }
}
