//! Global state invariants.
//!
//! A committed state must never hold a negative balance or two buildings
//! under one id. Handlers validate before they mutate, so these errors only
//! surface when a handler is wrong.

use crate::catalog::ItemName;
use crate::decimal::Decimal;
use crate::error::{ErrorCategory, ErrorSeverity, GameError};

/// A state broke an invariant that every committed action must preserve.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// Coin balance went below zero.
    #[error("coin balance is negative ({coins})")]
    NegativeCoins { coins: Decimal },

    /// An inventory entry went below zero.
    #[error("inventory balance of {item} is negative ({amount})")]
    NegativeInventory { item: ItemName, amount: Decimal },

    /// A stock entry went below zero.
    #[error("stock of {item} is negative ({amount})")]
    NegativeStock { item: ItemName, amount: Decimal },

    /// Two building instances share an id.
    #[error("building id '{id}' is used more than once")]
    DuplicateBuildingId { id: String },
}

impl GameError for InvariantError {
    fn severity(&self) -> ErrorSeverity {
        // A committed state that breaks an invariant cannot be trusted further.
        ErrorSeverity::Fatal
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::InvariantViolation
    }

    fn error_code(&self) -> &'static str {
        use InvariantError::*;
        match self {
            NegativeCoins { .. } => "STATE_NEGATIVE_COINS",
            NegativeInventory { .. } => "STATE_NEGATIVE_INVENTORY",
            NegativeStock { .. } => "STATE_NEGATIVE_STOCK",
            DuplicateBuildingId { .. } => "STATE_DUPLICATE_BUILDING_ID",
        }
    }
}
