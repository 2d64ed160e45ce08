//! Deterministic action resolution for a persistent farming game.
//!
//! `farm-core` defines the canonical rules (actions, engine, farm state) and
//! exposes pure APIs that can be reused by servers, replay tools and tests.
//! All state transitions flow through [`engine::GameEngine`], which takes a
//! snapshot, an [`Action`] and an [`ActionContext`] and yields either the next
//! snapshot or a typed error. Nothing here reads a clock or performs I/O.
pub mod action;
pub mod boost;
pub mod catalog;
pub mod config;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod state;

#[cfg(feature = "serde")]
pub use action::ActionParseError;
pub use action::{
    Action, ActionContext, ActionKind, ActionTransition, RemoveBuildingAction,
    RemoveBuildingError, SeedBoughtAction, SeedBoughtError, TreasureSoldAction,
    TreasureSoldError,
};
pub use boost::{BoostName, PriceCategory, PriceQuote, resolve_price};
pub use catalog::{BuildingName, ItemName, SkillName, WearableName, WearableSlot};
pub use config::{FeatureFlags, GameConfig};
pub use decimal::Decimal;
pub use engine::{
    ExecuteError, GameEngine, LoggedAction, ReplayError, Resolution, TransitionPhase,
    TransitionPhaseError, replay,
};
pub use error::{ErrorCategory, ErrorSeverity, GameError};
pub use ledger::{ActivityLedger, ActivityName, BoostsUsedAt};
pub use state::{
    Buildings, Bumpkin, Calendar, Chicken, Chickens, Collectibles, Coordinates, Draft,
    GameState, Inventory, InvariantError, PlacedBuilding, PlacedCollectible, Timestamp,
};
