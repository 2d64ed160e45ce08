//! Action domain.
//!
//! Each player action is a plain data struct implementing [`ActionTransition`].
//! The engine drives the three phases in order against a draft state:
//! `pre_validate` reads the state before mutation, `apply` mutates the draft,
//! and `post_validate` reads the mutated draft. Any error discards the draft.
//!
//! # Module Structure
//!
//! - `building`: building removal, hen-house eviction and removal restrictions
//! - `seed`: seed purchase
//! - `treasure`: treasure and exotic crop sales
//! - `kind`: the stable type tags
//! - `error`: one error enum per action
//! - `parse`: decoding untyped JSON payloads

pub mod building;
pub mod error;
pub mod kind;
#[cfg(feature = "serde")]
pub mod parse;
pub mod seed;
pub mod treasure;

pub use building::RemoveBuildingAction;
pub use error::{RemoveBuildingError, SeedBoughtError, TreasureSoldError};
pub use kind::ActionKind;
#[cfg(feature = "serde")]
pub use parse::ActionParseError;
pub use seed::{SeedBoughtAction, SeedPurchase};
pub use treasure::{TreasureSale, TreasureSoldAction};

use crate::config::FeatureFlags;
use crate::state::{GameState, Timestamp};

/// Ambient inputs of a single action: the wall-clock instant it was issued at
/// and the capabilities enabled for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ActionContext {
    pub created_at: Timestamp,
    pub features: FeatureFlags,
}

impl ActionContext {
    pub fn new(created_at: Timestamp) -> Self {
        Self {
            created_at,
            features: FeatureFlags::empty(),
        }
    }

    pub fn with_features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }
}

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;

    fn kind(&self) -> ActionKind;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _ctx: &ActionContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, ctx: &ActionContext) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _ctx: &ActionContext) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Every action the engine can resolve, tagged by its wire name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Action {
    #[cfg_attr(feature = "serde", serde(rename = "building.removed"))]
    RemoveBuilding(RemoveBuildingAction),
    #[cfg_attr(feature = "serde", serde(rename = "seed.bought"))]
    SeedBought(SeedBoughtAction),
    #[cfg_attr(feature = "serde", serde(rename = "treasure.sold"))]
    TreasureSold(TreasureSoldAction),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::RemoveBuilding(action) => action.kind(),
            Action::SeedBought(action) => action.kind(),
            Action::TreasureSold(action) => action.kind(),
        }
    }
}

impl From<RemoveBuildingAction> for Action {
    fn from(action: RemoveBuildingAction) -> Self {
        Self::RemoveBuilding(action)
    }
}

impl From<SeedBoughtAction> for Action {
    fn from(action: SeedBoughtAction) -> Self {
        Self::SeedBought(action)
    }
}

impl From<TreasureSoldAction> for Action {
    fn from(action: TreasureSoldAction) -> Self {
        Self::TreasureSold(action)
    }
}
