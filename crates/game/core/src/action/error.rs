//! Handler errors.
//!
//! One enum per handler, one variant per precondition. Display strings are
//! the messages players have always seen; error codes are the stable
//! contract callers translate from.

use crate::catalog::{BuildingName, ItemName};
use crate::decimal::Decimal;
use crate::error::{ErrorCategory, ErrorSeverity, GameError};
use crate::state::Timestamp;

// ============================================================================
// Building removal
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoveBuildingError {
    #[error("You do not have a Bumpkin")]
    NoBumpkin,

    #[error("This building does not exist")]
    InvalidBuilding { name: BuildingName, id: String },

    #[error("Cannot remove a building while it's under construction")]
    UnderConstruction { ready_at: Timestamp, now: Timestamp },

    #[error("Building not placed")]
    NotPlaced,

    #[error("Cannot remove Water Well that causes crops to uproot")]
    WaterWellRemoveCrops { planted: usize, supported: usize },

    #[error("Cannot remove Hen House that causes chickens that are brewing egg to be removed")]
    HenHouseRemoveBrewingChicken { chicken_id: String },

    /// The building was still on the map after the removal was applied.
    #[error("building {id} was not removed")]
    NotRemoved { id: String },
}

impl GameError for RemoveBuildingError {
    fn severity(&self) -> ErrorSeverity {
        use RemoveBuildingError::*;
        match self {
            // Construction and brewing both finish on their own.
            UnderConstruction { .. } | HenHouseRemoveBrewingChicken { .. } => {
                ErrorSeverity::Recoverable
            }
            NoBumpkin | InvalidBuilding { .. } | NotPlaced | WaterWellRemoveCrops { .. } => {
                ErrorSeverity::Validation
            }
            NotRemoved { .. } => ErrorSeverity::Internal,
        }
    }

    fn category(&self) -> ErrorCategory {
        use RemoveBuildingError::*;
        match self {
            NoBumpkin => ErrorCategory::MissingAvatar,
            InvalidBuilding { .. } => ErrorCategory::InvalidTarget,
            UnderConstruction { .. } | NotPlaced => ErrorCategory::PreconditionNotMet,
            WaterWellRemoveCrops { .. } | HenHouseRemoveBrewingChicken { .. } => {
                ErrorCategory::RestrictedOperation
            }
            NotRemoved { .. } => ErrorCategory::InvariantViolation,
        }
    }

    fn error_code(&self) -> &'static str {
        use RemoveBuildingError::*;
        match self {
            NoBumpkin => "REMOVE_BUILDING_NO_BUMPKIN",
            InvalidBuilding { .. } => "REMOVE_BUILDING_INVALID_BUILDING",
            UnderConstruction { .. } => "REMOVE_BUILDING_UNDER_CONSTRUCTION",
            NotPlaced => "REMOVE_BUILDING_NOT_PLACED",
            WaterWellRemoveCrops { .. } => "REMOVE_BUILDING_WATER_WELL_REMOVE_CROPS",
            HenHouseRemoveBrewingChicken { .. } => "REMOVE_BUILDING_HEN_HOUSE_REMOVE_BREWING_CHICKEN",
            NotRemoved { .. } => "REMOVE_BUILDING_NOT_REMOVED",
        }
    }
}

// ============================================================================
// Seed purchase
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SeedBoughtError {
    #[error("Not a full moon")]
    NotFullMoon { item: ItemName },

    #[error("This item is not a seed")]
    NotASeed { item: ItemName },

    #[error("Bumpkin not found")]
    NoBumpkin,

    #[error("Inadequate level")]
    InadequateLevel { required: u32, actual: u32 },

    #[error("Invalid amount")]
    InvalidAmount { amount: Decimal },

    #[error("Not enough stock")]
    NotEnoughStock { requested: Decimal, available: Decimal },

    #[error("You do not have the planting spot needed to plant this seed")]
    MissingPlantingSpot { spot: ItemName },

    #[error("Insufficient tokens")]
    InsufficientCoins { required: Decimal, available: Decimal },
}

impl GameError for SeedBoughtError {
    fn severity(&self) -> ErrorSeverity {
        use SeedBoughtError::*;
        match self {
            NotFullMoon { .. } | NotEnoughStock { .. } | InsufficientCoins { .. } => {
                ErrorSeverity::Recoverable
            }
            NotASeed { .. }
            | NoBumpkin
            | InadequateLevel { .. }
            | InvalidAmount { .. }
            | MissingPlantingSpot { .. } => ErrorSeverity::Validation,
        }
    }

    fn category(&self) -> ErrorCategory {
        use SeedBoughtError::*;
        match self {
            NotFullMoon { .. } => ErrorCategory::PreconditionNotMet,
            NotASeed { .. } => ErrorCategory::InvalidTarget,
            NoBumpkin => ErrorCategory::MissingAvatar,
            InadequateLevel { .. } | MissingPlantingSpot { .. } => ErrorCategory::IneligibleActor,
            InvalidAmount { .. } => ErrorCategory::MalformedAction,
            NotEnoughStock { .. } | InsufficientCoins { .. } => {
                ErrorCategory::InsufficientResources
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use SeedBoughtError::*;
        match self {
            NotFullMoon { .. } => "SEED_BOUGHT_NOT_FULL_MOON",
            NotASeed { .. } => "SEED_BOUGHT_NOT_A_SEED",
            NoBumpkin => "SEED_BOUGHT_NO_BUMPKIN",
            InadequateLevel { .. } => "SEED_BOUGHT_INADEQUATE_LEVEL",
            InvalidAmount { .. } => "SEED_BOUGHT_INVALID_AMOUNT",
            NotEnoughStock { .. } => "SEED_BOUGHT_NOT_ENOUGH_STOCK",
            MissingPlantingSpot { .. } => "SEED_BOUGHT_MISSING_PLANTING_SPOT",
            InsufficientCoins { .. } => "SEED_BOUGHT_INSUFFICIENT_COINS",
        }
    }
}

// ============================================================================
// Treasure sale
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreasureSoldError {
    #[error("You do not have a Bumpkin")]
    NoBumpkin,

    #[error("Not for sale")]
    NotForSale { item: ItemName },

    #[error("Invalid amount")]
    InvalidAmount { amount: Decimal },

    #[error("Insufficient quantity to sell")]
    InsufficientQuantity { requested: Decimal, held: Decimal },
}

impl GameError for TreasureSoldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn category(&self) -> ErrorCategory {
        use TreasureSoldError::*;
        match self {
            NoBumpkin => ErrorCategory::MissingAvatar,
            NotForSale { .. } => ErrorCategory::InvalidTarget,
            InvalidAmount { .. } => ErrorCategory::MalformedAction,
            InsufficientQuantity { .. } => ErrorCategory::InsufficientResources,
        }
    }

    fn error_code(&self) -> &'static str {
        use TreasureSoldError::*;
        match self {
            NoBumpkin => "TREASURE_SOLD_NO_BUMPKIN",
            NotForSale { .. } => "TREASURE_SOLD_NOT_FOR_SALE",
            InvalidAmount { .. } => "TREASURE_SOLD_INVALID_AMOUNT",
            InsufficientQuantity { .. } => "TREASURE_SOLD_INSUFFICIENT_QUANTITY",
        }
    }
}
