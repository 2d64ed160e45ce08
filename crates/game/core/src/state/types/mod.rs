pub mod building;
pub mod bumpkin;
pub mod calendar;
pub mod chicken;
pub mod collectible;
pub mod common;
pub mod crop;
pub mod inventory;
pub mod named;

// Re-export building types
pub use building::{BuildingProduct, Buildings, CropMachineQueueItem, PlacedBuilding};

// Re-export avatar types
pub use bumpkin::Bumpkin;

// Re-export calendar types
pub use calendar::{Calendar, CalendarDate};

// Re-export chicken types
pub use chicken::{Chicken, Chickens};

// Re-export collectible types
pub use collectible::{Collectibles, PlacedCollectible};

// Re-export common types
pub use common::{Coordinates, Timestamp, Unmodeled};

// Re-export crop types
pub use crop::{CropPlot, PlantedCrop};

// Re-export balances
pub use inventory::Inventory;
pub use named::NameMap;
