//! Building-specific removal restrictions.
//!
//! A restriction can be lifted by the landscaping capability. Hen-house
//! eviction is not a restriction and lives in [`super::chickens`].

use crate::action::RemoveBuildingError;
use crate::catalog::BuildingName;
use crate::config::GameConfig;
use crate::state::GameState;

fn plots_watered_by(wells: usize) -> usize {
    GameConfig::BASE_SUPPORTED_PLOTS + GameConfig::PLOTS_PER_WATER_WELL * wells
}

/// Crop plots watered by the wells on the map.
pub fn supported_plots(state: &GameState) -> usize {
    plots_watered_by(state.buildings.placed_count(BuildingName::WaterWell))
}

/// Crop plots currently growing something.
pub fn planted_plots(state: &GameState) -> usize {
    state.crops.values().filter(|plot| plot.is_planted()).count()
}

/// Checks whether removing building `id` of type `name` is restricted.
pub fn check_removal(
    name: BuildingName,
    id: &str,
    state: &GameState,
) -> Result<(), RemoveBuildingError> {
    if name.waters_plots() {
        let supported = plots_watered_by(state.buildings.placed_count_without(name, id));
        let planted = planted_plots(state);
        if planted > supported {
            return Err(RemoveBuildingError::WaterWellRemoveCrops { planted, supported });
        }
    }

    Ok(())
}
