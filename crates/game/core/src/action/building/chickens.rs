//! Hen-house capacity and last-in-first-out eviction.

use crate::catalog::{BuildingName, ItemName};
use crate::config::GameConfig;
use crate::state::{Chicken, GameState, Timestamp};

/// Chickens each placed hen house supports at `now`.
fn capacity_per_house(state: &GameState, now: Timestamp) -> usize {
    let coop_bonus = if state.is_collectible_built(ItemName::ChickenCoop, now) {
        GameConfig::CHICKEN_COOP_BONUS
    } else {
        0
    };
    GameConfig::HEN_HOUSE_CAPACITY + coop_bonus
}

/// Chickens supported by the hen houses on the map.
pub fn supported_chickens(state: &GameState, now: Timestamp) -> usize {
    state.buildings.placed_count(BuildingName::HenHouse) * capacity_per_house(state, now)
}

/// Chickens that would still be supported once hen house `id` is gone.
pub fn supported_chickens_without(state: &GameState, id: &str, now: Timestamp) -> usize {
    state
        .buildings
        .placed_count_without(BuildingName::HenHouse, id)
        * capacity_per_house(state, now)
}

/// The chickens beyond `supported`, newest first.
pub fn unsupported_chickens(
    state: &GameState,
    supported: usize,
) -> impl Iterator<Item = (&str, &Chicken)> + '_ {
    let excess = state.chickens.len().saturating_sub(supported);
    state.chickens.newest(excess)
}

/// First chicken among the unsupported ones that is brewing an egg.
pub fn first_brewing_unsupported(state: &GameState, supported: usize) -> Option<&str> {
    unsupported_chickens(state, supported)
        .find(|(_, chicken)| chicken.is_brewing())
        .map(|(id, _)| id)
}

/// Deletes every chicken beyond `supported` and returns the evicted ids, newest first.
pub fn evict_unsupported(state: &mut GameState, supported: usize) -> Vec<String> {
    let excess = state.chickens.len().saturating_sub(supported);
    state.chickens.evict_newest(excess)
}
