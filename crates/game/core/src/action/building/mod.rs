//! Building removal.
//!
//! A placed building goes `under construction -> active -> removed`. Removal
//! clears its coordinates, stamps a tombstone and pauses every timed process
//! it hosts by turning absolute deadlines into remaining durations.

pub mod chickens;
pub mod restriction;

use crate::action::{ActionContext, ActionKind, ActionTransition, RemoveBuildingError};
use crate::catalog::BuildingName;
use crate::config::FeatureFlags;
use crate::ledger::ActivityName;
use crate::state::{GameState, PlacedBuilding, Timestamp};

/// Takes building `id` of type `name` off the map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveBuildingAction {
    pub name: BuildingName,
    pub id: String,
}

impl RemoveBuildingAction {
    pub fn new(name: BuildingName, id: impl Into<String>) -> Self {
        Self {
            name,
            id: id.into(),
        }
    }

    fn target<'s>(&self, state: &'s GameState) -> Result<&'s PlacedBuilding, RemoveBuildingError> {
        state
            .buildings
            .find(self.name, &self.id)
            .ok_or_else(|| RemoveBuildingError::InvalidBuilding {
                name: self.name,
                id: self.id.clone(),
            })
    }
}

impl ActionTransition for RemoveBuildingAction {
    type Error = RemoveBuildingError;

    fn kind(&self) -> ActionKind {
        ActionKind::RemoveBuilding
    }

    fn pre_validate(&self, state: &GameState, ctx: &ActionContext) -> Result<(), Self::Error> {
        let now = ctx.created_at;

        if state.bumpkin.is_none() {
            return Err(RemoveBuildingError::NoBumpkin);
        }

        let building = self.target(state)?;
        if !building.is_ready(now) {
            return Err(RemoveBuildingError::UnderConstruction {
                ready_at: building.ready_at,
                now,
            });
        }
        if !building.is_placed() {
            return Err(RemoveBuildingError::NotPlaced);
        }

        if !ctx.features.contains(FeatureFlags::LANDSCAPING) {
            restriction::check_removal(self.name, &self.id, state)?;
        }

        // Eviction is all or nothing: one brewing chicken blocks the removal.
        if self.name.houses_chickens() {
            let supported = chickens::supported_chickens_without(state, &self.id, now);
            if let Some(chicken_id) = chickens::first_brewing_unsupported(state, supported) {
                return Err(RemoveBuildingError::HenHouseRemoveBrewingChicken {
                    chicken_id: chicken_id.to_owned(),
                });
            }
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &ActionContext) -> Result<(), Self::Error> {
        let now = ctx.created_at;

        let building = state
            .buildings
            .find_mut(self.name, &self.id)
            .ok_or_else(|| RemoveBuildingError::InvalidBuilding {
                name: self.name,
                id: self.id.clone(),
            })?;

        building.coordinates = None;
        building.removed_at = Some(now);
        if self.name.hosts_cooking() {
            pause_crafting(building, now);
        }
        if self.name.hosts_grow_queue() {
            pause_grow_queue(building, now);
        }

        if self.name.houses_chickens() {
            let supported = chickens::supported_chickens(state, now);
            chickens::evict_unsupported(state, supported);
        }

        let bumpkin = state.bumpkin.as_mut().ok_or(RemoveBuildingError::NoBumpkin)?;
        bumpkin.activity.increment(ActivityName::BuildingRemoved);

        Ok(())
    }

    fn post_validate(&self, state: &GameState, ctx: &ActionContext) -> Result<(), Self::Error> {
        let building = self.target(state)?;
        if building.is_placed() || building.removed_at != Some(ctx.created_at) {
            return Err(RemoveBuildingError::NotRemoved {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Cooking entries keep their remaining time instead of a stale deadline.
fn pause_crafting(building: &mut PlacedBuilding, now: Timestamp) {
    for product in building.crafting.iter_mut().flatten() {
        product.time_remaining = Some(now.millis_until(product.ready_at));
    }
}

/// Crop-machine packs keep their remaining time; `growsUntil` wins over `readyAt`.
fn pause_grow_queue(building: &mut PlacedBuilding, now: Timestamp) {
    for pack in building.queue.iter_mut().flatten() {
        if let Some(ready_at) = pack.ready_at {
            pack.paused_time_remaining = Some(now.millis_until(ready_at));
        }
        if let Some(grows_until) = pack.grows_until {
            pack.paused_time_remaining = Some(now.millis_until(grows_until));
        }
    }
}
