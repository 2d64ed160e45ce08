//! Placed buildings and their production queues.

use std::collections::BTreeSet;

use super::{Coordinates, NameMap, Timestamp, Unmodeled};
use crate::catalog::BuildingName;
use crate::decimal::Decimal;

/// One entry of a cooking queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BuildingProduct {
    /// Name of the dish being cooked.
    pub name: String,
    pub ready_at: Timestamp,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub amount: Option<Decimal>,
    /// Set while the host building is removed; `ready_at` is stale until it is placed again.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub time_remaining: Option<i64>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

/// One pack of seeds in a crop machine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CropMachineQueueItem {
    /// Crop name as written in the snapshot.
    pub crop: String,
    pub seeds: Decimal,
    pub grow_time_remaining: i64,
    pub total_grow_time: i64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start_time: Option<Timestamp>,
    /// Until when the pack keeps growing with the oil currently loaded.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub grows_until: Option<Timestamp>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ready_at: Option<Timestamp>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub amount: Option<Decimal>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub paused_time_remaining: Option<i64>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

/// A single building instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlacedBuilding {
    pub id: String,
    /// `None` once removed (or never placed).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub coordinates: Option<Coordinates>,
    /// Construction completes at this time.
    pub ready_at: Timestamp,
    pub created_at: Timestamp,
    /// Tombstone stamped when the building is taken off the map.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub removed_at: Option<Timestamp>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub crafting: Option<Vec<BuildingProduct>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub queue: Option<Vec<CropMachineQueueItem>>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

impl PlacedBuilding {
    /// A building placed at `coordinates` that finished construction at `ready_at`.
    pub fn placed(id: impl Into<String>, coordinates: Coordinates, ready_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            coordinates: Some(coordinates),
            ready_at,
            created_at: ready_at,
            removed_at: None,
            crafting: None,
            queue: None,
            extra: Unmodeled::default(),
        }
    }

    pub fn is_placed(&self) -> bool {
        self.coordinates.is_some()
    }

    pub fn is_ready(&self, now: Timestamp) -> bool {
        self.ready_at <= now
    }
}

/// Building instances grouped by type, in placement order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Buildings {
    groups: NameMap<BuildingName, Vec<PlacedBuilding>>,
}

impl Buildings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, name: BuildingName) -> Option<&[PlacedBuilding]> {
        self.groups.get(&name).map(Vec::as_slice)
    }

    pub fn find(&self, name: BuildingName, id: &str) -> Option<&PlacedBuilding> {
        self.groups.get(&name)?.iter().find(|building| building.id == id)
    }

    pub fn find_mut(&mut self, name: BuildingName, id: &str) -> Option<&mut PlacedBuilding> {
        self.groups
            .get_mut(&name)?
            .iter_mut()
            .find(|building| building.id == id)
    }

    /// Number of instances of `name` currently on the map.
    pub fn placed_count(&self, name: BuildingName) -> usize {
        self.group(name)
            .map_or(0, |group| group.iter().filter(|b| b.is_placed()).count())
    }

    /// Like [`placed_count`](Self::placed_count), but as if instance `id` were already gone.
    pub fn placed_count_without(&self, name: BuildingName, id: &str) -> usize {
        self.group(name).map_or(0, |group| {
            group
                .iter()
                .filter(|b| b.is_placed() && b.id != id)
                .count()
        })
    }

    pub fn push(&mut self, name: BuildingName, building: PlacedBuilding) {
        self.groups.entry(name).or_default().push(building);
    }

    pub fn iter(&self) -> impl Iterator<Item = (BuildingName, &PlacedBuilding)> + '_ {
        self.groups
            .iter()
            .flat_map(|(name, group)| group.iter().map(move |building| (*name, building)))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
            && self.groups.unknown().all(|(_, group)| group.is_empty())
    }

    /// First id shared by two instances, across every building type.
    pub fn first_duplicate_id(&self) -> Option<&str> {
        let mut seen = BTreeSet::new();
        self.groups
            .values()
            .chain(self.groups.unknown().map(|(_, group)| group))
            .flatten()
            .map(|building| building.id.as_str())
            .find(|id| !seen.insert(*id))
    }
}
