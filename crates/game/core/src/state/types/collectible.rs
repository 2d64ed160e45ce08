use super::{Coordinates, NameMap, Timestamp, Unmodeled};
use crate::catalog::ItemName;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlacedCollectible {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub coordinates: Option<Coordinates>,
    pub ready_at: Timestamp,
    pub created_at: Timestamp,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

impl PlacedCollectible {
    pub fn placed(id: impl Into<String>, coordinates: Coordinates, ready_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            coordinates: Some(coordinates),
            ready_at,
            created_at: ready_at,
            extra: Unmodeled::default(),
        }
    }

    /// On the map and finished.
    pub fn is_active(&self, now: Timestamp) -> bool {
        self.coordinates.is_some() && self.ready_at <= now
    }
}

/// Placed collectibles grouped by item name.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Collectibles {
    groups: NameMap<ItemName, Vec<PlacedCollectible>>,
}

impl Collectibles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, name: ItemName) -> Option<&[PlacedCollectible]> {
        self.groups.get(&name).map(Vec::as_slice)
    }

    pub fn push(&mut self, name: ItemName, collectible: PlacedCollectible) {
        self.groups.entry(name).or_default().push(collectible);
    }

    /// True when at least one instance of `name` is placed and finished at `now`.
    pub fn is_built(&self, name: ItemName, now: Timestamp) -> bool {
        self.group(name)
            .is_some_and(|group| group.iter().any(|placed| placed.is_active(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_requires_placement_and_completion() {
        let mut collectibles = Collectibles::new();
        collectibles.push(
            ItemName::Kuebiko,
            PlacedCollectible::placed("k", Coordinates::ORIGIN, Timestamp(100)),
        );

        assert!(!collectibles.is_built(ItemName::Kuebiko, Timestamp(99)));
        assert!(collectibles.is_built(ItemName::Kuebiko, Timestamp(100)));
        assert!(!collectibles.is_built(ItemName::Camel, Timestamp(100)));

        let mut stored = PlacedCollectible::placed("c", Coordinates::ORIGIN, Timestamp(0));
        stored.coordinates = None;
        collectibles.push(ItemName::Camel, stored);
        assert!(!collectibles.is_built(ItemName::Camel, Timestamp(100)));
    }
}
