//! Authoritative game state representation.
//!
//! This module owns the snapshot a player's farm is made of. The caller owns
//! each snapshot between actions; handlers only ever touch a [`Draft`].
pub mod draft;
pub mod error;
pub mod types;

use std::collections::BTreeMap;

pub use draft::Draft;
pub use error::InvariantError;
pub use types::{
    BuildingProduct, Buildings, Bumpkin, Calendar, CalendarDate, Chicken, Chickens,
    Collectibles, Coordinates, CropMachineQueueItem, CropPlot, Inventory, NameMap,
    PlacedBuilding, PlacedCollectible, PlantedCrop, Timestamp, Unmodeled,
};

use crate::catalog::{ItemName, WearableName};
use crate::decimal::Decimal;
use crate::ledger::BoostsUsedAt;

/// Canonical snapshot of one player's farm.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GameState {
    /// Coin balance. Never negative after a committed action.
    pub coins: Decimal,
    /// Items held by the player.
    pub inventory: Inventory,
    /// Items the shop can still sell.
    pub stock: Inventory,
    /// The player's avatar; most actions require one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bumpkin: Option<Bumpkin>,
    pub buildings: Buildings,
    pub collectibles: Collectibles,
    pub chickens: Chickens,
    /// Crop plots by id.
    pub crops: BTreeMap<String, CropPlot>,
    pub calendar: Calendar,
    pub boosts_used_at: BoostsUsedAt,
    /// Snapshot sections the engine never reads, written back as loaded.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

impl GameState {
    /// Creates an empty farm with no avatar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty farm with a fresh avatar.
    pub fn with_bumpkin(bumpkin: Bumpkin) -> Self {
        Self {
            bumpkin: Some(bumpkin),
            ..Self::default()
        }
    }

    /// Returns true when a collectible `name` is placed and finished at `now`.
    pub fn is_collectible_built(&self, name: ItemName, now: Timestamp) -> bool {
        self.collectibles.is_built(name, now)
    }

    /// Returns true when the avatar wears `wearable` in any slot.
    pub fn is_wearable_active(&self, wearable: WearableName) -> bool {
        self.bumpkin
            .as_ref()
            .is_some_and(|bumpkin| bumpkin.is_wearing(wearable))
    }

    /// Checks the invariants every committed state must satisfy.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.coins.is_sign_negative() && !self.coins.is_zero() {
            return Err(InvariantError::NegativeCoins { coins: self.coins });
        }
        if let Some((item, amount)) = self.inventory.first_negative() {
            return Err(InvariantError::NegativeInventory { item, amount });
        }
        if let Some((item, amount)) = self.stock.first_negative() {
            return Err(InvariantError::NegativeStock { item, amount });
        }
        if let Some(id) = self.buildings.first_duplicate_id() {
            return Err(InvariantError::DuplicateBuildingId { id: id.to_owned() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boost::BoostName;
    use crate::catalog::BuildingName;

    #[test]
    fn empty_state_is_consistent() {
        assert_eq!(GameState::new().check_invariants(), Ok(()));
    }

    #[test]
    fn negative_balances_are_reported() {
        let mut state = GameState::new();
        state.coins = Decimal::from(-1);
        assert!(matches!(
            state.check_invariants(),
            Err(InvariantError::NegativeCoins { .. })
        ));

        let mut state = GameState::new();
        state.stock.set(ItemName::PotatoSeed, Decimal::from(-3));
        assert_eq!(
            state.check_invariants(),
            Err(InvariantError::NegativeStock {
                item: ItemName::PotatoSeed,
                amount: Decimal::from(-3),
            })
        );
    }

    #[test]
    fn duplicate_building_ids_are_reported() {
        let mut state = GameState::new();
        state.buildings.push(
            BuildingName::WaterWell,
            PlacedBuilding::placed("same", Coordinates::ORIGIN, Timestamp(0)),
        );
        assert_eq!(state.check_invariants(), Ok(()));

        state.buildings.push(
            BuildingName::HenHouse,
            PlacedBuilding::placed("same", Coordinates::new(3, 3), Timestamp(0)),
        );
        assert_eq!(
            state.check_invariants(),
            Err(InvariantError::DuplicateBuildingId { id: "same".into() })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unmodeled_sections_survive_a_round_trip() {
        let json = serde_json::json!({
            "coins": "3",
            "inventory": { "Pearl": "1", "Goblin Key": "2" },
            "bumpkin": { "experience": "0", "equipped": { "hat": "Crown" } },
            "crops": {
                "1": {
                    "createdAt": 0,
                    "coordinates": { "x": 0, "y": 0 },
                    "crop": { "name": "Wheat", "plantedAt": 5, "amount": "2", "boostedTime": 10 }
                }
            },
            "farmActivity": { "Sunflower Harvested": 4 },
            "pets": { "dogs": [1, 2] },
            "balance": "1.25"
        });

        let state: GameState = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(state.extra.get("balance"), Some(&serde_json::json!("1.25")));
        assert!(state.crops["1"].is_planted());

        let saved = serde_json::to_value(&state).unwrap();
        assert_eq!(saved["pets"], json["pets"]);
        assert_eq!(saved["farmActivity"], json["farmActivity"]);
        assert_eq!(saved["inventory"], json["inventory"]);
        assert_eq!(saved["crops"], json["crops"]);
        assert_eq!(saved["bumpkin"]["equipped"], json["bumpkin"]["equipped"]);

        let reloaded: GameState = serde_json::from_value(saved).unwrap();
        assert_eq!(reloaded, state);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_uses_camel_case_fields() {
        let json = r#"{
            "coins": "12.5",
            "inventory": { "Sunflower Seed": "3" },
            "bumpkin": { "experience": 100, "activity": { "Coins Spent": "1" } },
            "boostsUsedAt": { "Kuebiko": 500 },
            "buildings": {
                "Water Well": [
                    { "id": "abc", "coordinates": { "x": 1, "y": 1 }, "readyAt": 500, "createdAt": 0 }
                ]
            }
        }"#;

        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.coins, Decimal::new(125, 1));
        assert_eq!(state.inventory.count(ItemName::SunflowerSeed), Decimal::from(3));
        assert_eq!(state.bumpkin.as_ref().map(Bumpkin::level), Some(5));
        assert_eq!(
            state.boosts_used_at.last_used(BoostName::Kuebiko),
            Some(Timestamp(500))
        );
        assert!(
            state
                .buildings
                .find(BuildingName::WaterWell, "abc")
                .is_some()
        );

        let round_trip: GameState =
            serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        assert_eq!(round_trip, state);
    }
}
