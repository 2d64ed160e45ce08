//! Boost resolution: which modifiers apply to a price, and in what order.
//!
//! Prices are resolved against a fixed, declared rule table per category.
//! Rules are evaluated top to bottom and every rule whose condition holds
//! fires; a full discount ends evaluation immediately. The list of fired
//! boosts is part of the result and lands in the boost-usage ledger.
mod modifier;
mod resolve;
mod rules;

pub use modifier::PriceModifier;
pub use resolve::{PriceQuote, resolve_price};
pub use rules::{BoostRule, ItemFilter, PriceCategory};

use crate::catalog::{ItemName, SkillName, WearableName, serde_as_name};
use crate::decimal::Decimal;
use crate::state::{GameState, Timestamp};

/// Every boost the resolver can fire.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "title_case")]
pub enum BoostName {
    Kuebiko,
    HungryCaterpillar,
    SunflowerShield,
    LadybugSuit,
    Artist,
    FlowerSale,
    FruityHeaven,
    SeedyBusiness,
    TreasureMap,
    Camel,
}

serde_as_name!(BoostName);

/// Where a boost comes from, and therefore how to tell whether it is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoostSource {
    /// A collectible placed on the farm and finished.
    Collectible(ItemName),
    /// A wearable equipped in any slot.
    Wearable(WearableName),
    /// An unlocked avatar skill.
    Skill(SkillName),
    /// At least one unit held in the inventory.
    HeldItem(ItemName),
}

impl BoostName {
    pub const fn source(self) -> BoostSource {
        match self {
            Self::Kuebiko => BoostSource::Collectible(ItemName::Kuebiko),
            Self::HungryCaterpillar => BoostSource::Collectible(ItemName::HungryCaterpillar),
            Self::TreasureMap => BoostSource::Collectible(ItemName::TreasureMap),
            Self::Camel => BoostSource::Collectible(ItemName::Camel),
            Self::SunflowerShield => BoostSource::Wearable(WearableName::SunflowerShield),
            Self::LadybugSuit => BoostSource::Wearable(WearableName::LadybugSuit),
            Self::Artist => BoostSource::HeldItem(ItemName::Artist),
            Self::FlowerSale => BoostSource::Skill(SkillName::FlowerSale),
            Self::FruityHeaven => BoostSource::Skill(SkillName::FruityHeaven),
            Self::SeedyBusiness => BoostSource::Skill(SkillName::SeedyBusiness),
        }
    }
}

impl BoostSource {
    /// Returns true when this source is active in `state` at `now`.
    pub fn is_active(self, state: &GameState, now: Timestamp) -> bool {
        match self {
            Self::Collectible(name) => state.is_collectible_built(name, now),
            Self::Wearable(name) => state.is_wearable_active(name),
            Self::Skill(skill) => state
                .bumpkin
                .as_ref()
                .is_some_and(|bumpkin| bumpkin.has_skill(skill)),
            Self::HeldItem(item) => state.inventory.count(item) >= Decimal::ONE,
        }
    }
}
