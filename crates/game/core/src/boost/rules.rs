//! Declared boost precedence per price category.
//!
//! Order inside each table is the evaluation order, and therefore the order
//! of the fired-boost list. Full discounts come first.

use super::{BoostName, PriceModifier};
use crate::catalog::{ItemName, is_flower_seed, is_greenhouse_seed, is_patch_fruit_seed};
use crate::decimal::percent;

/// Which items a rule can apply to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemFilter {
    Any,
    Only(ItemName),
    FlowerSeeds,
    PatchFruitSeeds,
    GreenhouseSeeds,
}

impl ItemFilter {
    pub fn matches(self, item: ItemName) -> bool {
        match self {
            Self::Any => true,
            Self::Only(only) => only == item,
            Self::FlowerSeeds => is_flower_seed(item),
            Self::PatchFruitSeeds => is_patch_fruit_seed(item),
            Self::GreenhouseSeeds => is_greenhouse_seed(item),
        }
    }
}

/// One entry of a precedence table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoostRule {
    pub boost: BoostName,
    pub filter: ItemFilter,
    pub modifier: PriceModifier,
    /// Skip the rule once the running price is already zero.
    pub skip_when_free: bool,
}

impl BoostRule {
    const fn new(boost: BoostName, filter: ItemFilter, modifier: PriceModifier) -> Self {
        Self {
            boost,
            filter,
            modifier,
            skip_when_free: false,
        }
    }

    const fn unless_free(mut self) -> Self {
        self.skip_when_free = true;
        self
    }
}

const SEED_PURCHASE_RULES: &[BoostRule] = &[
    BoostRule::new(BoostName::Kuebiko, ItemFilter::Any, PriceModifier::Free),
    BoostRule::new(
        BoostName::HungryCaterpillar,
        ItemFilter::FlowerSeeds,
        PriceModifier::Free,
    ),
    BoostRule::new(
        BoostName::SunflowerShield,
        ItemFilter::Only(ItemName::SunflowerSeed),
        PriceModifier::Free,
    ),
    BoostRule::new(
        BoostName::LadybugSuit,
        ItemFilter::Only(ItemName::OnionSeed),
        PriceModifier::Multiply(percent(75)),
    ),
    BoostRule::new(
        BoostName::Artist,
        ItemFilter::Any,
        PriceModifier::Multiply(percent(90)),
    )
    .unless_free(),
    BoostRule::new(
        BoostName::FlowerSale,
        ItemFilter::FlowerSeeds,
        PriceModifier::Multiply(percent(80)),
    ),
    BoostRule::new(
        BoostName::FruityHeaven,
        ItemFilter::PatchFruitSeeds,
        PriceModifier::Multiply(percent(90)),
    ),
    BoostRule::new(
        BoostName::SeedyBusiness,
        ItemFilter::GreenhouseSeeds,
        PriceModifier::Multiply(percent(85)),
    ),
];

const TREASURE_SALE_RULES: &[BoostRule] = &[
    BoostRule::new(
        BoostName::TreasureMap,
        ItemFilter::Any,
        PriceModifier::AddShareOfBase(percent(20)),
    ),
    BoostRule::new(
        BoostName::Camel,
        ItemFilter::Any,
        PriceModifier::AddShareOfBase(percent(30)),
    ),
];

/// What kind of price is being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum PriceCategory {
    /// Buying seeds from the shop.
    SeedPurchase,
    /// Selling beach bounty treasure.
    TreasureSale,
    /// Selling exotic crops; always the base price.
    ExoticCropSale,
}

impl PriceCategory {
    /// Precedence table for this category.
    pub const fn rules(self) -> &'static [BoostRule] {
        match self {
            Self::SeedPurchase => SEED_PURCHASE_RULES,
            Self::TreasureSale => TREASURE_SALE_RULES,
            Self::ExoticCropSale => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_discounts_precede_percentages() {
        let rules = PriceCategory::SeedPurchase.rules();
        let first_percentage = rules
            .iter()
            .position(|rule| !rule.modifier.short_circuits())
            .unwrap();
        assert!(
            rules[first_percentage..]
                .iter()
                .all(|rule| !rule.modifier.short_circuits())
        );
        assert_eq!(first_percentage, 3);
    }

    #[test]
    fn exotic_crops_have_no_boosts() {
        assert!(PriceCategory::ExoticCropSale.rules().is_empty());
    }

    #[test]
    fn filters_match_families() {
        assert!(ItemFilter::FlowerSeeds.matches(ItemName::SunpetalSeed));
        assert!(!ItemFilter::FlowerSeeds.matches(ItemName::SunflowerSeed));
        assert!(ItemFilter::GreenhouseSeeds.matches(ItemName::GrapeSeed));
        assert!(ItemFilter::Only(ItemName::OnionSeed).matches(ItemName::OnionSeed));
    }
}
