use tracing::trace;

use super::{BoostName, PriceCategory};
use crate::catalog::ItemName;
use crate::decimal::Decimal;
use crate::state::{GameState, Timestamp};

/// Resolved unit price and the boosts that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceQuote {
    pub price: Decimal,
    /// Fired boosts in evaluation order.
    pub boosts_used: Vec<BoostName>,
}

impl PriceQuote {
    pub fn base(price: Decimal) -> Self {
        Self {
            price,
            boosts_used: Vec::new(),
        }
    }
}

/// Resolves the unit price of `item` in `category`, starting from `base`.
///
/// Every rule whose source is active at `now` and whose filter matches fires,
/// in table order. A full discount returns immediately with only the boosts
/// fired so far.
pub fn resolve_price(
    category: PriceCategory,
    item: ItemName,
    base: Decimal,
    state: &GameState,
    now: Timestamp,
) -> PriceQuote {
    let mut quote = PriceQuote::base(base);

    for rule in category.rules() {
        if !rule.filter.matches(item) {
            continue;
        }
        if rule.skip_when_free && quote.price.is_zero() {
            continue;
        }
        if !rule.boost.source().is_active(state, now) {
            continue;
        }

        quote.price = rule.modifier.apply(quote.price, base);
        quote.boosts_used.push(rule.boost);
        trace!(
            target: "farm_core::boost",
            %category,
            %item,
            boost = %rule.boost,
            price = %quote.price,
            "boost fired"
        );

        if rule.modifier.short_circuits() {
            break;
        }
    }

    quote
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SkillName, WearableName};
    use crate::state::{Bumpkin, Coordinates, PlacedCollectible};

    const NOW: Timestamp = Timestamp(10_000);

    fn farm() -> GameState {
        GameState::with_bumpkin(Bumpkin::default())
    }

    fn build(state: &mut GameState, name: ItemName) {
        state.collectibles.push(
            name,
            PlacedCollectible::placed(name.to_string(), Coordinates::ORIGIN, Timestamp(0)),
        );
    }

    fn bumpkin(state: &mut GameState) -> &mut Bumpkin {
        state.bumpkin.get_or_insert_with(Bumpkin::default)
    }

    #[test]
    fn no_boosts_returns_base_price() {
        let quote = resolve_price(
            PriceCategory::SeedPurchase,
            ItemName::PotatoSeed,
            Decimal::new(1, 1),
            &farm(),
            NOW,
        );
        assert_eq!(quote, PriceQuote::base(Decimal::new(1, 1)));
    }

    #[test]
    fn full_discount_short_circuits_percentages() {
        let mut state = farm();
        build(&mut state, ItemName::Kuebiko);
        bumpkin(&mut state).equip(WearableName::LadybugSuit);
        state.inventory.set(ItemName::Artist, Decimal::ONE);

        let quote = resolve_price(
            PriceCategory::SeedPurchase,
            ItemName::OnionSeed,
            Decimal::from(7),
            &state,
            NOW,
        );
        assert_eq!(quote.price, Decimal::ZERO);
        assert_eq!(quote.boosts_used, [BoostName::Kuebiko]);
    }

    #[test]
    fn percentages_compose_in_declared_order() {
        let mut state = farm();
        bumpkin(&mut state).equip(WearableName::LadybugSuit);
        state.inventory.set(ItemName::Artist, Decimal::from(2));

        let quote = resolve_price(
            PriceCategory::SeedPurchase,
            ItemName::OnionSeed,
            Decimal::from(100),
            &state,
            NOW,
        );
        assert_eq!(quote.price, Decimal::new(675, 1));
        assert_eq!(quote.boosts_used, [BoostName::LadybugSuit, BoostName::Artist]);
    }

    #[test]
    fn flower_seed_stacks_artist_and_skill() {
        let mut state = farm();
        *bumpkin(&mut state) = Bumpkin::default().with_skill(SkillName::FlowerSale);
        state.inventory.set(ItemName::Artist, Decimal::ONE);

        let quote = resolve_price(
            PriceCategory::SeedPurchase,
            ItemName::SunpetalSeed,
            Decimal::from(16),
            &state,
            NOW,
        );
        assert_eq!(quote.price, Decimal::new(1152, 2));
        assert_eq!(quote.boosts_used, [BoostName::Artist, BoostName::FlowerSale]);
    }

    #[test]
    fn caterpillar_only_frees_flower_seeds() {
        let mut state = farm();
        build(&mut state, ItemName::HungryCaterpillar);

        let flower = resolve_price(
            PriceCategory::SeedPurchase,
            ItemName::LilySeed,
            Decimal::from(48),
            &state,
            NOW,
        );
        assert_eq!(flower.boosts_used, [BoostName::HungryCaterpillar]);

        let crop = resolve_price(
            PriceCategory::SeedPurchase,
            ItemName::CornSeed,
            Decimal::from(7),
            &state,
            NOW,
        );
        assert_eq!(crop, PriceQuote::base(Decimal::from(7)));
    }

    #[test]
    fn artist_skipped_for_free_base_price() {
        let mut state = farm();
        state.inventory.set(ItemName::Artist, Decimal::ONE);

        let quote = resolve_price(
            PriceCategory::SeedPurchase,
            ItemName::PotatoSeed,
            Decimal::ZERO,
            &state,
            NOW,
        );
        assert!(quote.boosts_used.is_empty());
    }

    #[test]
    fn treasure_boosts_add_shares_of_base() {
        let mut state = farm();
        build(&mut state, ItemName::TreasureMap);
        build(&mut state, ItemName::Camel);

        let quote = resolve_price(
            PriceCategory::TreasureSale,
            ItemName::Pearl,
            Decimal::from(3000),
            &state,
            NOW,
        );
        assert_eq!(quote.price, Decimal::from(4500));
        assert_eq!(quote.boosts_used, [BoostName::TreasureMap, BoostName::Camel]);

        let exotic = resolve_price(
            PriceCategory::ExoticCropSale,
            ItemName::BlackMagic,
            Decimal::from(32000),
            &state,
            NOW,
        );
        assert_eq!(exotic, PriceQuote::base(Decimal::from(32000)));
    }
}
