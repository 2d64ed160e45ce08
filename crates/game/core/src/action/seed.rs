//! Seed purchase from the shop stock.

use crate::action::{ActionContext, ActionKind, ActionTransition, SeedBoughtError};
use crate::boost::{PriceCategory, PriceQuote, resolve_price};
use crate::catalog::{ItemName, is_full_moon_seed, seed};
use crate::decimal::{Decimal, is_positive_integer};
use crate::ledger::ActivityName;
use crate::state::GameState;

/// Buys `amount` units of seed `item`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedBoughtAction {
    pub item: ItemName,
    pub amount: Decimal,
}

/// A validated purchase, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPurchase {
    pub quote: PriceQuote,
    /// Unit price times amount.
    pub total: Decimal,
}

impl SeedBoughtAction {
    pub fn new(item: ItemName, amount: impl Into<Decimal>) -> Self {
        Self {
            item,
            amount: amount.into(),
        }
    }

    /// Runs every precondition in order and prices the purchase.
    pub fn quote(
        &self,
        state: &GameState,
        ctx: &ActionContext,
    ) -> Result<SeedPurchase, SeedBoughtError> {
        let now = ctx.created_at;
        let item = self.item;

        if is_full_moon_seed(item) && !state.calendar.is_full_moon(now) {
            return Err(SeedBoughtError::NotFullMoon { item });
        }

        let definition = seed(item).ok_or(SeedBoughtError::NotASeed { item })?;
        let bumpkin = state.bumpkin.as_ref().ok_or(SeedBoughtError::NoBumpkin)?;

        let level = bumpkin.level();
        let required = definition.required_level();
        if level < required {
            return Err(SeedBoughtError::InadequateLevel {
                required,
                actual: level,
            });
        }

        if !is_positive_integer(self.amount) {
            return Err(SeedBoughtError::InvalidAmount {
                amount: self.amount,
            });
        }

        let available = state.stock.count(item);
        if available < self.amount {
            return Err(SeedBoughtError::NotEnoughStock {
                requested: self.amount,
                available,
            });
        }

        if let Some(spot) = definition.planting_spot
            && state.inventory.count(spot) < Decimal::ONE
        {
            return Err(SeedBoughtError::MissingPlantingSpot { spot });
        }

        let quote = resolve_price(PriceCategory::SeedPurchase, item, definition.price, state, now);
        let total = quote.price * self.amount;
        if !total.is_zero() && state.coins < total {
            return Err(SeedBoughtError::InsufficientCoins {
                required: total,
                available: state.coins,
            });
        }

        Ok(SeedPurchase { quote, total })
    }
}

impl ActionTransition for SeedBoughtAction {
    type Error = SeedBoughtError;

    fn kind(&self) -> ActionKind {
        ActionKind::SeedBought
    }

    fn pre_validate(&self, state: &GameState, ctx: &ActionContext) -> Result<(), Self::Error> {
        self.quote(state, ctx).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, ctx: &ActionContext) -> Result<(), Self::Error> {
        let SeedPurchase { quote, total } = self.quote(state, ctx)?;

        let bumpkin = state.bumpkin.as_mut().ok_or(SeedBoughtError::NoBumpkin)?;
        bumpkin
            .activity
            .track(ActivityName::Bought(self.item), self.amount);
        bumpkin.activity.track(ActivityName::CoinsSpent, total);

        state.coins -= total;
        state.inventory.add(self.item, self.amount);
        state.stock.sub(self.item, self.amount);
        state
            .boosts_used_at
            .record(&quote.boosts_used, ctx.created_at);

        Ok(())
    }
}
