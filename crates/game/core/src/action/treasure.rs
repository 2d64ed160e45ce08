//! Treasure and exotic crop sales.

use crate::action::{ActionContext, ActionKind, ActionTransition, TreasureSoldError};
use crate::boost::{PriceCategory, PriceQuote, resolve_price};
use crate::catalog::{ItemName, SellableKind, sellable};
use crate::config::GameConfig;
use crate::decimal::{Decimal, is_positive_integer, set_precision};
use crate::ledger::ActivityName;
use crate::state::GameState;

/// Sells `amount` units of `item`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreasureSoldAction {
    pub item: ItemName,
    pub amount: Decimal,
}

/// A validated sale, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreasureSale {
    pub quote: PriceQuote,
    /// Unit price times amount.
    pub earned: Decimal,
    /// Inventory balance before the sale.
    pub held: Decimal,
}

impl TreasureSoldAction {
    pub fn new(item: ItemName, amount: impl Into<Decimal>) -> Self {
        Self {
            item,
            amount: amount.into(),
        }
    }

    pub fn quote(
        &self,
        state: &GameState,
        ctx: &ActionContext,
    ) -> Result<TreasureSale, TreasureSoldError> {
        let item = self.item;

        if state.bumpkin.is_none() {
            return Err(TreasureSoldError::NoBumpkin);
        }

        let definition = sellable(item).ok_or(TreasureSoldError::NotForSale { item })?;

        if !is_positive_integer(self.amount) {
            return Err(TreasureSoldError::InvalidAmount {
                amount: self.amount,
            });
        }

        let held = state.inventory.count(item);
        if held < self.amount {
            return Err(TreasureSoldError::InsufficientQuantity {
                requested: self.amount,
                held,
            });
        }

        let category = match definition.kind {
            SellableKind::Treasure => PriceCategory::TreasureSale,
            SellableKind::ExoticCrop => PriceCategory::ExoticCropSale,
        };
        let quote = resolve_price(category, item, definition.sell_price, state, ctx.created_at);
        let earned = quote.price * self.amount;

        Ok(TreasureSale {
            quote,
            earned,
            held,
        })
    }
}

impl ActionTransition for TreasureSoldAction {
    type Error = TreasureSoldError;

    fn kind(&self) -> ActionKind {
        ActionKind::TreasureSold
    }

    fn pre_validate(&self, state: &GameState, ctx: &ActionContext) -> Result<(), Self::Error> {
        self.quote(state, ctx).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, ctx: &ActionContext) -> Result<(), Self::Error> {
        let TreasureSale {
            quote,
            earned,
            held,
        } = self.quote(state, ctx)?;

        let bumpkin = state.bumpkin.as_mut().ok_or(TreasureSoldError::NoBumpkin)?;
        bumpkin.activity.track(ActivityName::CoinsEarned, earned);
        bumpkin
            .activity
            .track(ActivityName::Sold(self.item), self.amount);

        state.coins += earned;
        state.inventory.set(
            self.item,
            set_precision(held - self.amount, GameConfig::SALE_PRECISION_DECIMALS),
        );
        state
            .boosts_used_at
            .record(&quote.boosts_used, ctx.created_at);

        Ok(())
    }
}
