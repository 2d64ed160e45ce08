//! Item balances keyed by name.
//!
//! Used for both the player's `inventory` and the shop's `stock`. Absence of
//! an entry means zero. Items the catalog does not list are kept as they were
//! loaded and never read by the engine.

use super::NameMap;
use crate::catalog::ItemName;
use crate::decimal::Decimal;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    items: NameMap<ItemName, Decimal>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Held quantity of `item`; zero when there is no entry.
    pub fn count(&self, item: ItemName) -> Decimal {
        self.items.get(&item).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns the raw entry, distinguishing "absent" from "zero".
    pub fn get(&self, item: ItemName) -> Option<Decimal> {
        self.items.get(&item).copied()
    }

    pub fn contains(&self, item: ItemName) -> bool {
        self.items.contains_key(&item)
    }

    /// Overwrites the balance of `item`. A zero balance is kept as an entry.
    pub fn set(&mut self, item: ItemName, amount: Decimal) {
        self.items.insert(item, amount);
    }

    /// Adds `amount` to the balance of `item`, returning the new balance.
    pub fn add(&mut self, item: ItemName, amount: Decimal) -> Decimal {
        let balance = self.items.entry(item).or_insert(Decimal::ZERO);
        *balance += amount;
        *balance
    }

    /// Subtracts `amount` from the balance of `item`, returning the new balance.
    ///
    /// Callers validate the balance first; this never clamps.
    pub fn sub(&mut self, item: ItemName, amount: Decimal) -> Decimal {
        self.add(item, -amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemName, Decimal)> + '_ {
        self.items.iter().map(|(name, amount)| (*name, *amount))
    }

    /// Balances under names the catalog does not list.
    pub fn unknown(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.items.unknown().map(|(name, amount)| (name, *amount))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First entry whose balance is negative, if any.
    pub fn first_negative(&self) -> Option<(ItemName, Decimal)> {
        self.iter().find(|(_, amount)| amount.is_sign_negative() && !amount.is_zero())
    }
}

impl FromIterator<(ItemName, Decimal)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemName, Decimal)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entries_count_as_zero() {
        let inventory = Inventory::new();
        assert_eq!(inventory.count(ItemName::Pearl), Decimal::ZERO);
        assert_eq!(inventory.get(ItemName::Pearl), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unlisted_items_are_kept_but_not_counted() {
        let inventory: Inventory =
            serde_json::from_str(r#"{ "Pearl": "1", "Gold Pass": "1" }"#).unwrap();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.iter().count(), 1);
        assert_eq!(inventory.unknown().collect::<Vec<_>>(), [("Gold Pass", Decimal::ONE)]);

        let json = serde_json::to_value(&inventory).unwrap();
        assert_eq!(json["Gold Pass"], "1");
    }

    #[test]
    fn add_and_sub_track_balance() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.add(ItemName::Crab, Decimal::from(3)), Decimal::from(3));
        assert_eq!(inventory.sub(ItemName::Crab, Decimal::from(3)), Decimal::ZERO);
        assert!(inventory.contains(ItemName::Crab));
        assert!(inventory.first_negative().is_none());

        inventory.sub(ItemName::Crab, Decimal::ONE);
        assert_eq!(inventory.first_negative(), Some((ItemName::Crab, Decimal::from(-1))));
    }
}
