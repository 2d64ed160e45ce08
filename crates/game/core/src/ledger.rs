//! Derived bookkeeping: activity counters and boost usage.
//!
//! Both ledgers are written only by handlers as part of a commit. Nothing in
//! the engine reads them to decide whether an action is allowed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::boost::BoostName;
use crate::catalog::ItemName;
use crate::decimal::Decimal;
use crate::state::{NameMap, Timestamp};

/// Key of an activity counter.
///
/// Counters the engine does not write are carried through untouched as
/// [`ActivityName::Other`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityName {
    BuildingRemoved,
    CoinsSpent,
    CoinsEarned,
    Bought(ItemName),
    Sold(ItemName),
    Other(String),
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildingRemoved => f.write_str("Building Removed"),
            Self::CoinsSpent => f.write_str("Coins Spent"),
            Self::CoinsEarned => f.write_str("Coins Earned"),
            Self::Bought(item) => write!(f, "{item} Bought"),
            Self::Sold(item) => write!(f, "{item} Sold"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for ActivityName {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let known = match raw {
            "Building Removed" => Some(Self::BuildingRemoved),
            "Coins Spent" => Some(Self::CoinsSpent),
            "Coins Earned" => Some(Self::CoinsEarned),
            _ => raw
                .strip_suffix(" Bought")
                .and_then(|item| item.parse().ok())
                .map(Self::Bought)
                .or_else(|| {
                    raw.strip_suffix(" Sold")
                        .and_then(|item| item.parse().ok())
                        .map(Self::Sold)
                }),
        };
        Ok(known.unwrap_or_else(|| Self::Other(raw.to_owned())))
    }
}

/// Counters keyed by activity name, e.g. `"Coins Spent" -> 12.5`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActivityLedger {
    counters: BTreeMap<ActivityName, Decimal>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the counter for `name`.
    pub fn track(&mut self, name: ActivityName, amount: Decimal) {
        *self.counters.entry(name).or_insert(Decimal::ZERO) += amount;
    }

    /// Adds one to the counter for `name`.
    pub fn increment(&mut self, name: ActivityName) {
        self.track(name, Decimal::ONE);
    }

    pub fn count(&self, name: &ActivityName) -> Decimal {
        self.counters.get(name).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActivityName, Decimal)> + '_ {
        self.counters.iter().map(|(name, count)| (name, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

/// When each boost last contributed to a committed action.
///
/// Stamps for boosts the engine does not resolve are carried through as loaded.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BoostsUsedAt {
    entries: NameMap<BoostName, Timestamp>,
}

impl BoostsUsedAt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps every boost in `boosts` with `at`, overwriting earlier stamps.
    pub fn record(&mut self, boosts: &[BoostName], at: Timestamp) {
        for boost in boosts {
            self.entries.insert(*boost, at);
        }
    }

    pub fn last_used(&self, boost: BoostName) -> Option<Timestamp> {
        self.entries.get(&boost).copied()
    }

    /// Stamps under boost names the engine does not resolve.
    pub fn unknown(&self) -> impl Iterator<Item = (&str, Timestamp)> + '_ {
        self.entries.unknown().map(|(name, at)| (name, *at))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoostName, Timestamp)> + '_ {
        self.entries.iter().map(|(name, at)| (*name, *at))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ActivityName;

    impl Serialize for ActivityName {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ActivityName {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = String::deserialize(deserializer)?;
            // Infallible: unknown names become `Other`.
            Ok(raw.parse::<ActivityName>().unwrap_or_else(|never| match never {}))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_names_round_trip() {
        let names = [
            ActivityName::BuildingRemoved,
            ActivityName::CoinsSpent,
            ActivityName::CoinsEarned,
            ActivityName::Bought(ItemName::SunflowerSeed),
            ActivityName::Sold(ItemName::Pearl),
            ActivityName::Other("Sunflower Harvested".into()),
        ];
        for name in names {
            assert_eq!(name.to_string().parse::<ActivityName>(), Ok(name.clone()));
        }
        assert_eq!(
            ActivityName::Bought(ItemName::SunflowerSeed).to_string(),
            "Sunflower Seed Bought"
        );
    }

    #[test]
    fn track_accumulates() {
        let mut ledger = ActivityLedger::new();
        ledger.track(ActivityName::CoinsSpent, Decimal::new(25, 1));
        ledger.track(ActivityName::CoinsSpent, Decimal::new(5, 1));
        ledger.increment(ActivityName::BuildingRemoved);

        assert_eq!(ledger.count(&ActivityName::CoinsSpent), Decimal::from(3));
        assert_eq!(ledger.count(&ActivityName::BuildingRemoved), Decimal::ONE);
        assert_eq!(ledger.count(&ActivityName::CoinsEarned), Decimal::ZERO);
    }

    #[test]
    fn boosts_overwrite_previous_stamp() {
        let mut used = BoostsUsedAt::new();
        used.record(&[BoostName::Kuebiko, BoostName::Artist], Timestamp(10));
        used.record(&[BoostName::Artist], Timestamp(20));

        assert_eq!(used.last_used(BoostName::Kuebiko), Some(Timestamp(10)));
        assert_eq!(used.last_used(BoostName::Artist), Some(Timestamp(20)));
        assert_eq!(used.last_used(BoostName::Camel), None);
    }
}
