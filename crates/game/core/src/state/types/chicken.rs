//! Chickens, kept in explicit insertion order.
//!
//! Eviction after a hen house is removed is last-in-first-out, so the order
//! in which chickens were added is part of the state. It is stored as a
//! sequence rather than left to map iteration order.

use super::{Coordinates, Timestamp, Unmodeled};
use crate::decimal::Decimal;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Chicken {
    /// Set while the chicken is brewing an egg.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fed_at: Option<Timestamp>,
    #[cfg_attr(feature = "serde", serde(default = "default_multiplier"))]
    pub multiplier: Decimal,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub coordinates: Option<Coordinates>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

#[cfg(feature = "serde")]
fn default_multiplier() -> Decimal {
    Decimal::ONE
}

impl Chicken {
    pub fn idle() -> Self {
        Self {
            fed_at: None,
            multiplier: Decimal::ONE,
            coordinates: None,
            extra: Unmodeled::default(),
        }
    }

    pub fn fed(at: Timestamp) -> Self {
        Self {
            fed_at: Some(at),
            ..Self::idle()
        }
    }

    pub fn is_brewing(&self) -> bool {
        self.fed_at.is_some()
    }
}

/// Chickens by id, in the order they were added.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Chickens {
    entries: Vec<(String, Chicken)>,
}

impl Chickens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Chicken> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, chicken)| chicken)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends a chicken, or replaces it in place if `id` is already present.
    pub fn insert(&mut self, id: impl Into<String>, chicken: Chicken) {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => *existing = chicken,
            None => self.entries.push((id, chicken)),
        }
    }

    /// Ids and chickens in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Chicken)> + '_ {
        self.entries
            .iter()
            .map(|(id, chicken)| (id.as_str(), chicken))
    }

    pub fn ids(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// The `count` most recently added chickens, newest first.
    pub fn newest(&self, count: usize) -> impl Iterator<Item = (&str, &Chicken)> + '_ {
        self.iter().rev().take(count)
    }

    /// Removes the `count` most recently added chickens and returns their ids,
    /// newest first.
    pub fn evict_newest(&mut self, count: usize) -> Vec<String> {
        let keep = self.entries.len().saturating_sub(count);
        self.entries
            .drain(keep..)
            .rev()
            .map(|(id, _)| id)
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Chicken)> for Chickens {
    fn from_iter<T: IntoIterator<Item = (K, Chicken)>>(iter: T) -> Self {
        let mut chickens = Self::new();
        for (id, chicken) in iter {
            chickens.insert(id, chicken);
        }
        chickens
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Chicken, Chickens};

    impl Serialize for Chickens {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (id, chicken) in &self.entries {
                map.serialize_entry(id, chicken)?;
            }
            map.end()
        }
    }

    struct ChickensVisitor;

    impl<'de> Visitor<'de> for ChickensVisitor {
        type Value = Chickens;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of chicken id to chicken")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries: Vec<(String, Chicken)> =
                Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((id, chicken)) = access.next_entry::<String, Chicken>()? {
                if entries.iter().any(|(existing, _)| *existing == id) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate chicken id '{id}'"
                    )));
                }
                entries.push((id, chicken));
            }
            Ok(Chickens { entries })
        }
    }

    impl<'de> Deserialize<'de> for Chickens {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(ChickensVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flock(ids: &[&str]) -> Chickens {
        ids.iter().map(|id| (*id, Chicken::idle())).collect()
    }

    #[test]
    fn insertion_order_is_preserved() {
        let chickens = flock(&["c", "a", "b"]);
        assert_eq!(chickens.ids().collect::<Vec<_>>(), ["c", "a", "b"]);
    }

    #[test]
    fn newest_lists_most_recent_first() {
        let chickens = flock(&["1", "2", "3", "4"]);
        let newest: Vec<_> = chickens.newest(2).map(|(id, _)| id).collect();
        assert_eq!(newest, ["4", "3"]);
    }

    #[test]
    fn evict_newest_keeps_older_entries() {
        let mut chickens = flock(&["1", "2", "3", "4"]);
        assert_eq!(chickens.evict_newest(3), ["4", "3", "2"]);
        assert_eq!(chickens.ids().collect::<Vec<_>>(), ["1"]);
        assert_eq!(chickens.evict_newest(5), ["1"]);
        assert!(chickens.is_empty());
    }

    #[test]
    fn reinserting_keeps_position() {
        let mut chickens = flock(&["1", "2"]);
        chickens.insert("1", Chicken::fed(Timestamp(5)));
        assert_eq!(chickens.ids().collect::<Vec<_>>(), ["1", "2"]);
        assert!(chickens.get("1").is_some_and(Chicken::is_brewing));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_object_order_is_insertion_order() {
        let json = r#"{"z":{"multiplier":"1"},"a":{"fedAt":10,"multiplier":"1"}}"#;
        let chickens: Chickens = serde_json::from_str(json).unwrap();
        assert_eq!(chickens.ids().collect::<Vec<_>>(), ["z", "a"]);
        assert_eq!(serde_json::to_string(&chickens).unwrap(), json);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"a":{},"a":{}}"#;
        assert!(serde_json::from_str::<Chickens>(json).is_err());
    }
}
