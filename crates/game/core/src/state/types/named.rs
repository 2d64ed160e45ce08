//! Maps keyed by catalog names that keep entries the catalog does not list.
//!
//! A live snapshot names far more items, buildings and skills than the engine
//! reasons about. Entries under unrecognised names are carried through
//! verbatim so that loading and saving a snapshot never drops data.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameMap<K, V> {
    known: BTreeMap<K, V>,
    unknown: BTreeMap<String, V>,
}

impl<K, V> Default for NameMap<K, V> {
    fn default() -> Self {
        Self {
            known: BTreeMap::new(),
            unknown: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> NameMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<Q>(&self, name: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.known.get(name)
    }

    pub fn get_mut<Q>(&mut self, name: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.known.get_mut(name)
    }

    pub fn contains_key<Q>(&self, name: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.known.contains_key(name)
    }

    pub fn insert(&mut self, name: K, value: V) -> Option<V> {
        self.known.insert(name, value)
    }

    pub fn entry(&mut self, name: K) -> Entry<'_, K, V> {
        self.known.entry(name)
    }

    /// Entries under names the catalog knows.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.known.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.known.values()
    }

    /// Entries carried through under names the catalog does not know.
    pub fn unknown(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.unknown.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Stores `value` under a raw `name`, parsing it into a known name when possible.
    pub fn insert_raw(&mut self, name: &str, value: V) -> Option<V>
    where
        K: std::str::FromStr,
    {
        match name.parse::<K>() {
            Ok(known) => self.known.insert(known, value),
            Err(_) => self.unknown.insert(name.to_owned(), value),
        }
    }

    /// Number of entries, known and unknown.
    pub fn len(&self) -> usize {
        self.known.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unknown.is_empty()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for NameMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            known: iter.into_iter().collect(),
            unknown: BTreeMap::new(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;
    use std::marker::PhantomData;
    use std::str::FromStr;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::NameMap;

    impl<K, V> Serialize for NameMap<K, V>
    where
        K: AsRef<str>,
        V: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.known.len() + self.unknown.len()))?;
            for (name, value) in &self.known {
                map.serialize_entry(name.as_ref(), value)?;
            }
            for (name, value) in &self.unknown {
                map.serialize_entry(name, value)?;
            }
            map.end()
        }
    }

    impl<'de, K, V> Deserialize<'de> for NameMap<K, V>
    where
        K: Ord + FromStr,
        V: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(NameMapVisitor(PhantomData))
        }
    }

    struct NameMapVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for NameMapVisitor<K, V>
    where
        K: Ord + FromStr,
        V: Deserialize<'de>,
    {
        type Value = NameMap<K, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map keyed by name")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut names = NameMap::new();
            while let Some((name, value)) = access.next_entry::<String, V>()? {
                names.insert_raw(&name, value);
            }
            Ok(names)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemName;

    #[test]
    fn raw_names_split_into_known_and_unknown() {
        let mut names: NameMap<ItemName, u32> = NameMap::new();
        names.insert_raw("Pearl", 2);
        names.insert_raw("Magic Bean", 7);

        assert_eq!(names.get(&ItemName::Pearl), Some(&2));
        assert_eq!(names.unknown().collect::<Vec<_>>(), [("Magic Bean", &7)]);
        assert_eq!(names.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_names_survive_serialization() {
        let names: NameMap<ItemName, u32> =
            serde_json::from_str(r#"{ "Pearl": 2, "Magic Bean": 7 }"#).unwrap();
        let json = serde_json::to_value(&names).unwrap();
        assert_eq!(json, serde_json::json!({ "Pearl": 2, "Magic Bean": 7 }));
    }
}
