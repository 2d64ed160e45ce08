//! Static capability tables.
//!
//! Every name the engine reasons about (items, buildings, wearables, skills)
//! is an enum, and every property of those names is a total `match` over the
//! enum. Adding a variant without deciding its properties fails to compile
//! instead of silently falling through a membership test.
//!
//! Names serialize as their human-readable form ("Sunflower Seed",
//! "Hen House") because that is how external snapshots key their maps.

mod buildings;
mod items;
mod level;
mod seeds;
mod skills;
mod treasure;
mod wearables;

pub use buildings::BuildingName;
pub use items::ItemName;
pub use level::{MAX_LEVEL, bumpkin_level};
pub use seeds::{
    FULL_MOON_SEEDS, SeedDefinition, SeedFamily, is_flower_seed, is_full_moon_seed,
    is_greenhouse_seed, is_patch_fruit_seed, seed,
};
pub use skills::SkillName;
pub use treasure::{Sellable, SellableKind, sellable};
pub use wearables::{WearableName, WearableSlot};

/// Implements serde for enums that round-trip through their strum string form.
macro_rules! serde_as_name {
    ($($ty:ty),* $(,)?) => {$(
        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_ref())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(|_| {
                    serde::de::Error::custom(format!(
                        "unknown {} '{}'",
                        stringify!($ty),
                        raw
                    ))
                })
            }
        }
    )*};
}

pub(crate) use serde_as_name;

serde_as_name!(ItemName, BuildingName, WearableName, WearableSlot, SkillName);
