use super::{NameMap, Unmodeled};
use crate::catalog::{SkillName, WearableName, WearableSlot, bumpkin_level};
use crate::decimal::Decimal;
use crate::ledger::ActivityLedger;

/// The player's avatar.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Bumpkin {
    pub id: u64,
    pub experience: Decimal,
    /// Unlocked skills and their points.
    pub skills: NameMap<SkillName, u32>,
    /// Wearable name in each slot, as written in the snapshot.
    pub equipped: NameMap<WearableSlot, String>,
    pub activity: ActivityLedger,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: Unmodeled,
}

impl Bumpkin {
    pub fn new(experience: Decimal) -> Self {
        Self {
            experience,
            ..Self::default()
        }
    }

    /// Level derived from experience.
    pub fn level(&self) -> u32 {
        bumpkin_level(self.experience)
    }

    pub fn has_skill(&self, skill: SkillName) -> bool {
        self.skills.get(&skill).is_some_and(|points| *points > 0)
    }

    /// Returns true when `wearable` occupies any equip slot.
    pub fn is_wearing(&self, wearable: WearableName) -> bool {
        self.equipped.values().any(|worn| worn == wearable.as_ref())
    }

    /// Equips `wearable` into its slot, replacing whatever was there.
    pub fn equip(&mut self, wearable: WearableName) -> Option<String> {
        self.equipped.insert(wearable.slot(), wearable.to_string())
    }

    pub fn with_skill(mut self, skill: SkillName) -> Self {
        self.skills.insert(skill, 1);
        self
    }

    pub fn wearing(mut self, wearable: WearableName) -> Self {
        self.equip(wearable);
        self
    }
}
