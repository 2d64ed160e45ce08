/// Equip slots on the avatar.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum WearableSlot {
    Background,
    Body,
    Hair,
    Shirt,
    Pants,
    Shoes,
    Tool,
    Hat,
    Necklace,
    SecondaryTool,
    Coat,
    Onesie,
    Suit,
    Wings,
    Dress,
    Beard,
    Aura,
}

/// Wearables the engine can resolve boosts for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "title_case")]
pub enum WearableName {
    BeigeFarmerPotion,
    FarmerShirt,
    FarmerOveralls,
    BlackFarmerBoots,
    FarmerPitchfork,
    SunflowerShield,
    LadybugSuit,
    ChefApron,
    ChefHat,
}

impl WearableName {
    /// The slot this wearable occupies when equipped.
    pub const fn slot(self) -> WearableSlot {
        match self {
            Self::BeigeFarmerPotion => WearableSlot::Body,
            Self::FarmerShirt => WearableSlot::Shirt,
            Self::FarmerOveralls => WearableSlot::Pants,
            Self::BlackFarmerBoots => WearableSlot::Shoes,
            Self::FarmerPitchfork => WearableSlot::Tool,
            Self::SunflowerShield => WearableSlot::SecondaryTool,
            Self::LadybugSuit => WearableSlot::Suit,
            Self::ChefApron => WearableSlot::Coat,
            Self::ChefHat => WearableSlot::Hat,
        }
    }
}
