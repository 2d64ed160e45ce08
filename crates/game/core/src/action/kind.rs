//! Action kind enumeration - the registry of action tags.

/// Every action tag the engine has a handler for.
///
/// The string form is the `type` discriminator on the wire. Parsing a tag
/// that is not listed here is how unknown actions are detected.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum ActionKind {
    // ========================================================================
    // Land expansion
    // ========================================================================
    /// Take a placed building off the map.
    #[strum(serialize = "building.removed")]
    RemoveBuilding,

    // ========================================================================
    // Shop
    // ========================================================================
    /// Buy seeds from the shop stock.
    #[strum(serialize = "seed.bought")]
    SeedBought,

    /// Sell beach bounty treasure or exotic crops.
    #[strum(serialize = "treasure.sold")]
    TreasureSold,
}

impl ActionKind {
    /// The wire tag, e.g. `"seed.bought"`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::RemoveBuilding => "building.removed",
            Self::SeedBought => "seed.bought",
            Self::TreasureSold => "treasure.sold",
        }
    }
}
