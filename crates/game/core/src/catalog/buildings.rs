/// Placeable building types.
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
pub enum BuildingName {
    TownCenter,
    Market,
    Workbench,
    FirePit,
    Kitchen,
    Bakery,
    Deli,
    SmoothieShack,
    WaterWell,
    HenHouse,
    Barn,
    CropMachine,
    Greenhouse,
    CompostBin,
    TurboComposter,
    PremiumComposter,
    Toolshed,
    Warehouse,
}

impl BuildingName {
    /// Buildings that run a cooking queue (`crafting`) while placed.
    pub const fn hosts_cooking(self) -> bool {
        matches!(
            self,
            Self::FirePit | Self::Kitchen | Self::Bakery | Self::Deli | Self::SmoothieShack
        )
    }

    /// Buildings that run a crop-machine style grow queue (`queue`).
    pub const fn hosts_grow_queue(self) -> bool {
        matches!(self, Self::CropMachine)
    }

    /// Buildings whose placed count bounds how many chickens are supported.
    pub const fn houses_chickens(self) -> bool {
        matches!(self, Self::HenHouse)
    }

    /// Buildings whose placed count bounds how many crop plots are watered.
    pub const fn waters_plots(self) -> bool {
        matches!(self, Self::WaterWell)
    }
}
