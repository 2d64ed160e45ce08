//! Seed shop table.

use super::ItemName;
use crate::decimal::{Decimal, fixed};

/// Which plot family a seed grows in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedFamily {
    Crop,
    PatchFruit,
    Flower,
    GreenhouseCrop,
    GreenhouseFruit,
}

/// Shop definition of a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedDefinition {
    /// Coins per seed before boosts.
    pub price: Decimal,
    /// Minimum avatar level required to buy; `None` means any level.
    pub bumpkin_level: Option<u32>,
    /// Item that must be held (at least one) to buy this seed.
    pub planting_spot: Option<ItemName>,
    pub family: SeedFamily,
}

impl SeedDefinition {
    const fn new(
        price: Decimal,
        bumpkin_level: u32,
        planting_spot: ItemName,
        family: SeedFamily,
    ) -> Self {
        Self {
            price,
            bumpkin_level: Some(bumpkin_level),
            planting_spot: Some(planting_spot),
            family,
        }
    }

    /// Level gate, treating "no requirement" as level zero.
    pub fn required_level(&self) -> u32 {
        self.bumpkin_level.unwrap_or(0)
    }
}

/// Seeds that can only be bought while the calendar shows a full moon.
pub const FULL_MOON_SEEDS: [ItemName; 3] = [
    ItemName::CelestineSeed,
    ItemName::LunaraSeed,
    ItemName::DuskberrySeed,
];

/// Looks up the shop definition of `name`, or `None` if it is not a seed.
pub fn seed(name: ItemName) -> Option<SeedDefinition> {
    use ItemName::*;
    use SeedFamily::*;

    let definition = match name {
        SunflowerSeed => SeedDefinition::new(fixed(1, 2), 1, CropPlot, Crop),
        PotatoSeed => SeedDefinition::new(fixed(1, 1), 1, CropPlot, Crop),
        PumpkinSeed => SeedDefinition::new(fixed(2, 1), 2, CropPlot, Crop),
        CarrotSeed => SeedDefinition::new(fixed(5, 1), 2, CropPlot, Crop),
        CabbageSeed => SeedDefinition::new(fixed(1, 0), 3, CropPlot, Crop),
        SoybeanSeed => SeedDefinition::new(fixed(15, 1), 3, CropPlot, Crop),
        BeetrootSeed => SeedDefinition::new(fixed(2, 0), 4, CropPlot, Crop),
        CauliflowerSeed => SeedDefinition::new(fixed(3, 0), 4, CropPlot, Crop),
        ParsnipSeed => SeedDefinition::new(fixed(5, 0), 5, CropPlot, Crop),
        EggplantSeed => SeedDefinition::new(fixed(6, 0), 6, CropPlot, Crop),
        CornSeed => SeedDefinition::new(fixed(7, 0), 6, CropPlot, Crop),
        OnionSeed => SeedDefinition::new(fixed(7, 0), 7, CropPlot, Crop),
        RadishSeed => SeedDefinition::new(fixed(7, 0), 7, CropPlot, Crop),
        WheatSeed => SeedDefinition::new(fixed(5, 0), 7, CropPlot, Crop),
        TurnipSeed => SeedDefinition::new(fixed(5, 0), 8, CropPlot, Crop),
        KaleSeed => SeedDefinition::new(fixed(7, 0), 8, CropPlot, Crop),
        ArtichokeSeed => SeedDefinition::new(fixed(7, 0), 8, CropPlot, Crop),
        BarleySeed => SeedDefinition::new(fixed(10, 0), 14, CropPlot, Crop),

        TomatoSeed => SeedDefinition::new(fixed(5, 0), 13, FruitPatch, PatchFruit),
        LemonSeed => SeedDefinition::new(fixed(15, 0), 13, FruitPatch, PatchFruit),
        BlueberrySeed => SeedDefinition::new(fixed(30, 0), 12, FruitPatch, PatchFruit),
        OrangeSeed => SeedDefinition::new(fixed(50, 0), 14, FruitPatch, PatchFruit),
        AppleSeed => SeedDefinition::new(fixed(70, 0), 15, FruitPatch, PatchFruit),
        BananaPlant => SeedDefinition::new(fixed(70, 0), 16, FruitPatch, PatchFruit),
        CelestineSeed => SeedDefinition::new(fixed(300, 0), 16, FruitPatch, PatchFruit),
        LunaraSeed => SeedDefinition::new(fixed(2000, 0), 16, FruitPatch, PatchFruit),
        DuskberrySeed => SeedDefinition::new(fixed(5000, 0), 16, FruitPatch, PatchFruit),

        SunpetalSeed => SeedDefinition::new(fixed(16, 0), 13, FlowerBed, Flower),
        BloomSeed => SeedDefinition::new(fixed(32, 0), 13, FlowerBed, Flower),
        LilySeed => SeedDefinition::new(fixed(48, 0), 13, FlowerBed, Flower),
        EdelweissSeed => SeedDefinition::new(fixed(48, 0), 13, FlowerBed, Flower),
        GladiolusSeed => SeedDefinition::new(fixed(48, 0), 13, FlowerBed, Flower),
        LavenderSeed => SeedDefinition::new(fixed(48, 0), 13, FlowerBed, Flower),
        CloverSeed => SeedDefinition::new(fixed(48, 0), 13, FlowerBed, Flower),

        RiceSeed => SeedDefinition::new(fixed(240, 0), 40, Greenhouse, GreenhouseCrop),
        OliveSeed => SeedDefinition::new(fixed(320, 0), 40, Greenhouse, GreenhouseCrop),
        GrapeSeed => SeedDefinition::new(fixed(160, 0), 40, Greenhouse, GreenhouseFruit),

        _ => return None,
    };

    Some(definition)
}

pub fn is_full_moon_seed(name: ItemName) -> bool {
    FULL_MOON_SEEDS.contains(&name)
}

pub fn is_flower_seed(name: ItemName) -> bool {
    matches!(seed(name), Some(SeedDefinition { family: SeedFamily::Flower, .. }))
}

pub fn is_patch_fruit_seed(name: ItemName) -> bool {
    matches!(seed(name), Some(SeedDefinition { family: SeedFamily::PatchFruit, .. }))
}

pub fn is_greenhouse_seed(name: ItemName) -> bool {
    matches!(
        seed(name),
        Some(SeedDefinition {
            family: SeedFamily::GreenhouseCrop | SeedFamily::GreenhouseFruit,
            ..
        })
    )
}
