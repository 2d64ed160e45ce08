/// Every inventory item the engine knows about.
///
/// Grouped by family; the families themselves are resolved by the seed and
/// sellable tables rather than by position in this list.
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
pub enum ItemName {
    // ----- crop seeds -----
    SunflowerSeed,
    PotatoSeed,
    PumpkinSeed,
    CarrotSeed,
    CabbageSeed,
    SoybeanSeed,
    BeetrootSeed,
    CauliflowerSeed,
    ParsnipSeed,
    EggplantSeed,
    CornSeed,
    OnionSeed,
    RadishSeed,
    WheatSeed,
    TurnipSeed,
    KaleSeed,
    ArtichokeSeed,
    BarleySeed,

    // ----- patch fruit seeds -----
    TomatoSeed,
    LemonSeed,
    BlueberrySeed,
    OrangeSeed,
    AppleSeed,
    BananaPlant,
    CelestineSeed,
    LunaraSeed,
    DuskberrySeed,

    // ----- flower seeds -----
    SunpetalSeed,
    BloomSeed,
    LilySeed,
    EdelweissSeed,
    GladiolusSeed,
    LavenderSeed,
    CloverSeed,

    // ----- greenhouse seeds -----
    RiceSeed,
    OliveSeed,
    GrapeSeed,

    // ----- crops -----
    Sunflower,
    Potato,
    Pumpkin,
    Carrot,
    Cabbage,
    Soybean,
    Beetroot,
    Cauliflower,
    Parsnip,
    Eggplant,
    Corn,
    Onion,
    Radish,
    Wheat,
    Turnip,
    Kale,
    Artichoke,
    Barley,

    // ----- exotic crops -----
    BlackMagic,
    GoldenHelios,
    Chiogga,
    PurpleCauliflower,
    AdirondackPotato,
    WartyGoblinPumpkin,
    WhiteCarrot,

    // ----- beach bounty treasure -----
    PirateBounty,
    Pearl,
    Coral,
    ClamShell,
    Pipi,
    Starfish,
    Seaweed,
    SeaCucumber,
    Crab,
    WoodenCompass,
    IronCompass,
    EmeraldCompass,
    OldBottle,
    CamelBone,
    CockleShell,
    Hieroglyph,
    Scarab,

    // ----- planting spots -----
    CropPlot,
    FruitPatch,
    FlowerBed,
    Greenhouse,

    // ----- collectibles -----
    Kuebiko,
    HungryCaterpillar,
    TreasureMap,
    Camel,
    ChickenCoop,

    // ----- legacy skills -----
    Artist,
}
