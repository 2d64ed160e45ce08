/// Avatar skills that modify prices.
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
pub enum SkillName {
    /// 20% off flower seeds.
    FlowerSale,
    /// 10% off patch fruit seeds.
    FruityHeaven,
    /// 15% off greenhouse seeds.
    SeedyBusiness,
}
