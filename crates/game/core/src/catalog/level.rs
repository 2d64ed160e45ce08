//! Avatar level curve.

use crate::decimal::Decimal;

/// Highest level the curve defines.
pub const MAX_LEVEL: u32 = 100;

/// Experience required to reach each level, indexed by `level - 1`.
const LEVEL_THRESHOLDS: [u32; MAX_LEVEL as usize] = [
    0, 5, 15, 50, 100, 200, 350, 700, 1_400, 2_100, // 1..=10
    2_800, 3_500, 4_200, 4_900, 5_600, 6_300, 7_000, 7_700, 8_400, 9_100, // 11..=20
    9_800, 10_500, 11_200, 11_900, 12_600, 13_300, 14_000, 14_700, 15_400, 16_100, // 21..=30
    16_900, 17_700, 18_500, 19_300, 20_100, 20_900, 21_700, 22_500, 23_300, 24_100, // 31..=40
    25_100, 26_100, 27_100, 28_100, 29_100, 30_100, 31_100, 32_100, 33_100, 34_100, // 41..=50
    35_300, 36_500, 37_700, 38_900, 40_100, 41_300, 42_500, 43_700, 44_900, 46_100, // 51..=60
    47_600, 49_100, 50_600, 52_100, 53_600, 55_100, 56_600, 58_100, 59_600, 61_100, // 61..=70
    62_900, 64_700, 66_500, 68_300, 70_100, 71_900, 73_700, 75_500, 77_300, 79_100, // 71..=80
    81_300, 83_500, 85_700, 87_900, 90_100, 92_300, 94_500, 96_700, 98_900, 101_100, // 81..=90
    103_700, 106_300, 108_900, 111_500, 114_100, 116_700, 119_300, 121_900, 124_500, 127_100, // 91..=100
];

/// Highest level whose threshold does not exceed `experience`.
///
/// Negative or zero experience is level 1.
pub fn bumpkin_level(experience: Decimal) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .rposition(|threshold| Decimal::from(*threshold) <= experience)
        .map_or(1, |index| index as u32 + 1)
}
