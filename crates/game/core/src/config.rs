//! Engine configuration: balance constants and caller-granted capabilities.

use bitflags::bitflags;

use crate::action::ActionContext;
use crate::state::Timestamp;

bitflags! {
    /// Capabilities granted by the caller for a single action.
    ///
    /// Flags never come from the state snapshot itself; the boundary decides
    /// which player sessions hold them and passes them in via
    /// [`ActionContext`](crate::action::ActionContext).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u32 {
        /// Allows removing buildings whose removal is otherwise restricted
        /// (for example a water well that keeps planted crops alive).
        const LANDSCAPING = 1 << 0;
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Capabilities granted to every action executed with this configuration.
    pub features: FeatureFlags,
}

impl GameConfig {
    // ===== economy =====
    /// Decimal places kept when an inventory balance is reduced by a sale.
    /// Remainders below this precision are truncated toward zero.
    pub const SALE_PRECISION_DECIMALS: u32 = 2;

    // ===== capacity =====
    /// Chickens supported by each placed hen house.
    pub const HEN_HOUSE_CAPACITY: usize = 10;
    /// Extra chickens per placed hen house while a Chicken Coop is built.
    pub const CHICKEN_COOP_BONUS: usize = 5;
    /// Crop plots supported without any water well.
    pub const BASE_SUPPORTED_PLOTS: usize = 10;
    /// Extra crop plots supported by each placed water well.
    pub const PLOTS_PER_WATER_WELL: usize = 8;

    pub fn new() -> Self {
        Self {
            features: FeatureFlags::empty(),
        }
    }

    pub fn with_features(features: FeatureFlags) -> Self {
        Self { features }
    }

    /// Context for an action issued at `created_at` under this configuration.
    pub fn context(&self, created_at: Timestamp) -> ActionContext {
        ActionContext::new(created_at).with_features(self.features)
    }
}
