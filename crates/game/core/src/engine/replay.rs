//! Event-sourced replay.
//!
//! A farm is the fold of its action log over an initial snapshot. Replaying
//! the same log with the same flags always yields the same state.

use tracing::info;

use crate::action::{Action, ActionContext};
use crate::config::FeatureFlags;
use crate::state::{GameState, Timestamp};

use super::{ExecuteError, GameEngine};

/// One entry of an action log: the action and the instant it was issued.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoggedAction {
    pub created_at: Timestamp,
    pub action: Action,
}

impl LoggedAction {
    pub fn new(created_at: Timestamp, action: impl Into<Action>) -> Self {
        Self {
            created_at,
            action: action.into(),
        }
    }
}

/// The first log entry the engine rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("action #{index} rejected: {error}")]
pub struct ReplayError {
    pub index: usize,
    pub error: ExecuteError,
}

/// Folds `log` over `initial`, stopping at the first rejected action.
pub fn replay<'l>(
    initial: &GameState,
    log: impl IntoIterator<Item = &'l LoggedAction>,
    features: FeatureFlags,
) -> Result<GameState, ReplayError> {
    let mut state = initial.clone();
    let mut applied = 0usize;
    info!(?features, "replaying action log");

    for (index, entry) in log.into_iter().enumerate() {
        let ctx = ActionContext::new(entry.created_at).with_features(features);
        state = GameEngine::new(&state)
            .execute(&entry.action, &ctx)
            .map_err(|error| ReplayError { index, error })?;
        applied += 1;
    }

    info!(applied, "replay finished");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{SeedBoughtAction, SeedBoughtError, TreasureSoldAction};
    use crate::catalog::ItemName;
    use crate::decimal::Decimal;
    use crate::engine::{TransitionPhase, TransitionPhaseError};
    use crate::state::Bumpkin;

    fn farm() -> GameState {
        let mut state = GameState::with_bumpkin(Bumpkin::default());
        state.inventory.set(ItemName::CropPlot, Decimal::ONE);
        state.inventory.set(ItemName::Pearl, Decimal::ONE);
        state.stock.set(ItemName::SunflowerSeed, Decimal::from(400));
        state
    }

    #[test]
    fn folds_log_in_order() {
        let log = [
            LoggedAction::new(Timestamp(10), TreasureSoldAction::new(ItemName::Pearl, 1)),
            LoggedAction::new(Timestamp(20), SeedBoughtAction::new(ItemName::SunflowerSeed, 100)),
        ];
        let state = replay(&farm(), &log, FeatureFlags::empty()).unwrap();

        assert_eq!(state.coins, Decimal::from(2_999));
        assert_eq!(state.stock.count(ItemName::SunflowerSeed), Decimal::from(300));
        assert_eq!(state.inventory.count(ItemName::SunflowerSeed), Decimal::from(100));
    }

    #[test]
    fn replay_is_deterministic() {
        let log = [
            LoggedAction::new(Timestamp(10), TreasureSoldAction::new(ItemName::Pearl, 1)),
            LoggedAction::new(Timestamp(20), SeedBoughtAction::new(ItemName::SunflowerSeed, 3)),
        ];
        let first = replay(&farm(), &log, FeatureFlags::empty()).unwrap();
        let second = replay(&farm(), &log, FeatureFlags::empty()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn stops_at_first_rejection() {
        let log = [
            LoggedAction::new(Timestamp(10), SeedBoughtAction::new(ItemName::SunflowerSeed, 1)),
            LoggedAction::new(Timestamp(20), SeedBoughtAction::new(ItemName::SunflowerSeed, 1)),
        ];
        let err = replay(&farm(), &log, FeatureFlags::empty()).unwrap_err();

        assert_eq!(err.index, 0);
        assert_eq!(
            err.error,
            ExecuteError::SeedBought(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                SeedBoughtError::InsufficientCoins {
                    required: Decimal::new(1, 2),
                    available: Decimal::ZERO,
                },
            ))
        );
    }
}
