//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! stages every action on a [`Draft`], drives the transition phases against
//! it and only hands back the working copy when every phase and the global
//! invariant check pass. The caller's snapshot is never mutated.

mod errors;
pub mod replay;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use replay::{LoggedAction, ReplayError, replay};

use tracing::debug;

use crate::action::{Action, ActionContext};
use crate::boost::BoostName;
use crate::error::GameError;
use crate::state::{Draft, GameState};

/// What resolving one action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The next state, or the unchanged snapshot when the action was rejected.
    pub state: GameState,
    pub rejection: Option<ExecuteError>,
}

/// Game engine resolving actions against one state snapshot.
///
/// All state transitions flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine reading from the given state.
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &'a GameState {
        self.state
    }

    /// Resolves `action` and returns the next state.
    ///
    /// On error the draft is rolled back, so the snapshot this engine was
    /// built from is exactly what the caller still holds.
    pub fn execute(&self, action: &Action, ctx: &ActionContext) -> Result<GameState, ExecuteError> {
        let Resolution { state, rejection } = self.resolve(action, ctx);
        match rejection {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }

    /// Resolves `action` and always yields the state to carry forward.
    ///
    /// A rejected action contributes nothing: even when `apply` already
    /// mutated the draft, the carried state equals the snapshot.
    pub fn resolve(&self, action: &Action, ctx: &ActionContext) -> Resolution {
        let kind = action.kind();
        let mut draft = Draft::new(self.state);

        let outcome = transition::execute_transition(action, draft.state_mut(), ctx)
            .and_then(|()| draft.state().check_invariants().map_err(ExecuteError::from));

        if let Err(error) = outcome {
            debug!(
                action = %kind,
                created_at = %ctx.created_at,
                code = error.error_code(),
                phase = error.phase().map(|phase| phase.as_str()),
                "action rejected"
            );
            return Resolution {
                state: draft.rollback(),
                rejection: Some(error),
            };
        }

        let boosts = fired_boosts(draft.base(), draft.state(), ctx);
        debug!(
            action = %kind,
            created_at = %ctx.created_at,
            boosts = ?boosts,
            "action committed"
        );
        Resolution {
            state: draft.commit(),
            rejection: None,
        }
    }

    /// Decodes a raw JSON action and resolves it.
    #[cfg(feature = "serde")]
    pub fn execute_value(
        &self,
        value: serde_json::Value,
        ctx: &ActionContext,
    ) -> Result<GameState, ExecuteError> {
        let action = Action::from_value(value)?;
        self.execute(&action, ctx)
    }
}

/// Boosts whose usage stamp moved to `ctx.created_at` during this action.
fn fired_boosts(before: &GameState, after: &GameState, ctx: &ActionContext) -> Vec<BoostName> {
    after
        .boosts_used_at
        .iter()
        .filter(|&(boost, at)| {
            at == ctx.created_at && before.boosts_used_at.last_used(boost) != Some(at)
        })
        .map(|(boost, _)| boost)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{RemoveBuildingAction, RemoveBuildingError, TreasureSoldAction};
    use crate::catalog::{BuildingName, ItemName};
    use crate::decimal::Decimal;
    use crate::error::ErrorCategory;
    use crate::state::{Bumpkin, Coordinates, PlacedBuilding, Timestamp};

    fn ctx() -> ActionContext {
        ActionContext::new(Timestamp(1_000))
    }

    #[test]
    fn rejected_action_leaves_snapshot_untouched() {
        let mut state = GameState::with_bumpkin(Bumpkin::default());
        state.inventory.set(ItemName::Pearl, Decimal::from(3));
        let before = state.clone();

        let action = Action::from(TreasureSoldAction::new(ItemName::Pearl, 5));
        let err = GameEngine::new(&state).execute(&action, &ctx()).unwrap_err();

        assert_eq!(err.phase(), Some(TransitionPhase::PreValidate));
        assert_eq!(err.category(), ErrorCategory::InsufficientResources);
        assert_eq!(state, before);
    }

    #[test]
    fn committed_action_returns_new_state() {
        let mut state = GameState::with_bumpkin(Bumpkin::default());
        state.buildings.push(
            BuildingName::WaterWell,
            PlacedBuilding::placed("abc", Coordinates::new(1, 1), Timestamp(500)),
        );

        let action = Action::from(RemoveBuildingAction::new(BuildingName::WaterWell, "abc"));
        let next = GameEngine::new(&state).execute(&action, &ctx()).unwrap();

        let well = next.buildings.find(BuildingName::WaterWell, "abc").unwrap();
        assert_eq!(well.removed_at, Some(Timestamp(1_000)));
        assert!(state.buildings.find(BuildingName::WaterWell, "abc").unwrap().is_placed());
    }

    #[test]
    fn handler_errors_keep_their_code() {
        let state = GameState::new();
        let action = Action::from(RemoveBuildingAction::new(BuildingName::HenHouse, "h"));
        let err = GameEngine::new(&state).execute(&action, &ctx()).unwrap_err();
        assert_eq!(
            err,
            ExecuteError::RemoveBuilding(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                RemoveBuildingError::NoBumpkin,
            ))
        );
        assert_eq!(err.error_code(), "REMOVE_BUILDING_NO_BUMPKIN");
    }

    #[test]
    fn corrupt_input_is_caught_by_invariant_check() {
        let mut state = GameState::with_bumpkin(Bumpkin::default());
        state.stock.set(ItemName::OnionSeed, Decimal::from(-5));
        state.inventory.set(ItemName::Pearl, Decimal::ONE);

        let action = Action::from(TreasureSoldAction::new(ItemName::Pearl, 1));
        let err = GameEngine::new(&state).execute(&action, &ctx()).unwrap_err();
        assert!(matches!(err, ExecuteError::Invariant(_)));
        assert_eq!(err.phase(), None);
    }

    #[test]
    fn invariant_rejection_rolls_back_applied_changes() {
        let mut state = GameState::with_bumpkin(Bumpkin::default());
        state.inventory.set(ItemName::Pearl, Decimal::ONE);
        for name in [BuildingName::Bakery, BuildingName::Kitchen] {
            state.buildings.push(
                name,
                PlacedBuilding::placed("twin", Coordinates::new(0, 0), Timestamp(100)),
            );
        }

        let action = Action::from(TreasureSoldAction::new(ItemName::Pearl, 1));
        let resolution = GameEngine::new(&state).resolve(&action, &ctx());

        let err = resolution.rejection.unwrap();
        assert!(matches!(err, ExecuteError::Invariant(_)));
        assert_eq!(resolution.state, state);
        assert_eq!(resolution.state.inventory.count(ItemName::Pearl), Decimal::ONE);
    }

    #[test]
    fn committed_resolution_matches_execute() {
        let mut state = GameState::with_bumpkin(Bumpkin::default());
        state.inventory.set(ItemName::Pearl, Decimal::from(2));

        let action = Action::from(TreasureSoldAction::new(ItemName::Pearl, 1));
        let engine = GameEngine::new(&state);
        let resolution = engine.resolve(&action, &ctx());

        assert_eq!(resolution.rejection, None);
        assert_eq!(Ok(resolution.state), engine.execute(&action, &ctx()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_payloads_go_through_the_registry() {
        let state = GameState::new();
        let err = GameEngine::new(&state)
            .execute_value(serde_json::json!({"type": "chicken.fed"}), &ctx())
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UnknownAction);
    }
}
