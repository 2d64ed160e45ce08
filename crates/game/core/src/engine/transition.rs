//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionContext, ActionTransition};
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the draft state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    ctx: &ActionContext,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}

/// Routes each action variant to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    ctx: &ActionContext,
) -> Result<(), ExecuteError> {
    match action {
        Action::RemoveBuilding(transition) => {
            drive_transition(transition, state, ctx).map_err(ExecuteError::RemoveBuilding)
        }
        Action::SeedBought(transition) => {
            drive_transition(transition, state, ctx).map_err(ExecuteError::SeedBought)
        }
        Action::TreasureSold(transition) => {
            drive_transition(transition, state, ctx).map_err(ExecuteError::TreasureSold)
        }
    }
}
