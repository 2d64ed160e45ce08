//! Stage-then-commit working copies of the state.
//!
//! A handler never mutates the caller's snapshot. It receives a [`Draft`],
//! which owns a deep clone of the base state, and the engine either commits
//! the draft into the next state or rolls it back when any phase fails.

use super::GameState;

/// A working copy of a [`GameState`] owned by one action.
#[derive(Debug)]
pub struct Draft<'a> {
    base: &'a GameState,
    working: GameState,
}

impl<'a> Draft<'a> {
    /// Clones `base` into a structurally independent working copy.
    pub fn new(base: &'a GameState) -> Self {
        Self {
            base,
            working: base.clone(),
        }
    }

    /// The snapshot the draft was taken from. Never changes.
    pub fn base(&self) -> &'a GameState {
        self.base
    }

    /// Current contents of the working copy.
    pub fn state(&self) -> &GameState {
        &self.working
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.working
    }

    /// Returns true when the working copy differs from the base.
    pub fn is_dirty(&self) -> bool {
        self.working != *self.base
    }

    /// Consumes the draft and yields the working copy as the next state.
    #[must_use]
    pub fn commit(self) -> GameState {
        self.working
    }

    /// Discards the working copy, however far it got, and yields the base.
    #[must_use]
    pub fn rollback(self) -> GameState {
        self.base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Decimal;

    #[test]
    fn mutations_never_reach_the_base() {
        let base = GameState::default();
        let mut draft = Draft::new(&base);
        assert!(!draft.is_dirty());

        draft.state_mut().coins = Decimal::from(50);
        assert!(draft.is_dirty());
        assert_eq!(draft.base().coins, Decimal::ZERO);

        let next = draft.commit();
        assert_eq!(next.coins, Decimal::from(50));
        assert_eq!(base.coins, Decimal::ZERO);
    }

    #[test]
    fn rollback_discards_partial_work() {
        let base = GameState::default();
        let mut draft = Draft::new(&base);
        draft.state_mut().coins = Decimal::from(7);
        draft.state_mut().chickens.insert("late", crate::state::Chicken::idle());

        assert_eq!(draft.rollback(), base);
    }

    #[test]
    fn dropped_drafts_leave_no_trace() {
        let base = GameState::default();
        {
            let mut draft = Draft::new(&base);
            draft.state_mut().coins = Decimal::from(-1);
        }
        assert_eq!(base, GameState::default());
    }
}
