//! Reducer trait: the only place state transitions happen.

use super::action::Action;
use super::state::State;

/// Computes the next state from the current state and one action.
///
/// `reduce` must be pure: no observable side effects, deterministic for the
/// same inputs, and total over every action variant. A variant the reducer
/// does not recognize returns the input state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process one action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
