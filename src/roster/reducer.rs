//! Combined reducer over the named slices of [`RosterState`].

use crate::roster::action::RosterAction;
use crate::roster::state::RosterState;
use crate::roster::{pirates, weapons};
use crate::store::Reducer;

/// Delegates each slice to its sub-reducer.
///
/// Every dispatch recomputes every slice; a sub-reducer that does not
/// recognize the action hands its slice back unchanged, so untouched slices
/// stay pointer-equal across dispatches.
pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterState;
    type Action = RosterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        RosterState {
            pirates: pirates::reduce(state.pirates, &action),
            weapons: weapons::reduce(state.weapons, &action),
        }
    }
}
