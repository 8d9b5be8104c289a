//! Top-level application state.

use std::sync::Arc;

use crate::roster::item::{Pirate, Weapon};
use crate::store::State;

/// One slice per list.
///
/// Slices are `Arc`ed so a sub-reducer that leaves its slice alone hands
/// back the same allocation, which `Arc::ptr_eq` can observe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    pub pirates: Arc<Vec<Pirate>>,
    pub weapons: Arc<Vec<Weapon>>,
}

impl State for RosterState {}
