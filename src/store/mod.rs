//! Minimal observable state container.
//!
//! One-way data flow: collaborators dispatch actions, a pure reducer folds
//! them into the next state, and subscribed listeners are told after every
//! commit.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Listeners
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: the single authoritative value, replaced wholesale per action
//! - **Action**: a tagged description of an intended change
//! - **Reducer**: a pure function from (state, action) to the next state
//! - **Listener**: a callback run after every committed dispatch

mod action;
mod container;
mod reducer;
mod state;

pub use action::Action;
pub use container::{Store, Subscription};
pub use reducer::Reducer;
pub use state::State;
