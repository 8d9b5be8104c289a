//! Sub-reducer for the pirate slice.

use std::sync::Arc;

use crate::roster::action::RosterAction;
use crate::roster::item::Pirate;

/// Reduces the pirate slice against one action.
///
/// Weapon variants return the input slice untouched, as the same `Arc`.
pub(crate) fn reduce(slice: Arc<Vec<Pirate>>, action: &RosterAction) -> Arc<Vec<Pirate>> {
    match action {
        RosterAction::AddPirate { pirate } => {
            let mut next = Vec::with_capacity(slice.len() + 1);
            next.extend(slice.iter().cloned());
            next.push(pirate.clone());
            Arc::new(next)
        }
        RosterAction::RemovePirate { id } => Arc::new(
            slice
                .iter()
                .filter(|pirate| pirate.id != *id)
                .cloned()
                .collect(),
        ),
        RosterAction::TogglePirate { id } => Arc::new(
            slice
                .iter()
                .map(|pirate| {
                    if pirate.id == *id {
                        Pirate {
                            complete: !pirate.complete,
                            ..pirate.clone()
                        }
                    } else {
                        pirate.clone()
                    }
                })
                .collect(),
        ),
        _ => slice,
    }
}
