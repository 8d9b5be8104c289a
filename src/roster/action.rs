//! Everything that can happen to the roster.

use crate::roster::item::{ItemId, Pirate, Weapon};
use crate::store::Action;

/// A closed set of tagged variants: a malformed action is unrepresentable,
/// and a variant a sub-reducer does not recognize falls through to the
/// default arm of its match.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    AddPirate { pirate: Pirate },
    RemovePirate { id: ItemId },
    TogglePirate { id: ItemId },
    AddWeapon { weapon: Weapon },
    RemoveWeapon { id: ItemId },
}

impl Action for RosterAction {}
