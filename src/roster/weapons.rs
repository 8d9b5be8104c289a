//! Sub-reducer for the weapon slice.

use std::sync::Arc;

use crate::roster::action::RosterAction;
use crate::roster::item::Weapon;

/// Reduces the weapon slice against one action.
///
/// Pirate variants return the input slice untouched, as the same `Arc`.
pub(crate) fn reduce(slice: Arc<Vec<Weapon>>, action: &RosterAction) -> Arc<Vec<Weapon>> {
    match action {
        RosterAction::AddWeapon { weapon } => {
            let mut next = Vec::with_capacity(slice.len() + 1);
            next.extend(slice.iter().cloned());
            next.push(weapon.clone());
            Arc::new(next)
        }
        RosterAction::RemoveWeapon { id } => Arc::new(
            slice
                .iter()
                .filter(|weapon| weapon.id != *id)
                .cloned()
                .collect(),
        ),
        _ => slice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::item::ItemId;

    fn weapon(id: u64, name: &str) -> Weapon {
        Weapon {
            id: ItemId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn add_appends_in_order() {
        let slice = Arc::new(vec![weapon(1, "Cutlass")]);
        let next = reduce(
            slice,
            &RosterAction::AddWeapon {
                weapon: weapon(2, "Flintlock"),
            },
        );
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].name, "Flintlock");
    }

    #[test]
    fn remove_drops_matching_id() {
        let slice = Arc::new(vec![weapon(1, "Cutlass"), weapon(2, "Flintlock")]);
        let next = reduce(slice, &RosterAction::RemoveWeapon { id: ItemId(2) });
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].name, "Cutlass");
    }

    #[test]
    fn pirate_actions_return_the_same_allocation() {
        let slice = Arc::new(vec![weapon(1, "Cutlass")]);
        let next = reduce(
            Arc::clone(&slice),
            &RosterAction::TogglePirate { id: ItemId(1) },
        );
        assert!(Arc::ptr_eq(&slice, &next));
    }
}
