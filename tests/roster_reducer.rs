//! Scenario coverage for the combined roster reducer, through the public
//! store surface.

use std::sync::Arc;

use corsair::roster::{ItemId, Pirate, RosterAction, RosterReducer, RosterState, Weapon};
use corsair::store::{Reducer, Store};

fn jack() -> Pirate {
    Pirate {
        id: ItemId(1),
        name: "Jack".to_string(),
        complete: false,
    }
}

fn cutlass() -> Weapon {
    Weapon {
        id: ItemId(2),
        name: "Cutlass".to_string(),
    }
}

#[test]
fn add_pirate_to_empty_state() {
    let store = Store::<RosterReducer>::new();
    store.dispatch(RosterAction::AddPirate { pirate: jack() });

    let state = store.get_state();
    assert_eq!(*state.pirates, vec![jack()]);
    assert!(state.weapons.is_empty());
}

#[test]
fn toggle_sets_complete_and_preserves_everything_else() {
    let store = Store::<RosterReducer>::new();
    store.dispatch(RosterAction::AddPirate { pirate: jack() });
    store.dispatch(RosterAction::AddPirate {
        pirate: Pirate {
            id: ItemId(3),
            name: "Anne".to_string(),
            complete: false,
        },
    });

    store.dispatch(RosterAction::TogglePirate { id: ItemId(1) });

    let state = store.get_state();
    assert_eq!(state.pirates.len(), 2);
    assert_eq!(state.pirates[0].id, ItemId(1));
    assert_eq!(state.pirates[0].name, "Jack");
    assert!(state.pirates[0].complete);
    assert!(!state.pirates[1].complete);
}

#[test]
fn toggle_twice_reverts() {
    let store = Store::<RosterReducer>::new();
    store.dispatch(RosterAction::AddPirate { pirate: jack() });
    store.dispatch(RosterAction::TogglePirate { id: ItemId(1) });
    store.dispatch(RosterAction::TogglePirate { id: ItemId(1) });

    assert!(!store.get_state().pirates[0].complete);
}

#[test]
fn remove_pirate_empties_the_list() {
    let store = Store::<RosterReducer>::new();
    store.dispatch(RosterAction::AddPirate { pirate: jack() });
    store.dispatch(RosterAction::RemovePirate { id: ItemId(1) });

    assert!(store.get_state().pirates.is_empty());
}

#[test]
fn weapons_are_added_and_removed_independently() {
    let store = Store::<RosterReducer>::new();
    store.dispatch(RosterAction::AddPirate { pirate: jack() });
    store.dispatch(RosterAction::AddWeapon { weapon: cutlass() });

    let state = store.get_state();
    assert_eq!(state.pirates.len(), 1);
    assert_eq!(state.weapons.len(), 1);

    store.dispatch(RosterAction::RemoveWeapon { id: ItemId(2) });
    let state = store.get_state();
    assert_eq!(state.pirates.len(), 1);
    assert!(state.weapons.is_empty());
}

#[test]
fn unrelated_action_keeps_the_other_slice_pointer_equal() {
    let store = Store::<RosterReducer>::new();
    store.dispatch(RosterAction::AddWeapon { weapon: cutlass() });
    let before = store.get_state();

    store.dispatch(RosterAction::AddPirate { pirate: jack() });
    let after = store.get_state();

    assert!(Arc::ptr_eq(&before.weapons, &after.weapons));
    assert!(!Arc::ptr_eq(&before.pirates, &after.pirates));
}

#[test]
fn replay_equals_left_fold_over_the_reducer() {
    let actions = vec![
        RosterAction::AddPirate { pirate: jack() },
        RosterAction::AddWeapon { weapon: cutlass() },
        RosterAction::TogglePirate { id: ItemId(1) },
        RosterAction::RemoveWeapon { id: ItemId(2) },
    ];

    let folded = actions
        .iter()
        .cloned()
        .fold(RosterState::default(), RosterReducer::reduce);

    let store = Store::<RosterReducer>::new();
    for action in actions {
        store.dispatch(action);
    }

    assert_eq!(store.get_state(), folded);
}

#[test]
fn remove_unknown_id_is_a_noop_commit() {
    let store = Store::<RosterReducer>::new();
    store.dispatch(RosterAction::AddPirate { pirate: jack() });
    store.dispatch(RosterAction::RemovePirate { id: ItemId(99) });

    assert_eq!(store.get_state().pirates.len(), 1);
}
