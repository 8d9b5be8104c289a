//! Name screening applied before actions reach the store.

use tracing::warn;

use crate::roster::{RosterAction, RosterReducer};
use crate::store::Store;

/// Notice shown when a submitted name is rejected.
pub const REJECTION_NOTICE: &str = "You're fired!";

/// Outcome of a guarded dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The action reached the store.
    Dispatched,
    /// The action was dropped before dispatch.
    Rejected(Rejection),
}

/// Why an action was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// The banned word the submitted name matched.
    pub word: String,
}

/// Screens add-actions for banned substrings, case-insensitively.
///
/// Only `AddPirate` and `AddWeapon` carry a user-entered name; every other
/// variant passes through unexamined.
#[derive(Debug, Clone)]
pub struct NameFilter {
    banned: Vec<String>,
}

impl NameFilter {
    /// Builds a filter from banned substrings. Patterns match
    /// case-insensitively; blank patterns are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim().to_lowercase();
                if word.is_empty() {
                    None
                } else {
                    Some(word)
                }
            })
            .collect();
        Self { banned }
    }

    /// Checks one action, returning the rejection it would trigger, if any.
    pub fn screen(&self, action: &RosterAction) -> Option<Rejection> {
        let name = match action {
            RosterAction::AddPirate { pirate } => pirate.name.as_str(),
            RosterAction::AddWeapon { weapon } => weapon.name.as_str(),
            _ => return None,
        };

        let lowered = name.to_lowercase();
        self.banned
            .iter()
            .find(|word| lowered.contains(word.as_str()))
            .map(|word| Rejection { word: word.clone() })
    }

    /// Forwards `action` to the store unless a banned name rejects it.
    pub fn check_and_dispatch(
        &self,
        store: &Store<RosterReducer>,
        action: RosterAction,
    ) -> DispatchOutcome {
        if let Some(rejection) = self.screen(&action) {
            warn!(word = %rejection.word, "rejected submitted name");
            return DispatchOutcome::Rejected(rejection);
        }

        store.dispatch(action);
        DispatchOutcome::Dispatched
    }
}
