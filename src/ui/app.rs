use std::time::{Duration, Instant};

use tracing::debug;

use crate::filter::{DispatchOutcome, NameFilter, REJECTION_NOTICE};
use crate::roster::{
    IdGenerator, ItemId, Pirate, RosterAction, RosterReducer, RosterState, Weapon,
};
use crate::store::Store;

/// How long a rejection notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Which list pane has the cursor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Pirates,
    Weapons,
}

struct Notice {
    text: String,
    raised_at: Instant,
}

/// UI-local state: everything the terminal needs that is not application
/// state. Application state lives in the store and is read per frame.
///
/// Every action the app emits goes through the name filter, so a rejected
/// name never reaches the store.
pub struct App {
    store: Store<RosterReducer>,
    filter: NameFilter,
    ids: IdGenerator,
    focus: Pane,
    entry: String,
    pirate_cursor: usize,
    weapon_cursor: usize,
    notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(store: Store<RosterReducer>, filter: NameFilter, ids: IdGenerator) -> Self {
        Self {
            store,
            filter,
            ids,
            focus: Pane::Pirates,
            entry: String::new(),
            pirate_cursor: 0,
            weapon_cursor: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Current application state, read from the store.
    pub fn state(&self) -> RosterState {
        self.store.get_state()
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|notice| notice.text.as_str())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Cursor position for `pane`, clamped to the current slice length.
    pub fn cursor(&self, pane: Pane) -> Option<usize> {
        let state = self.state();
        let (len, cursor) = match pane {
            Pane::Pirates => (state.pirates.len(), self.pirate_cursor),
            Pane::Weapons => (state.weapons.len(), self.weapon_cursor),
        };
        if len == 0 {
            None
        } else {
            Some(cursor.min(len - 1))
        }
    }

    pub fn switch_pane(&mut self) {
        self.focus = match self.focus {
            Pane::Pirates => Pane::Weapons,
            Pane::Weapons => Pane::Pirates,
        };
    }

    pub fn select_prev(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = match self.focus {
            Pane::Pirates => self.state().pirates.len(),
            Pane::Weapons => self.state().weapons.len(),
        };
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1).min(len - 1);
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Pirates => &mut self.pirate_cursor,
            Pane::Weapons => &mut self.weapon_cursor,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        self.entry.push(ch);
    }

    pub fn backspace(&mut self) {
        self.entry.pop();
    }

    /// Clears the entry buffer; returns whether there was anything to clear.
    pub fn clear_entry(&mut self) -> bool {
        let had_text = !self.entry.is_empty();
        self.entry.clear();
        had_text
    }

    /// Submits the entry buffer to the focused pane, or toggles the
    /// selected pirate when the buffer is empty.
    ///
    /// The buffer is cleared before the guarded dispatch, so a rejected
    /// name is gone from the entry line when the notice appears.
    pub fn submit(&mut self) {
        let name = self.entry.trim().to_string();
        self.entry.clear();
        if name.is_empty() {
            self.toggle_selected();
            return;
        }

        let action = match self.focus {
            Pane::Pirates => RosterAction::AddPirate {
                pirate: Pirate {
                    id: self.ids.next_id(),
                    name,
                    complete: false,
                },
            },
            Pane::Weapons => RosterAction::AddWeapon {
                weapon: Weapon {
                    id: self.ids.next_id(),
                    name,
                },
            },
        };
        self.dispatch(action);
    }

    /// Toggles the `complete` flag of the selected pirate. No-op on the
    /// weapons pane.
    pub fn toggle_selected(&mut self) {
        if self.focus != Pane::Pirates {
            return;
        }
        if let Some(id) = self.selected_id() {
            self.dispatch(RosterAction::TogglePirate { id });
        }
    }

    /// Removes the selected item from the focused pane.
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let action = match self.focus {
            Pane::Pirates => RosterAction::RemovePirate { id },
            Pane::Weapons => RosterAction::RemoveWeapon { id },
        };
        self.dispatch(action);
    }

    fn selected_id(&self) -> Option<ItemId> {
        let state = self.state();
        let index = self.cursor(self.focus)?;
        match self.focus {
            Pane::Pirates => state.pirates.get(index).map(|pirate| pirate.id),
            Pane::Weapons => state.weapons.get(index).map(|weapon| weapon.id),
        }
    }

    fn dispatch(&mut self, action: RosterAction) {
        debug!(?action, "dispatching");
        let outcome = self.filter.check_and_dispatch(&self.store, action);
        if let DispatchOutcome::Rejected(_) = outcome {
            self.notice = Some(Notice {
                text: REJECTION_NOTICE.to_string(),
                raised_at: Instant::now(),
            });
        }
    }

    /// Expires the notice. Returns true when the screen needs a redraw.
    pub fn on_tick(&mut self) -> bool {
        if let Some(notice) = &self.notice {
            if notice.raised_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
                return true;
            }
        }
        false
    }
}
