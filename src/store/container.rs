//! The container owning state and mediating all reads, writes, and
//! notifications.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::reducer::Reducer;

type Callback = Arc<dyn Fn() + Send + Sync>;

struct ListenerEntry {
    id: u64,
    callback: Callback,
}

struct Shared<S> {
    state: S,
    listeners: Vec<ListenerEntry>,
    next_listener_id: u64,
}

/// The single authority over application state.
///
/// State changes only by dispatching an action through the reducer `R`.
/// `Store` is a cheap cloneable handle; all clones share one state slot.
/// The internal lock is held while computing and committing state or while
/// editing the listener set, never while listeners run.
pub struct Store<R: Reducer> {
    shared: Arc<Mutex<Shared<R::State>>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Creates a store seeded with `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Creates a store seeded with an explicit initial state.
    pub fn with_state(initial: R::State) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: initial,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Returns a clone of the most recently committed state.
    pub fn get_state(&self) -> R::State {
        self.shared.lock().state.clone()
    }

    /// Applies `action` through the reducer, commits the result, then runs
    /// every listener in subscription order before returning.
    ///
    /// Listeners run with the lock released, so a listener may unsubscribe
    /// itself or others, subscribe new listeners, or dispatch again
    /// (re-entrant dispatch is legal; bounding the recursion is the
    /// caller's responsibility). The listener set is snapshotted when
    /// notification starts: listeners removed mid-notification still finish
    /// the current round, listeners added mid-notification first run on the
    /// next dispatch.
    ///
    /// A panicking reducer commits nothing. The state slot is written only
    /// after `reduce` returns, so the previous state stays in place.
    pub fn dispatch(&self, action: R::Action) {
        let snapshot: Vec<Callback> = {
            let mut shared = self.shared.lock();
            let next = R::reduce(shared.state.clone(), action);
            shared.state = next;
            shared
                .listeners
                .iter()
                .map(|entry| Arc::clone(&entry.callback))
                .collect()
        };

        for listener in snapshot {
            listener();
        }
    }

    /// Registers `listener` to run, with no arguments, after every
    /// dispatch.
    ///
    /// The returned [`Subscription`] removes exactly this listener;
    /// unsubscribing twice is a no-op.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut shared = self.shared.lock();
            let id = shared.next_listener_id;
            shared.next_listener_id += 1;
            shared.listeners.push(ListenerEntry {
                id,
                callback: Arc::new(listener),
            });
            id
        };

        let weak = Arc::downgrade(&self.shared);
        Subscription {
            cancel: Arc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.lock().listeners.retain(|entry| entry.id != id);
                }
            }),
        }
    }

    /// Number of currently subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.shared.lock().listeners.len()
    }
}

/// Handle for removing a listener registered with [`Store::subscribe`].
///
/// Dropping the handle does not unsubscribe; removal is always explicit.
pub struct Subscription {
    cancel: Arc<dyn Fn() + Send + Sync>,
}

impl Subscription {
    /// Removes the listener. Safe to call repeatedly; later calls, or calls
    /// after the store is gone, do nothing.
    pub fn unsubscribe(&self) {
        (self.cancel)();
    }
}
