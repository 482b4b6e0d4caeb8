// SPDX-License-Identifier: MPL-2.0
//! Shared toast store: the ordered collection of active notices plus an
//! observer registry.
//!
//! [`ToastStore`] is a cheaply cloneable handle; every clone points at the
//! same collection, and all mutations go through one critical section so
//! observers always see snapshots in mutation order. Construct a fresh
//! store per test rather than sharing one global.

use crate::toast::{Toast, ToastId};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Callback invoked with the current snapshot on every published change.
type Observer = Box<dyn FnMut(&[Toast]) + Send>;

/// Registry key for a subscribed observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ObserverId(u64);

#[derive(Default)]
struct State {
    toasts: Vec<Toast>,
    observers: BTreeMap<ObserverId, Observer>,
    next_observer: u64,
}

/// Messages for toast state changes, emitted by the widget layer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Run a toast's action callback, then dismiss it.
    Action(ToastId),
}

/// Handle to the shared collection of active toasts.
///
/// `add` appends at the end and `remove` filters by id, so insertion
/// order is preserved and removal never reorders the rest. Both are
/// total: `remove` of an unknown id is a silent no-op, and `add` never
/// fails or enforces a capacity ceiling.
#[derive(Clone, Default)]
pub struct ToastStore {
    state: Arc<Mutex<State>>,
}

impl ToastStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking observer poisons the lock; the store keeps working.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a toast and returns its assigned ID.
    ///
    /// The toast's existing id is discarded and replaced with a freshly
    /// generated one, so ids are unique within the store regardless of
    /// what the caller passes in. The new snapshot is delivered to every
    /// observer before this method returns.
    pub fn add(&self, mut toast: Toast) -> ToastId {
        let mut state = self.lock();
        let id = ToastId::new();
        toast.set_id(id);
        state.toasts.push(toast);
        Self::publish(&mut state);
        id
    }

    /// Removes the toast with the given ID, if present.
    ///
    /// Unknown ids are ignored, so calling this twice for the same id is
    /// safe (e.g. once from a timer and once from a user click). No
    /// snapshot is published when nothing changed.
    pub fn remove(&self, id: ToastId) {
        let mut state = self.lock();
        let before = state.toasts.len();
        state.toasts.retain(|toast| toast.id() != id);
        if state.toasts.len() != before {
            Self::publish(&mut state);
        }
    }

    /// Removes every toast.
    pub fn clear(&self) {
        let mut state = self.lock();
        if !state.toasts.is_empty() {
            state.toasts.clear();
            Self::publish(&mut state);
        }
    }

    /// Registers an observer and returns a handle for deregistering it.
    ///
    /// The observer is invoked synchronously with the current snapshot
    /// before this method returns, and again after every change to the
    /// collection. Snapshots arrive in mutation order.
    ///
    /// Observers run inside the store's critical section and must not
    /// call back into the same store.
    ///
    /// Dropping the returned [`Subscription`] does not deregister the
    /// observer; call [`Subscription::unsubscribe`].
    pub fn subscribe(&self, observer: impl FnMut(&[Toast]) + Send + 'static) -> Subscription {
        let mut state = self.lock();
        let id = ObserverId(state.next_observer);
        state.next_observer += 1;

        let mut observer: Observer = Box::new(observer);
        observer(&state.toasts);
        state.observers.insert(id, observer);

        Subscription {
            state: Arc::downgrade(&self.state),
            id,
        }
    }

    /// Runs the action callback of the toast with the given ID.
    ///
    /// A no-op when the toast is absent or has no action. The callback
    /// runs outside the store's critical section, so it may freely call
    /// back into the store.
    pub fn run_action(&self, id: ToastId) {
        let action = {
            let state = self.lock();
            state
                .toasts
                .iter()
                .find(|toast| toast.id() == id)
                .and_then(|toast| toast.action().cloned())
        };

        if let Some(action) = action {
            action.press();
        }
    }

    /// Handles a message from the widget layer.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::Action(id) => {
                self.run_action(*id);
                self.remove(*id);
            }
        }
    }

    /// Returns a snapshot of the active toasts, in insertion order.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().toasts.len()
    }

    /// Returns whether the store holds no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().toasts.is_empty()
    }

    fn publish(state: &mut State) {
        let State {
            toasts, observers, ..
        } = state;
        for observer in observers.values_mut() {
            observer(toasts);
        }
    }
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ToastStore")
            .field("toasts", &state.toasts)
            .field("observers", &state.observers.len())
            .finish()
    }
}

/// Handle returned by [`ToastStore::subscribe`].
///
/// Holds no strong reference to the store; a store that has already been
/// dropped makes `unsubscribe` a no-op.
pub struct Subscription {
    state: Weak<Mutex<State>>,
    id: ObserverId,
}

impl Subscription {
    /// Deregisters the observer.
    ///
    /// Safe to call more than once; after the first call the observer
    /// receives no further snapshots.
    pub fn unsubscribe(&self) {
        if let Some(state) = self.state.upgrade() {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.observers.remove(&self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("store_alive", &(self.state.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastAction, Variant};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn recording_observer() -> (Arc<Mutex<Vec<Vec<Toast>>>>, impl FnMut(&[Toast]) + Send) {
        let snapshots = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&snapshots);
        let observer = move |toasts: &[Toast]| {
            sink.lock().unwrap().push(toasts.to_vec());
        };
        (snapshots, observer)
    }

    #[test]
    fn new_store_is_empty() {
        let store = ToastStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn add_appends_and_returns_fresh_id() {
        let store = ToastStore::new();
        let input = Toast::new().with_title("Saved");
        let provisional = input.id();

        let id = store.add(input);
        assert_ne!(id, provisional);
        assert_eq!(store.len(), 1);
        assert_eq!(store.toasts()[0].id(), id);
        assert_eq!(store.toasts()[0].title(), Some("Saved"));
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = ToastStore::new();
        let first = store.add(Toast::new().with_title("first"));
        let second = store.add(Toast::new().with_title("second"));

        let toasts = store.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].id(), first);
        assert_eq!(toasts[1].id(), second);
    }

    #[test]
    fn remove_filters_without_reordering() {
        let store = ToastStore::new();
        let a = store.add(Toast::new().with_title("a"));
        let b = store.add(Toast::new().with_title("b"));
        let c = store.add(Toast::new().with_title("c"));

        store.remove(b);

        let toasts = store.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].id(), a);
        assert_eq!(toasts[1].id(), c);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let store = ToastStore::new();
        let id = store.add(Toast::new());
        store.remove(id);
        store.remove(id);
        assert!(store.is_empty());
    }

    #[test]
    fn subscribe_delivers_current_snapshot_immediately() {
        let store = ToastStore::new();
        store.add(Toast::new().with_title("existing"));

        let (snapshots, observer) = recording_observer();
        let _subscription = store.subscribe(observer);

        let recorded = snapshots.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].len(), 1);
        assert_eq!(recorded[0][0].title(), Some("existing"));
    }

    #[test]
    fn observers_see_snapshots_in_mutation_order() {
        let store = ToastStore::new();
        let (snapshots, observer) = recording_observer();
        let _subscription = store.subscribe(observer);

        let id = store.add(Toast::new().with_title("one"));
        store.add(Toast::new().with_title("two"));
        store.remove(id);

        let recorded = snapshots.lock().unwrap();
        let lengths: Vec<usize> = recorded.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![0, 1, 2, 1]);
        assert_eq!(recorded[3][0].title(), Some("two"));
    }

    #[test]
    fn removing_absent_id_publishes_nothing() {
        let store = ToastStore::new();
        let id = store.add(Toast::new());

        let (snapshots, observer) = recording_observer();
        let _subscription = store.subscribe(observer);

        store.remove(id);
        store.remove(id);

        // Initial snapshot plus the one real removal.
        assert_eq!(snapshots.lock().unwrap().len(), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = ToastStore::new();
        let (snapshots, observer) = recording_observer();
        let subscription = store.subscribe(observer);

        store.add(Toast::new());
        subscription.unsubscribe();
        subscription.unsubscribe();
        store.add(Toast::new());

        // Initial snapshot plus the add before unsubscribing.
        assert_eq!(snapshots.lock().unwrap().len(), 2);
    }

    #[test]
    fn unsubscribe_after_store_dropped_is_noop() {
        let store = ToastStore::new();
        let subscription = store.subscribe(|_| {});
        drop(store);
        subscription.unsubscribe();
    }

    #[test]
    fn clear_removes_all_and_publishes_once() {
        let store = ToastStore::new();
        store.add(Toast::new());
        store.add(Toast::new());

        let (snapshots, observer) = recording_observer();
        let _subscription = store.subscribe(observer);

        store.clear();
        store.clear();

        let recorded = snapshots.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert!(recorded[1].is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn run_action_invokes_callback() {
        static PRESSES: AtomicUsize = AtomicUsize::new(0);
        let store = ToastStore::new();
        let id = store.add(Toast::new().with_action(ToastAction::new("Undo", || {
            PRESSES.fetch_add(1, Ordering::SeqCst);
        })));

        store.run_action(id);
        assert_eq!(PRESSES.load(Ordering::SeqCst), 1);
        // The toast stays; only handle_message dismisses after an action.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn run_action_without_action_is_noop() {
        let store = ToastStore::new();
        let id = store.add(Toast::new());
        store.run_action(id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn handle_message_dismiss() {
        let store = ToastStore::new();
        let id = store.add(Toast::new());

        store.handle_message(&Message::Dismiss(id));
        assert!(store.is_empty());
    }

    #[test]
    fn handle_message_action_runs_and_dismisses() {
        static PRESSES: AtomicUsize = AtomicUsize::new(0);
        let store = ToastStore::new();
        let id = store.add(
            Toast::new()
                .with_variant(Variant::Destructive)
                .with_action(ToastAction::new("Retry", || {
                    PRESSES.fetch_add(1, Ordering::SeqCst);
                })),
        );

        store.handle_message(&Message::Action(id));
        assert_eq!(PRESSES.load(Ordering::SeqCst), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_the_same_collection() {
        let store = ToastStore::new();
        let other = store.clone();

        let id = store.add(Toast::new().with_title("shared"));
        assert_eq!(other.len(), 1);

        other.remove(id);
        assert!(store.is_empty());
    }

    #[test]
    fn action_may_mutate_the_store() {
        let store = ToastStore::new();
        let handle = store.clone();
        let id = store.add(Toast::new().with_action(ToastAction::new("Dismiss all", move || {
            handle.clear();
        })));

        store.run_action(id);
        assert!(store.is_empty());
    }
}
