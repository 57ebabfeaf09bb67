//! Owner of the live counter state.
//!
//! A session is built once at startup and handed to whichever front end is
//! running. It pushes intents through [`CounterReducer`], writes the snapshot
//! through to the store whenever count or history changed, and tells
//! subscribers about every new state.

use crate::store::{SnapshotStore, StoreError};
use crate::ui::counter::{ConfirmDialog, CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

type Subscriber = Box<dyn FnMut(&CounterState) + Send>;

pub struct CounterSession {
    state: CounterState,
    store: SnapshotStore,
    subscribers: Vec<Subscriber>,
}

impl CounterSession {
    /// Seed the state from whatever the store holds.
    pub fn open(store: SnapshotStore) -> Self {
        let snapshot = store.load();
        tracing::info!(
            "Loaded count {} with {} history entries",
            snapshot.count,
            snapshot.history.len()
        );
        Self {
            state: CounterState::from_snapshot(snapshot),
            store,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Call `subscriber` with each state produced by a later dispatch.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&CounterState) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Reduce `intent` and write the snapshot through if it changed.
    ///
    /// The in-memory state advances even when the write fails; the error is
    /// returned so callers that exist only to persist can report it.
    pub fn dispatch(&mut self, intent: CounterIntent) -> Result<&CounterState, StoreError> {
        tracing::trace!("dispatch {:?}", intent);
        let confirms_clear =
            self.state.dialog == ConfirmDialog::ClearAll && intent == CounterIntent::Confirm;
        let previous = std::mem::take(&mut self.state);
        let next = CounterReducer::reduce(previous.clone(), intent);

        // Clear-all always overwrites the stored snapshot, even when already empty.
        let saved = if confirms_clear || next.snapshot_differs(&previous) {
            self.store.save(&next.snapshot())
        } else {
            Ok(())
        };
        if let Err(err) = &saved {
            tracing::warn!("Failed to persist counter: {}", err);
        }

        let changed = next != previous;
        self.state = next;
        if changed {
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
        saved.map(|()| &self.state)
    }
}
