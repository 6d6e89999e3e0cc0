//! Reactive match state

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Whether the viewport currently satisfies a query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchState {
    Matching,
    NotMatching,
}

impl From<bool> for MatchState {
    fn from(matches: bool) -> Self {
        if matches {
            MatchState::Matching
        } else {
            MatchState::NotMatching
        }
    }
}

/// Called with the new value after every transition
pub type ChangeCallback = Arc<dyn Fn(bool) + Send + Sync>;

struct SignalInner {
    value: Mutex<bool>,
    transitions: AtomicUsize,
    subscribers: Mutex<Vec<ChangeCallback>>,
}

/// Shared boolean that only notifies when its value actually changes
///
/// Clones share state, so a clone handed to the UI layer sees every update
/// made by the observer.
#[derive(Clone)]
pub struct MatchSignal {
    inner: Arc<SignalInner>,
}

impl MatchSignal {
    pub fn new(initial: bool) -> Self {
        Self {
            inner: Arc::new(SignalInner {
                value: Mutex::new(initial),
                transitions: AtomicUsize::new(0),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> bool {
        *self.inner.value.lock().unwrap()
    }

    pub fn state(&self) -> MatchState {
        self.get().into()
    }

    /// Number of value changes since creation
    pub fn transitions(&self) -> usize {
        self.inner.transitions.load(Ordering::SeqCst)
    }

    /// Run `callback` after every change
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.inner
            .subscribers
            .lock()
            .unwrap()
            .push(Arc::new(callback));
    }

    /// Store `value`. Returns `true` and notifies subscribers if it differs
    /// from the current value.
    pub fn set(&self, value: bool) -> bool {
        {
            let mut current = self.inner.value.lock().unwrap();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.inner.transitions.fetch_add(1, Ordering::SeqCst);

        // Subscribers may read the signal; call them without holding locks.
        let subscribers = self.inner.subscribers.lock().unwrap().clone();
        for subscriber in &subscribers {
            subscriber(value);
        }
        true
    }
}

impl std::fmt::Debug for MatchSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchSignal")
            .field("value", &self.get())
            .field("transitions", &self.transitions())
            .finish()
    }
}
