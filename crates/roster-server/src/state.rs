use roster_core::RosterStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<RosterStore>>,
}

impl AppState {
    pub fn new(store: RosterStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the roster. Every read and mutation
    /// goes through this one lock, so a check-then-act step is never
    /// interleaved with another request's.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut RosterStore) -> T) -> T {
        let mut guard = self.lock();
        f(&mut guard)
    }

    fn lock(&self) -> MutexGuard<'_, RosterStore> {
        // Store operations validate before mutating, so a panic mid-call
        // cannot leave the roster inconsistent.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
