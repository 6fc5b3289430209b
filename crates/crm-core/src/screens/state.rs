//! Screen state storage

use std::sync::{Arc, Mutex, PoisonError};

/// Interior-mutable home of a screen's state.
///
/// Access is closure-scoped so no borrow survives an `.await`.
pub trait StateCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut S));
}

impl<S> StateCell<S> for Arc<Mutex<S>> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut S)) {
        let mut guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
