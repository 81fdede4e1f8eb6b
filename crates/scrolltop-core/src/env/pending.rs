//! Ownership of callbacks handed to a host that may never run them.
//!
//! A callback leaves `live` when it fires or is cancelled. One that fired is
//! parked in `spent` and dropped on the next firing, never from inside its
//! own call.

use std::collections::HashMap;

pub(crate) struct PendingCallbacks<C> {
    live: HashMap<u64, (i32, C)>,
    spent: Vec<C>,
}

impl<C> PendingCallbacks<C> {
    pub(crate) fn new() -> Self {
        Self {
            live: HashMap::new(),
            spent: Vec::new(),
        }
    }

    /// Track `callback` under our `id` and the host's `handle`
    pub(crate) fn insert(&mut self, id: u64, handle: i32, callback: C) {
        self.live.insert(id, (handle, callback));
    }

    /// Called first thing when the callback for `id` fires
    pub(crate) fn retire(&mut self, id: u64) {
        self.spent.clear();
        if let Some((_, callback)) = self.live.remove(&id) {
            self.spent.push(callback);
        }
    }

    /// Untrack a cancelled callback. The caller drops it after releasing the borrow.
    pub(crate) fn cancel(&mut self, id: u64) -> Option<(i32, C)> {
        self.live.remove(&id)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.live.len() + self.spent.len()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_cancel_releases_callback() {
        let token = Rc::new(());
        let mut pending = PendingCallbacks::new();
        pending.insert(1, 42, Rc::clone(&token));

        let (handle, callback) = pending.cancel(1).unwrap();
        assert_eq!(handle, 42);
        drop(callback);
        assert_eq!(Rc::strong_count(&token), 1);
        assert_eq!(pending.len(), 0);
        assert!(pending.cancel(1).is_none());
    }

    #[test]
    fn test_fired_callback_dropped_on_next_firing() {
        let first = Rc::new(());
        let second = Rc::new(());
        let mut pending = PendingCallbacks::new();
        pending.insert(1, 10, Rc::clone(&first));
        pending.insert(2, 11, Rc::clone(&second));

        pending.retire(1);
        // Still parked: it may be mid-call
        assert_eq!(Rc::strong_count(&first), 2);

        pending.retire(2);
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(Rc::strong_count(&second), 2);
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_retire_unknown_id_clears_spent() {
        let token = Rc::new(());
        let mut pending = PendingCallbacks::new();
        pending.insert(7, 1, Rc::clone(&token));
        pending.retire(7);
        pending.retire(99);
        assert_eq!(Rc::strong_count(&token), 1);
        assert_eq!(pending.len(), 0);
    }
}
