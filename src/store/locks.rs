//! Per-collection lock registry
//!
//! One mutex per collection name, created on first use and kept for the
//! lifetime of the store. The registry's own mutex is held only for the
//! lookup-or-insert, never across I/O.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Lock guarding every mutation of one collection
pub type CollectionLock = Arc<Mutex<()>>;

/// Maps collection names to their locks
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the lock for `collection`, registering a new one if absent
    ///
    /// Repeated calls with the same name return the same instance.
    pub fn get_or_create(&self, collection: &str) -> CollectionLock {
        let mut locks = self.locks.lock();

        if let Some(lock) = locks.get(collection) {
            return Arc::clone(lock);
        }

        let lock = CollectionLock::default();
        locks.insert(collection.to_owned(), Arc::clone(&lock));
        lock
    }

    /// Number of collections that have a registered lock
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;

    #[test]
    fn test_same_name_returns_same_lock() {
        let registry = LockRegistry::new();

        let a = registry.get_or_create("users");
        let b = registry.get_or_create("users");

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_different_names_get_different_locks() {
        let registry = LockRegistry::new();

        let users = registry.get_or_create("users");
        let orders = registry.get_or_create("orders");

        assert!(!Arc::ptr_eq(&users, &orders));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_locks_are_independent() {
        let registry = LockRegistry::new();

        let users = registry.get_or_create("users");
        let _held = users.lock();

        // A different collection is still free while "users" is held
        let orders = registry.get_or_create("orders");
        assert!(orders.try_lock().is_some());

        // The same collection is not
        assert!(registry.get_or_create("users").try_lock().is_none());
    }

    #[test]
    fn test_concurrent_creation_yields_one_lock() {
        const THREADS: usize = 16;

        let registry = LockRegistry::new();
        let barrier = Barrier::new(THREADS);

        let locks: Vec<CollectionLock> = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|_| {
                        barrier.wait();
                        registry.get_or_create("fresh")
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
        .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(locks.iter().all(|lock| Arc::ptr_eq(lock, &locks[0])));
    }
}
