//! Synchronization utilities for robust RwLock handling
//!
//! Lock poisoning only tells us that some thread panicked while holding the
//! guard. Structures guarded here keep their invariants across any panic that
//! can occur inside a critical section, so a poisoned lock is recovered rather
//! than propagated, and the event is logged once per acquisition.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Acquire a read guard, recovering from poisoning
///
/// # Arguments
/// * `lock` - The lock to acquire
/// * `context` - Short name of the owning structure, used in the warning
pub fn read_recovering<'a, T>(lock: &'a RwLock<T>, context: &str) -> RwLockReadGuard<'a, T> {
    lock.read().unwrap_or_else(|poison_err| {
        log::warn!(
            "{}: recovering RwLock read after a panic in another thread",
            context
        );
        PoisonError::into_inner(poison_err)
    })
}

/// Acquire a write guard, recovering from poisoning
///
/// See [`read_recovering`].
pub fn write_recovering<'a, T>(lock: &'a RwLock<T>, context: &str) -> RwLockWriteGuard<'a, T> {
    lock.write().unwrap_or_else(|poison_err| {
        log::warn!(
            "{}: recovering RwLock write after a panic in another thread",
            context
        );
        PoisonError::into_inner(poison_err)
    })
}

/// Consume a lock and return its value, recovering from poisoning
pub fn into_inner_recovering<T>(lock: RwLock<T>, context: &str) -> T {
    lock.into_inner().unwrap_or_else(|poison_err| {
        log::warn!(
            "{}: recovering poisoned RwLock contents on teardown",
            context
        );
        PoisonError::into_inner(poison_err)
    })
}
