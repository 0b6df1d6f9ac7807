//! Shared, lock-guarded handle around a [`Sequence`].
//!
//! The sequence itself assumes a single owner. When several threads need to
//! edit one instance, wrap it in a [`SharedSequence`]: every clone of the
//! handle points at the same sequence, and each guard acquired through it
//! makes the operations performed under that guard atomic with respect to the
//! other handles.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::seq::sequence::Sequence;

/// A cloneable handle to a sequence guarded by a reader-writer lock.
pub struct SharedSequence<T> {
    inner: Arc<RwLock<Sequence<T>>>,
}

impl<T> SharedSequence<T> {
    /// Creates a handle to a new, empty sequence.
    pub fn new() -> Self {
        Self::from(Sequence::new())
    }

    /// Acquires shared read access.
    pub fn read(&self) -> RwLockReadGuard<'_, Sequence<T>> {
        self.inner.read()
    }

    /// Acquires exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, Sequence<T>> {
        self.inner.write()
    }

    /// Runs `f` with shared access and returns its result.
    pub fn with<R>(&self, f: impl FnOnce(&Sequence<T>) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Runs `f` with exclusive access and returns its result.
    ///
    /// Everything `f` does happens under one write lock, so a compound edit
    /// such as "check then insert" cannot interleave with other writers.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Sequence<T>) -> R) -> R {
        f(&mut *self.inner.write())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Number of handles pointing at this sequence.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T: Clone> SharedSequence<T> {
    /// Returns an independent copy of the current contents.
    pub fn snapshot(&self) -> Sequence<T> {
        self.inner.read().clone()
    }
}

impl<T> From<Sequence<T>> for SharedSequence<T> {
    fn from(seq: Sequence<T>) -> Self {
        SharedSequence {
            inner: Arc::new(RwLock::new(seq)),
        }
    }
}

impl<T> Default for SharedSequence<T> {
    fn default() -> Self {
        SharedSequence::new()
    }
}

impl<T> Clone for SharedSequence<T> {
    fn clone(&self) -> Self {
        SharedSequence {
            inner: Arc::clone(&self.inner),
        }
    }
}
