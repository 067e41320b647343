//! An ordered set of `i32` keys.

use std::fmt;

use crate::base;

/// A concurrent ordered set of `i32` keys.
///
/// All operations take `&self` and may be called from any number of threads.
pub struct SkipSet {
    inner: base::SkipList<()>,
}

impl SkipSet {
    /// Returns a new, empty set.
    pub fn new() -> SkipSet {
        SkipSet {
            inner: base::SkipList::new(),
        }
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the set contains `key`.
    pub fn contains(&self, key: i32) -> bool {
        self.inner.contains(key)
    }

    /// Adds `key` to the set.
    ///
    /// Returns `true` if the key was newly inserted and `false` if it was
    /// already present.
    pub fn insert(&self, key: i32) -> bool {
        self.inner.insert_if_absent(key, ())
    }

    /// Removes `key` from the set.
    ///
    /// Returns `true` if this call removed the key.
    pub fn remove(&self, key: i32) -> bool {
        self.inner.remove(key)
    }
}

impl Default for SkipSet {
    fn default() -> SkipSet {
        SkipSet::new()
    }
}

impl fmt::Debug for SkipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipSet").field("len", &self.len()).finish()
    }
}
