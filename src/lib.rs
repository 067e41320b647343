//! Concurrent ordered sets and maps over integer keys, based on a skip list
//! with lock-free searches and fine-grained optimistic locking.
//!
//! This crate provides the types [`SkipMap`] and [`SkipSet`] (and the
//! lower-level [`SkipList`] they share). They behave like ordered collections
//! keyed by `i32`, except that every operation takes `&self` and supports
//! concurrent access from multiple threads.
//!
//! # Concurrency model
//!
//! Searches, membership tests, and lookups never take a lock and never
//! block, no matter what writers are doing. A writer first searches without
//! locks, then locks only the handful of nodes whose forward pointers it is
//! about to change, re-checks that the world still looks the way the search
//! saw it, and commits. If the check fails (another writer got there first),
//! it unlocks and retries from a fresh search. Locks are always acquired
//! bottom-up by level, so writers cannot deadlock.
//!
//! Removal happens in two steps: the node is first *marked* under its own
//! lock, which is the moment it stops being a member, and then physically
//! unlinked level by level. Readers that still encounter a marked node
//! simply pass over it.
//!
//! ```
//! use lazy_skiplist::SkipMap;
//! use crossbeam_utils::thread::scope;
//!
//! let reviews = SkipMap::new();
//!
//! scope(|s| {
//!     s.spawn(|_| {
//!         reviews.insert(1994, "Pulp Fiction");
//!         reviews.insert(1999, "Office Space");
//!     });
//!     s.spawn(|_| {
//!         reviews.insert(1972, "The Godfather");
//!     });
//! })
//! .unwrap();
//!
//! assert_eq!(reviews.len(), 3);
//! assert_eq!(reviews.get(1972), Some("The Godfather"));
//! reviews.remove(1999);
//! assert!(!reviews.contains_key(1999));
//! ```
//!
//! A single operation is atomic, but separate calls can interleave with
//! other threads. Never assume the collection is unchanged between two
//! lines of code: `insert` followed by `contains_key` may observe a removal
//! that happened in between. Such races are logic-level only; they can never
//! cause memory errors.
//!
//! # Garbage collection
//!
//! A removed node may still be visible to threads that started their search
//! before it was unlinked. The crate uses the epoch-based reclamation from
//! [`crossbeam-epoch`]: unlinked nodes and overwritten values are retired and
//! freed only after every thread that could have seen them has moved on.
//! This happens automatically; there is nothing to configure.
//!
//! [`crossbeam-epoch`]: https://docs.rs/crossbeam-epoch

pub mod base;
pub mod map;
pub mod set;

pub use crate::base::SkipList;
pub use crate::map::SkipMap;
pub use crate::set::SkipSet;
