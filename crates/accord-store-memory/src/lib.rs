//! In-memory backend for the Accord consent store.
//!
//! Both tables share a single [`tokio::sync::RwLock`], so a grant and the
//! datasets derived from it change inside one critical section and readers
//! never observe one without the other.

mod store;

pub use store::MemoryStore;
