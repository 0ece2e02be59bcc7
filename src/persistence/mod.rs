//! Persistence: the key/value seam and the stored snapshot format.
//!
//! The engine performs no I/O of its own. It serializes a `Snapshot` and
//! hands the string to a `PersistenceAdapter` under one fixed key.

pub mod snapshot;
pub mod store;

pub use snapshot::{Snapshot, SnapshotWord};
pub use store::{MemoryStore, PersistenceAdapter};
