// Repository implementations (data access layer)
// Adapters that implement domain storage interfaces

pub mod btree_store;

pub use btree_store::{BTreeStore, StoreLimits};
