// Storage ports the domain depends on

pub mod ordered_store;

pub use ordered_store::{OrderedStore, Storable, StoreError};
