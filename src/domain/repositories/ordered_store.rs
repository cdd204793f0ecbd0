use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by an [`OrderedStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record for key '{key}' is {size} bytes, limit is {limit}")]
    ValueTooLarge { key: String, size: usize, limit: usize },

    #[error("Store capacity exceeded: {required} bytes required, capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("Record codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// A record that can be kept as an encoded blob in an [`OrderedStore`]
///
/// The default encoding is JSON, so any serde type opts in with an empty
/// `impl Storable for T {}`.
pub trait Storable: Serialize + DeserializeOwned {
    fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Sorted key-value storage of encoded records
///
/// Keys are compared as strings and enumeration follows ascending key
/// order. Implementations carry no business rules.
pub trait OrderedStore<V: Storable>: Send + Sync {
    /// Point lookup
    fn get(&self, key: &str) -> Result<Option<V>, StoreError>;

    /// Insert or replace, returning the previous record
    ///
    /// A failed insert leaves the store unchanged.
    fn insert(&mut self, key: String, value: &V) -> Result<Option<V>, StoreError>;

    /// Remove the record at `key`, returning it
    fn remove(&mut self, key: &str) -> Result<Option<V>, StoreError>;

    /// Every record in key order
    fn values(&self) -> Result<Vec<V>, StoreError>;

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the encoded sizes of all stored records
    fn total_bytes(&self) -> usize;
}
