use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::domain::repositories::{OrderedStore, Storable, StoreError};

/// Size limits applied by [`BTreeStore`]
///
/// `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreLimits {
    /// Largest encoded record accepted
    pub max_record_bytes: Option<usize>,
    /// Largest total of encoded records held at once
    pub max_total_bytes: Option<usize>,
}

/// In-memory ordered store backed by a `BTreeMap`
///
/// Records are held in encoded form, and the store keeps a running total
/// of their sizes so that limits can be checked before a write lands.
/// Data is lost when the process terminates.
#[derive(Debug)]
pub struct BTreeStore<V> {
    entries: BTreeMap<String, Vec<u8>>,
    total_bytes: usize,
    limits: StoreLimits,
    _record: PhantomData<fn() -> V>,
}

impl<V> Default for BTreeStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BTreeStore<V> {
    /// Creates an empty, unbounded store
    pub fn new() -> Self {
        Self::with_limits(StoreLimits::default())
    }

    /// Creates an empty store enforcing `limits`
    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            entries: BTreeMap::new(),
            total_bytes: 0,
            limits,
            _record: PhantomData,
        }
    }

    pub fn limits(&self) -> StoreLimits {
        self.limits
    }
}

impl<V: Storable> OrderedStore<V> for BTreeStore<V> {
    fn get(&self, key: &str) -> Result<Option<V>, StoreError> {
        self.entries
            .get(key)
            .map(|bytes| V::from_bytes(bytes))
            .transpose()
    }

    fn insert(&mut self, key: String, value: &V) -> Result<Option<V>, StoreError> {
        let bytes = value.to_bytes()?;

        if let Some(limit) = self.limits.max_record_bytes {
            if bytes.len() > limit {
                return Err(StoreError::ValueTooLarge {
                    key,
                    size: bytes.len(),
                    limit,
                });
            }
        }

        let replaced = self.entries.get(&key).map_or(0, Vec::len);
        let required = self.total_bytes - replaced + bytes.len();
        if let Some(capacity) = self.limits.max_total_bytes {
            if required > capacity {
                return Err(StoreError::CapacityExceeded { required, capacity });
            }
        }

        // Decode the previous record before writing so a codec fault changes nothing
        let previous = self.get(&key)?;

        self.total_bytes = required;
        self.entries.insert(key, bytes);
        Ok(previous)
    }

    fn remove(&mut self, key: &str) -> Result<Option<V>, StoreError> {
        let Some(record) = self.get(key)? else {
            return Ok(None);
        };

        if let Some(bytes) = self.entries.remove(key) {
            self.total_bytes -= bytes.len();
        }
        Ok(Some(record))
    }

    fn values(&self) -> Result<Vec<V>, StoreError> {
        self.entries.values().map(|bytes| V::from_bytes(bytes)).collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn total_bytes(&self) -> usize {
        self.total_bytes
    }
}
