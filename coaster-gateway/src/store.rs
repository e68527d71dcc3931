//! In-memory coaster store.
//!
//! A single mutex guards the map and the id generator together. Readers and
//! writers exclude each other; each operation holds the lock only for its
//! own map access. Nothing is persisted across restarts.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use coaster_core::{seed_coasters, Coaster, CoasterId, CoreError, IdGenerator};

#[derive(Debug, Default)]
struct Inner {
    coasters: HashMap<CoasterId, Coaster>,
    ids: IdGenerator,
}

/// Thread-safe map from id to coaster record.
///
/// Every stored value's `id` equals its key.
#[derive(Debug, Default)]
pub struct CoasterStore {
    inner: Mutex<Inner>,
}

impl CoasterStore {
    /// Create a store with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store holding the startup seed records.
    #[must_use]
    pub fn seeded() -> Self {
        let coasters = seed_coasters()
            .into_iter()
            .map(|coaster| (coaster.id.clone(), coaster))
            .collect();
        Self {
            inner: Mutex::new(Inner { coasters, ids: IdGenerator::new() }),
        }
    }

    /// # Panics
    /// Panics if the mutex is poisoned (a previous thread panicked while
    /// holding it).
    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("coaster store lock poisoned")
    }

    /// Return a snapshot of every record, in no particular order.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn list_all(&self) -> Vec<Coaster> {
        self.lock().coasters.values().cloned().collect()
    }

    /// Find the record whose `id` field equals `id`.
    ///
    /// Scans the values rather than indexing by key so a match is confirmed
    /// against the record itself.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Coaster> {
        self.lock()
            .coasters
            .values()
            .find(|coaster| coaster.id.as_str() == id)
            .cloned()
    }

    /// Store `coaster` under a freshly generated id and return that id.
    ///
    /// Whatever id the record carried is overwritten.
    ///
    /// # Errors
    /// Returns [`CoreError::ClockOutOfRange`] if no id can be generated.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    pub fn insert(&self, coaster: Coaster) -> Result<CoasterId, CoreError> {
        let mut inner = self.lock();
        let mut id = inner.ids.next_id()?;
        while inner.coasters.contains_key(&id) {
            id = inner.ids.next_id()?;
        }
        inner.coasters.insert(id.clone(), coaster.with_id(id.clone()));
        Ok(id)
    }

    /// Return every stored id, in no particular order.
    ///
    /// # Panics
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn ids(&self) -> Vec<CoasterId> {
        self.lock().coasters.keys().cloned().collect()
    }
}
