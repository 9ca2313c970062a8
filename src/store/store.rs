//! The in-memory record store
//!
//! An ordered collection of records behind a `RwLock`. New records
//! append; deletes preserve the relative order of the rest. All access
//! is serialized by the lock, so every operation runs to completion
//! before the next mutation is observable.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::id::IdGenerator;
use super::profile::Profile;

/// Ordered, process-owned record collection for one profile.
pub struct RecordStore<P: Profile> {
    records: RwLock<Vec<P::Record>>,
    ids: Box<dyn IdGenerator>,
}

impl<P: Profile> RecordStore<P> {
    /// Creates an empty store with the given id generator.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self::with_records(ids, Vec::new())
    }

    /// Creates a store pre-populated with records (seed data).
    pub fn with_records(ids: Box<dyn IdGenerator>, records: Vec<P::Record>) -> Self {
        Self {
            records: RwLock::new(records),
            ids,
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<P::Record>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<P::Record>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()))
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> StoreResult<Vec<P::Record>> {
        Ok(self.read()?.clone())
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: &str) -> StoreResult<P::Record> {
        self.read()?
            .iter()
            .find(|r| P::id(r) == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Validates the body, assigns a fresh id and appends the record.
    ///
    /// Validation happens before the store is touched; a rejected body
    /// leaves the collection unchanged.
    pub fn create(&self, body: &Value) -> StoreResult<P::Record> {
        let record = P::create(self.ids.generate(), body)?;
        self.write()?.push(record.clone());
        Ok(record)
    }

    /// Applies a partial update to the record with the given id.
    pub fn update(&self, id: &str, body: &Value) -> StoreResult<P::Record> {
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|r| P::id(r) == id)
            .ok_or(StoreError::NotFound)?;

        // Patch a copy so a failed patch leaves the record untouched.
        let mut updated = record.clone();
        P::apply_patch(&mut updated, body)?;
        *record = updated;
        Ok(record.clone())
    }

    /// Removes the record with the given id.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.write()?;
        let idx = records
            .iter()
            .position(|r| P::id(r) == id)
            .ok_or(StoreError::NotFound)?;
        records.remove(idx);
        Ok(())
    }

    /// Returns records whose searchable fields contain `query`,
    /// case-insensitively. An empty result is not an error.
    pub fn search(&self, query: &str) -> StoreResult<Vec<P::Record>> {
        let needle = query.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|r| P::matches(r, &needle))
            .cloned()
            .collect())
    }

    /// Derives the profile's statistics from the current records.
    pub fn stats(&self) -> StoreResult<P::Stats> {
        Ok(P::stats(&self.read()?))
    }

    /// Number of records currently held.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
