//! In-memory keyed storage shared by the module repositories.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

#[derive(Debug)]
struct Slots<V: Entity> {
    index: HashMap<V::Key, usize>,
    records: Vec<V>,
}

/// Insertion-ordered, key-indexed collection of entities.
///
/// Process-scoped and never persisted. Reads hand out clones, so callers can
/// never reach the stored values. Replacing a record keeps its original
/// position in [`list`](Self::list).
#[derive(Debug)]
pub struct InMemoryKeyedStore<V: Entity> {
    label: &'static str,
    inner: RwLock<Slots<V>>,
}

impl<V> InMemoryKeyedStore<V>
where
    V: Entity + Clone,
{
    /// `label` names the record kind in error messages (e.g. `"product"`).
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            inner: RwLock::new(Slots {
                index: HashMap::new(),
                records: Vec::new(),
            }),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Slots<V>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invalid_state(format!("{} store lock poisoned", self.label)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Slots<V>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::invalid_state(format!("{} store lock poisoned", self.label)))
    }

    /// Insert a new record; fails with `DuplicateKey` if the key is taken.
    pub fn insert(&self, record: V) -> DomainResult<()> {
        let mut slots = self.write()?;
        if slots.index.contains_key(record.key()) {
            return Err(DomainError::duplicate_key(format!(
                "{} {} already exists",
                self.label,
                record.key()
            )));
        }
        let position = slots.records.len();
        slots.index.insert(record.key().clone(), position);
        slots.records.push(record);
        Ok(())
    }

    /// Insert, or replace in place when the key already exists.
    pub fn upsert(&self, record: V) -> DomainResult<()> {
        let mut slots = self.write()?;
        match slots.index.get(record.key()).copied() {
            Some(position) => slots.records[position] = record,
            None => {
                let position = slots.records.len();
                slots.index.insert(record.key().clone(), position);
                slots.records.push(record);
            }
        }
        Ok(())
    }

    /// Replace an existing record; fails with `NotFound` if the key is absent.
    pub fn replace(&self, record: V) -> DomainResult<()> {
        let mut slots = self.write()?;
        let Some(position) = slots.index.get(record.key()).copied() else {
            return Err(DomainError::not_found(format!(
                "{} {} does not exist",
                self.label,
                record.key()
            )));
        };
        slots.records[position] = record;
        Ok(())
    }

    pub fn get(&self, key: &V::Key) -> DomainResult<Option<V>> {
        let slots = self.read()?;
        Ok(slots
            .index
            .get(key)
            .and_then(|&position| slots.records.get(position))
            .cloned())
    }

    /// First record (in insertion order) matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&V) -> bool) -> DomainResult<Option<V>> {
        let slots = self.read()?;
        Ok(slots.records.iter().find(|r| predicate(r)).cloned())
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> DomainResult<Vec<V>> {
        Ok(self.read()?.records.clone())
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.records.len())
    }
}
