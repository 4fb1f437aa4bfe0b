pub mod assert;

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::error::ApiError;

/// Anything kept in a [`Store`]. The id is assigned by the store on insert.
pub trait Record: Clone {
    fn id(&self) -> u64;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A process-lifetime collection of records.
///
/// Every method runs under one lock, so a lookup followed by an insert in
/// [`Store::append_unless`] is atomic with respect to other requests.
pub trait Store<T>: Send + Sync {
    /// All records in insertion order.
    fn list(&self) -> StoreResult<Vec<T>>;

    fn get_by_id(&self, id: u64) -> StoreResult<Option<T>>;

    /// First record matching `pred`, in insertion order.
    fn find(&self, pred: &dyn Fn(&T) -> bool) -> StoreResult<Option<T>>;

    /// Builds a record from the next id and appends it.
    fn append(&self, build: Box<dyn FnOnce(u64) -> T + '_>) -> StoreResult<T>;

    /// Like [`Store::append`], but returns `None` without inserting (or
    /// consuming an id) when any existing record satisfies `conflict`.
    fn append_unless(
        &self,
        conflict: &dyn Fn(&T) -> bool,
        build: Box<dyn FnOnce(u64) -> T + '_>,
    ) -> StoreResult<Option<T>>;
}

struct Inner<T> {
    records: Vec<T>,
    next_id: u64,
}

pub struct MemoryStore<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Ids handed out afterwards continue after the largest seeded id.
    pub fn seeded(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner { records, next_id }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner<T>>> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Inner<T> {
    fn push(&mut self, build: Box<dyn FnOnce(u64) -> T + '_>) -> T {
        let record = build(self.next_id);
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }
}

impl<T: Record + Send> Store<T> for MemoryStore<T> {
    fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.lock()?.records.clone())
    }

    fn get_by_id(&self, id: u64) -> StoreResult<Option<T>> {
        self.find(&|record: &T| record.id() == id)
    }

    fn find(&self, pred: &dyn Fn(&T) -> bool) -> StoreResult<Option<T>> {
        let inner = self.lock()?;
        Ok(inner.records.iter().find(|record| pred(record)).cloned())
    }

    fn append(&self, build: Box<dyn FnOnce(u64) -> T + '_>) -> StoreResult<T> {
        let mut inner = self.lock()?;
        Ok(inner.push(build))
    }

    fn append_unless(
        &self,
        conflict: &dyn Fn(&T) -> bool,
        build: Box<dyn FnOnce(u64) -> T + '_>,
    ) -> StoreResult<Option<T>> {
        let mut inner = self.lock()?;
        if inner.records.iter().any(|record| conflict(record)) {
            return Ok(None);
        }
        Ok(Some(inner.push(build)))
    }
}
