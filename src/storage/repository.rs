//! Generic JSON-backed record repository
//!
//! Every record collection lives in its own JSON file and is kept in memory
//! as a map keyed by ID. Reads return clones; aggregate helpers read under the
//! lock without cloning.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AgoraError, AgoraResult};
use crate::models::{Money, RecordId};

use super::file_io::{read_json, write_json_atomic};

/// A persisted row
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: RecordId;

    /// Name used in log lines and "not found" messages
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Business date the record is listed by (newest first)
    fn record_date(&self) -> Option<NaiveDate>;

    fn created_at(&self) -> DateTime<Utc>;
}

/// On-disk layout of a record file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordFile<T> {
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

impl<T> Default for RecordFile<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

/// Repository for one record collection
pub struct JsonRepository<T: Record> {
    path: PathBuf,
    data: RwLock<HashMap<T::Id, T>>,
}

impl<T: Record> JsonRepository<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read(&self) -> AgoraResult<RwLockReadGuard<'_, HashMap<T::Id, T>>> {
        self.data
            .read()
            .map_err(|e| AgoraError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> AgoraResult<RwLockWriteGuard<'_, HashMap<T::Id, T>>> {
        self.data
            .write()
            .map_err(|e| AgoraError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> AgoraResult<()> {
        let file_data: RecordFile<T> = read_json(&self.path)?;

        let mut data = self.write()?;
        data.clear();
        for record in file_data.records {
            data.insert(record.id(), record);
        }

        debug!(kind = T::KIND, count = data.len(), path = %self.path.display(), "loaded records");
        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> AgoraResult<()> {
        let file_data = RecordFile {
            records: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: T::Id) -> AgoraResult<Option<T>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Find a record by any form of its ID (see `RecordId::matches`)
    pub fn find_by_ref(&self, reference: &str) -> AgoraResult<Option<T>> {
        let data = self.read()?;
        Ok(data.values().find(|r| r.id().matches(reference)).cloned())
    }

    /// All records, newest business date first
    pub fn get_all(&self) -> AgoraResult<Vec<T>> {
        let data = self.read()?;
        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| {
            b.record_date()
                .cmp(&a.record_date())
                .then(b.created_at().cmp(&a.created_at()))
        });
        Ok(records)
    }

    /// Records matching a predicate, newest first
    pub fn filter<F>(&self, predicate: F) -> AgoraResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.get_all()?.into_iter().filter(|r| predicate(r)).collect())
    }

    /// Sum the amounts selected by `select`; rows mapped to `None` are skipped
    pub fn sum_by<F>(&self, select: F) -> AgoraResult<Money>
    where
        F: Fn(&T) -> Option<Money>,
    {
        let data = self.read()?;
        Money::checked_sum(data.values().filter_map(select))
            .ok_or_else(|| AgoraError::amount_overflow(T::KIND))
    }

    /// Insert or replace a record
    pub fn upsert(&self, record: T) -> AgoraResult<()> {
        self.write()?.insert(record.id(), record);
        Ok(())
    }

    /// Remove a record, returning it if it existed
    pub fn delete(&self, id: T::Id) -> AgoraResult<Option<T>> {
        Ok(self.write()?.remove(&id))
    }

    pub fn count(&self) -> AgoraResult<usize> {
        Ok(self.read()?.len())
    }
}
