use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::Application;
use uuid::Uuid;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// All persisted records.
    ///
    /// A missing blob and an unparseable blob both yield an empty
    /// collection; the next save overwrites whatever was there.
    pub fn load_all(&self) -> Result<Vec<Application>> {
        match self.backend.read()? {
            Some(payload) => Ok(serde_json::from_str(&payload).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the entire persisted collection.
    pub fn save_all(&mut self, records: &[Application]) -> Result<()> {
        let payload = serde_json::to_string_pretty(records)?;
        self.backend.write(&payload)
    }

    /// Insert the record, or replace the one with the same id.
    pub fn upsert(&mut self, record: &Application) -> Result<()> {
        let mut records = self.load_all()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => *slot = record.clone(),
            None => records.push(record.clone()),
        }
        self.save_all(&records)
    }

    /// Remove the record with the given id, returning it.
    /// Removing an unknown id is a no-op, not an error.
    pub fn remove(&mut self, id: Uuid) -> Result<Option<Application>> {
        let mut records = self.load_all()?;
        let pos = match records.iter().position(|r| r.id == id) {
            Some(pos) => pos,
            None => return Ok(None),
        };
        let removed = records.remove(pos);
        self.save_all(&records)?;
        Ok(Some(removed))
    }
}
