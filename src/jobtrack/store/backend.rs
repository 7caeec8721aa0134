use crate::error::Result;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (collection semantics).
pub trait StorageBackend {
    /// Read the persisted blob.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<String>>;

    /// Write the blob, replacing whatever was persisted before.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, payload: &str) -> Result<()>;
}
