use super::backend::StorageBackend;
use crate::error::{Result, TrackError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const DATA_FILENAME: &str = "applications.json";

pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(TrackError::StorageUnavailable)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<String>> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(TrackError::StorageUnavailable)?;
        Ok(Some(payload))
    }

    fn write(&self, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.data_file();

        // Atomic write
        let tmp = self
            .data_dir
            .join(format!(".applications-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, payload).map_err(TrackError::StorageUnavailable)?;
        fs::rename(&tmp, target).map_err(TrackError::StorageUnavailable)?;

        Ok(())
    }
}
