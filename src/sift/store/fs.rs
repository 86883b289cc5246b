use super::RecordSource;
use crate::error::{Result, SiftError};
use crate::model::Record;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write records as a pretty-printed JSON array, creating parent directories.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(SiftError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(records).map_err(SiftError::Serialization)?;
        fs::write(&self.path, content).map_err(SiftError::Io)?;
        debug!(path = %self.path.display(), count = records.len(), "wrote catalog");
        Ok(())
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path).map_err(SiftError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(SiftError::Serialization)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded catalog");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
