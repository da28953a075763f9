//! JSON file draft storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pointbuy_domain::AttributeDraft;

use crate::infrastructure::ports::{DraftStore, DraftStoreError};

/// Stores the draft as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for FileDraftStore {
    fn save(&self, draft: &AttributeDraft) -> Result<(), DraftStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(draft)?;
        fs::write(&self.path, json)?;

        tracing::info!(
            path = ?self.path,
            system_id = draft.system_id(),
            "Saved attribute draft"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<AttributeDraft>, DraftStoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let draft: AttributeDraft = serde_json::from_str(&json)?;
        tracing::debug!(path = ?self.path, system_id = draft.system_id(), "Loaded attribute draft");
        Ok(Some(draft))
    }

    fn clear(&self) -> Result<(), DraftStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = ?self.path, "Cleared attribute draft");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
