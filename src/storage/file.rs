use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::validate_storage_key;
use crate::errors::{PlannerError, Result};
use crate::storage::KeyValueStore;

/// key-value store keeping one `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// the directory is created on first write
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_storage_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(PlannerError::Storage {
                message: format!("{} is not valid utf-8", path.display()),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // write aside then rename so readers never see a half-written document
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("quickEMIPlans").unwrap(), None);
    }

    #[test]
    fn test_write_replaces_document() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("quickEMIPlans", "[1]").unwrap();
        store.set("quickEMIPlans", "[1,2]").unwrap();

        assert_eq!(store.get("quickEMIPlans").unwrap().as_deref(), Some("[1,2]"));
        assert!(store.dir().join("quickEMIPlans.json").exists());
        assert!(!store.dir().join(".quickEMIPlans.json.tmp").exists());
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("plans", "[]").unwrap();
        assert!(store.delete("plans").unwrap());
        assert!(!store.delete("plans").unwrap());
        assert_eq!(store.get("plans").unwrap(), None);
    }

    #[test]
    fn test_non_utf8_document_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(dir.path().join("quickEMIPlans.json"), [0xff, 0xfe, 0x00, 0x5b]).unwrap();

        let err = store.get("quickEMIPlans").unwrap_err();
        assert!(matches!(err, PlannerError::Storage { .. }));
    }

    #[test]
    fn test_rejects_path_keys() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let err = store.set("../escape", "[]").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfiguration { .. }));
    }
}
