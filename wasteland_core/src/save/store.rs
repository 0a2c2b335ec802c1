//! Key-value string stores backing the save system

use super::SaveError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// String key-value persistence, JSON values
pub trait SaveStore {
    fn read(&self, key: &str) -> Result<Option<String>, SaveError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), SaveError>;
    fn remove(&mut self, key: &str) -> Result<(), SaveError>;
    fn keys(&self) -> Result<Vec<String>, SaveError>;
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemorySaveStore {
    entries: HashMap<String, String>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemorySaveStore {
    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, SaveError> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// One file per key under a directory
#[derive(Debug)]
pub struct FileSaveStore {
    directory: PathBuf,
}

impl FileSaveStore {
    /// Open a store rooted at `directory`, creating it if needed
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self, SaveError> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        Ok(FileSaveStore { directory })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys share the asset-key charset, so a key is a safe file name
        self.directory.join(format!("{}.json", key))
    }
}

impl SaveStore for FileSaveStore {
    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, SaveError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
