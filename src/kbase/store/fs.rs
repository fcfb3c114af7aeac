use super::{ContentStore, DataStore};
use crate::error::{KbError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: the whole knowledge base as one JSON document.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a starter file with one empty section to add content into.
    /// Refuses to clobber an existing knowledge base.
    pub fn init(&self) -> Result<()> {
        if self.path.exists() {
            return Err(KbError::Store(format!(
                "Refusing to overwrite existing knowledge base at {}",
                self.path.display()
            )));
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut general = crate::model::Section::new("general", "General");
        general.description = "Starter section".to_string();
        let starter = ContentStore::new(vec![general]);
        let content = serde_json::to_string_pretty(&starter)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<ContentStore> {
        if !self.path.exists() {
            return Err(KbError::DataUnavailable(format!(
                "no knowledge base at {} (run `kb init`?)",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path)?;
        let store: ContentStore = serde_json::from_str(&content)
            .map_err(|e| KbError::DataUnavailable(format!("unreadable content file: {}", e)))?;
        Ok(store)
    }

    fn save(&mut self, store: &ContentStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Section};

    #[test]
    fn load_missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("kb.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, KbError::DataUnavailable(_)));
    }

    #[test]
    fn load_corrupt_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        fs::write(&path, "{ not json").unwrap();
        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, KbError::DataUnavailable(_)));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileStore::new(dir.path().join("kb.json"));

        let mut section = Section::new("support", "Support");
        section.articles.push(Article::new(
            "sup001".into(),
            "How to Handle a High Priority Ticket".into(),
            "Triage steps".into(),
        ));
        let store = ContentStore::new(vec![section]);

        backend.save(&store).unwrap();
        let loaded = backend.load().unwrap();
        assert_eq!(loaded.sections.len(), 1);
        assert_eq!(loaded.sections[0].articles[0].id, "sup001");
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        let backend = FileStore::new(&path);
        backend.init().unwrap();
        assert!(backend.init().is_err());
    }
}
