use super::DataStore;
use crate::error::{Result, ThreadzError};
use crate::model::CommentNode;
use crate::stars::StarBlob;
use crate::tree::Counters;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const TREE_FILENAME: &str = "comments.json";
pub const STARS_FILENAME: &str = "starred.json";
pub const COUNTERS_FILENAME: &str = "counters.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ThreadzError::Io)?;
        }
        Ok(())
    }

    fn read_slot<T: DeserializeOwned + Default>(&self, filename: &str) -> Result<T> {
        let path = self.slot_path(filename);
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path).map_err(ThreadzError::Io)?;
        if content.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&content).map_err(ThreadzError::Serialization)
    }

    fn write_slot<T: Serialize + ?Sized>(&self, filename: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(ThreadzError::Serialization)?;

        // Write-then-rename so a crash never leaves a half-written slot
        let tmp_path = self.root.join(format!(".{}-{}.tmp", filename, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(ThreadzError::Io)?;
        fs::rename(&tmp_path, self.slot_path(filename)).map_err(ThreadzError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_tree(&self) -> Result<Vec<CommentNode>> {
        self.read_slot(TREE_FILENAME)
    }

    fn save_tree(&mut self, nodes: &[CommentNode]) -> Result<()> {
        self.write_slot(TREE_FILENAME, nodes)
    }

    fn load_stars(&self) -> Result<StarBlob> {
        self.read_slot(STARS_FILENAME)
    }

    fn save_stars(&mut self, stars: &StarBlob) -> Result<()> {
        self.write_slot(STARS_FILENAME, stars)
    }

    fn load_counters(&self) -> Result<Counters> {
        self.read_slot(COUNTERS_FILENAME)
    }

    fn save_counters(&mut self, counters: &Counters) -> Result<()> {
        self.write_slot(COUNTERS_FILENAME, counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_slots_load_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("not-yet"));

        assert!(store.load_tree().unwrap().is_empty());
        assert!(store.load_stars().unwrap().is_empty());
        assert!(store.load_counters().unwrap().is_empty());
    }

    #[test]
    fn save_creates_dir_and_leaves_no_tmp_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        let mut counters = Counters::new();
        counters.insert(String::new(), 3);
        store.save_counters(&counters).unwrap();

        assert!(root.join(COUNTERS_FILENAME).exists());
        for entry in fs::read_dir(&root).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
        assert_eq!(store.load_counters().unwrap(), counters);
    }

    #[test]
    fn corrupt_slot_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(TREE_FILENAME), "{oops").unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        assert!(matches!(
            store.load_tree(),
            Err(ThreadzError::Serialization(_))
        ));
    }
}
