use super::DataStore;
use crate::error::{Result, ThreadzError};
use crate::model::CommentNode;
use crate::stars::StarBlob;
use crate::tree::Counters;

/// In-memory storage for testing and development.
///
/// Slots are kept as serialized JSON so the same encode/decode path as the
/// file store is exercised. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tree: Option<String>,
    stars: Option<String>,
    counters: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail, as a full disk would.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful saves so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn set_raw_tree(&mut self, raw: &str) {
        self.tree = Some(raw.to_string());
    }

    pub fn set_raw_stars(&mut self, raw: &str) {
        self.stars = Some(raw.to_string());
    }

    pub fn raw_tree(&self) -> Option<&str> {
        self.tree.as_deref()
    }

    pub fn raw_stars(&self) -> Option<&str> {
        self.stars.as_deref()
    }

    fn write(&mut self, content: String) -> Result<String> {
        if self.fail_writes {
            return Err(ThreadzError::Store("write refused".to_string()));
        }
        self.writes += 1;
        Ok(content)
    }
}

impl DataStore for InMemoryStore {
    fn load_tree(&self) -> Result<Vec<CommentNode>> {
        match &self.tree {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_tree(&mut self, nodes: &[CommentNode]) -> Result<()> {
        let content = self.write(serde_json::to_string(nodes)?)?;
        self.tree = Some(content);
        Ok(())
    }

    fn load_stars(&self) -> Result<StarBlob> {
        match &self.stars {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(StarBlob::new()),
        }
    }

    fn save_stars(&mut self, stars: &StarBlob) -> Result<()> {
        let content = self.write(serde_json::to_string(stars)?)?;
        self.stars = Some(content);
        Ok(())
    }

    fn load_counters(&self) -> Result<Counters> {
        match &self.counters {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Counters::new()),
        }
    }

    fn save_counters(&mut self, counters: &Counters) -> Result<()> {
        let content = self.write(serde_json::to_string(counters)?)?;
        self.counters = Some(content);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::board::{Board, Change, ChangeListener};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub board: Board,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                board: Board::new(),
            }
        }

        pub fn with_comments(mut self, count: usize) -> Self {
            for i in 0..count {
                self.board
                    .tree
                    .post_comment(&format!("Comment {}", i + 1))
                    .unwrap();
            }
            self.store.on_change(Change::Tree, &self.board).unwrap();
            self
        }

        pub fn with_reply(mut self, parent: &str, text: &str) -> Self {
            let parent = parent.parse().unwrap();
            self.board.tree.post_reply(&parent, text).unwrap();
            self.store.on_change(Change::Tree, &self.board).unwrap();
            self
        }

        pub fn with_star(mut self, id: &str) -> Self {
            self.board.stars.toggle_star(&id.parse().unwrap());
            self.store.on_change(Change::Stars, &self.board).unwrap();
            self
        }
    }
}
