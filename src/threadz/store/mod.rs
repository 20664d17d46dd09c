//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence gateway: it loads and saves
//! three independent slots as serialized blobs.
//!
//! ## Slots
//!
//! ```text
//! <data dir>/
//! ├── comments.json   # nested comment tree (JSON array)
//! ├── starred.json    # {"<id>": true, ...}
//! ├── counters.json   # issued child ids per parent label ("" = top level)
//! └── config.json     # see config.rs
//! ```
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, atomic writes (tmp + rename)
//! - [`memory::InMemoryStore`]: keeps the serialized blobs in memory for tests
//!
//! ## Failure Policy
//!
//! Loading never fails the caller: [`load_board`] falls back to an empty slot
//! and reports a warning for anything missing or unreadable. Saving happens
//! through [`ChangeListener`], which every store implements; the API decides
//! what to do with a failed save.

use crate::board::{Board, Change, ChangeListener};
use crate::error::Result;
use crate::model::CommentNode;
use crate::stars::{StarBlob, StarIndex};
use crate::tree::{CommentTree, Counters};
use log::warn;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the comment tree slot. An absent slot is an empty tree.
    fn load_tree(&self) -> Result<Vec<CommentNode>>;

    fn save_tree(&mut self, nodes: &[CommentNode]) -> Result<()>;

    /// Load the star slot. An absent slot is an empty star set.
    fn load_stars(&self) -> Result<StarBlob>;

    fn save_stars(&mut self, stars: &StarBlob) -> Result<()>;

    /// Load the id counter slot. An absent slot means counters are derived
    /// from the tree and stars.
    fn load_counters(&self) -> Result<Counters>;

    fn save_counters(&mut self, counters: &Counters) -> Result<()>;
}

impl<S: DataStore> ChangeListener for S {
    fn on_change(&mut self, change: Change, board: &Board) -> Result<()> {
        match change {
            Change::Tree => {
                self.save_tree(&board.tree.snapshot())?;
                self.save_counters(&board.tree.counters())
            }
            Change::Stars => {
                self.save_stars(&board.stars.to_blob())?;
                self.save_counters(&board.tree.counters())
            }
        }
    }
}

/// Loads a board, degrading each unreadable slot to empty.
///
/// Returns the board and one warning per slot that could not be read.
pub fn load_board<S: DataStore>(store: &S) -> (Board, Vec<String>) {
    let mut warnings = Vec::new();

    let nodes = store.load_tree().unwrap_or_else(|e| {
        warnings.push(format!("Could not load comments, starting empty: {}", e));
        Vec::new()
    });
    let stars = store.load_stars().unwrap_or_else(|e| {
        warnings.push(format!("Could not load stars, starting empty: {}", e));
        StarBlob::new()
    });
    let counters = store.load_counters().unwrap_or_else(|e| {
        warnings.push(format!("Could not load id counters, deriving them: {}", e));
        Counters::new()
    });

    for warning in &warnings {
        warn!("{}", warning);
    }

    let tree = CommentTree::from_snapshot(nodes, &counters);
    let board = Board::from_parts(tree, StarIndex::from_blob(stars));
    (board, warnings)
}
