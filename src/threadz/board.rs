//! # Board
//!
//! The complete in-memory state of a comment section: the tree and the star
//! set. Commands take `&mut Board`; nothing holds comments in ambient state.
//!
//! After a mutation the owner reports which part changed through
//! [`ChangeListener::on_change`]. Stores implement the listener to persist
//! the matching slot, but anything (a test recorder, a UI refresh) can.

use crate::error::Result;
use crate::stars::StarIndex;
use crate::tree::CommentTree;

/// Which persisted slot a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Tree,
    Stars,
}

pub trait ChangeListener {
    /// Called synchronously after every mutation, with the new state.
    fn on_change(&mut self, change: Change, board: &Board) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    pub tree: CommentTree,
    pub stars: StarIndex,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a board from loaded parts. Starred ids are reserved in the
    /// tree so they can never be issued to a new comment.
    pub fn from_parts(mut tree: CommentTree, stars: StarIndex) -> Self {
        for id in stars.iter() {
            tree.reserve(id);
        }
        Self { tree, stars }
    }
}
