//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI.
//!
//! ## Role and Responsibilities
//!
//! - **Owns the state**: the [`Board`] and the store it is persisted to
//! - **Normalizes inputs**: user-typed id labels become [`Identifier`]s
//! - **Dispatches** to the matching command
//! - **Fires the change contract**: after a command reports a mutation, the
//!   store is told through [`ChangeListener::on_change`]
//!
//! ## Persistence Failures
//!
//! A failed save never fails the operation. The mutation already happened
//! in memory and stays authoritative for the session; the result carries a
//! warning message instead.

use crate::board::{Board, ChangeListener};
use crate::commands;
use crate::error::Result;
use crate::ident::Identifier;
use crate::store::{load_board, DataStore};
use log::{debug, warn};
use std::path::PathBuf;

pub struct ThreadzApi<S: DataStore> {
    store: S,
    board: Board,
    data_dir: PathBuf,
    load_warnings: Vec<String>,
}

impl<S: DataStore> ThreadzApi<S> {
    /// Loads the board from `store`. Unreadable slots start empty.
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        let (board, load_warnings) = load_board(&store);
        debug!(
            "loaded {} comments and {} stars",
            board.tree.len(),
            board.stars.len()
        );
        Self {
            store,
            board,
            data_dir,
            load_warnings,
        }
    }

    pub fn post_comment(&mut self, text: &str) -> Result<commands::CmdResult> {
        let result = commands::post::run(&mut self.board, text)?;
        Ok(self.commit(result))
    }

    pub fn post_reply(&mut self, parent: &str, text: &str) -> Result<commands::CmdResult> {
        let parent: Identifier = parent.parse()?;
        let result = commands::reply::run(&mut self.board, &parent, text)?;
        Ok(self.commit(result))
    }

    pub fn delete_comments<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = commands::parse_ids(ids)?;
        let result = commands::delete::run(&mut self.board, &ids)?;
        Ok(self.commit(result))
    }

    pub fn toggle_stars<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = commands::parse_ids(ids)?;
        let result = commands::star::run(&mut self.board, &ids)?;
        Ok(self.commit(result))
    }

    pub fn is_starred(&self, id: &str) -> Result<bool> {
        let id: Identifier = id.parse()?;
        Ok(self.board.stars.is_starred(&id))
    }

    pub fn list_comments(&self, starred_only: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.board, starred_only)
    }

    pub fn view_comment(&self, id: &str) -> Result<commands::CmdResult> {
        let id: Identifier = id.parse()?;
        commands::view::run(&self.board, &id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Problems met while loading, one per degraded slot.
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    fn commit(&mut self, mut result: CmdResult) -> CmdResult {
        if let Some(change) = result.changed {
            if let Err(e) = self.store.on_change(change, &self.board) {
                warn!("failed to persist {:?} change: {}", change, e);
                result.add_message(CmdMessage::warning(format!(
                    "Could not save changes, they are kept for this session only: {}",
                    e
                )));
            }
        }
        result
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayComment, MessageLevel};
