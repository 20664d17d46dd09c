//! # Comment Tree
//!
//! Comments live in an arena of entries addressed by [`NodeKey`]. Each entry
//! holds explicit parent/children key references, and a lookup table maps
//! the public [`Identifier`] labels to keys. Keys are never handed out
//! twice, so a key held across a delete cannot alias another comment.
//!
//! The nested [`CommentNode`] form is only ever produced by rebuilding it
//! from the arena (`snapshot`, `find_node`), never mutated in place.
//!
//! ## Ordering
//!
//! - Top-level comments: newest first (a new comment is prepended).
//! - Replies within a thread: oldest first (a new reply is appended).
//!
//! ## Counters
//!
//! Every parent (and the top level) remembers how many child ids it has
//! issued. These high-water marks are what [`ident`](crate::ident) allocates
//! from, and they are persisted alongside the tree as [`Counters`].

use crate::error::{Result, ThreadzError};
use crate::ident::{self, Identifier};
use crate::model::{is_blank, CommentNode, MAX_DEPTH};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};

/// Issued-child counts keyed by parent label; the top level uses `""`.
pub type Counters = BTreeMap<String, u32>;

const TOP_LEVEL_KEY: &str = "";

/// Stable arena index of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey(usize);

#[derive(Debug, Clone)]
struct Entry {
    id: Identifier,
    text: String,
    created_at: DateTime<Utc>,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
    issued: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CommentTree {
    arena: Vec<Option<Entry>>,
    roots: Vec<NodeKey>,
    issued: u32,
    lookup: HashMap<Identifier, NodeKey>,
}

impl CommentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live comments at every depth.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.lookup.contains_key(id)
    }

    /// Depth of a live comment, or `None` if it does not exist.
    pub fn depth_of(&self, id: &Identifier) -> Option<usize> {
        self.lookup.get(id).map(|_| id.depth())
    }

    /// Posts a new top-level comment, shown before all existing ones.
    pub fn post_comment(&mut self, text: &str) -> Result<CommentNode> {
        if is_blank(text) {
            return Err(ThreadzError::EmptyInput);
        }

        let mut id = ident::allocate_top_level(self.issued)?;
        while self.lookup.contains_key(&id) {
            id = ident::allocate_top_level(id.ordinal())?;
        }
        self.issued = id.ordinal();

        let node = CommentNode::new(id, text.to_string());
        let key = self.insert_entry(&node, None);
        self.roots.insert(0, key);

        debug!("posted comment {}", node.id);
        Ok(node)
    }

    /// Appends a reply to `parent_id`, wherever it sits in the tree.
    pub fn post_reply(&mut self, parent_id: &Identifier, text: &str) -> Result<CommentNode> {
        if is_blank(text) {
            return Err(ThreadzError::EmptyInput);
        }

        let parent_key = *self
            .lookup
            .get(parent_id)
            .ok_or_else(|| ThreadzError::ParentNotFound(parent_id.to_string()))?;
        let parent_depth = parent_id.depth();
        let issued = self.entry(parent_key).map(|e| e.issued).unwrap_or(0);

        let mut id = ident::allocate_reply(Some(parent_id), issued, parent_depth)?;
        while self.lookup.contains_key(&id) {
            id = ident::allocate_reply(Some(parent_id), id.ordinal(), parent_depth)?;
        }

        let node = CommentNode::new(id, text.to_string());
        let key = self.insert_entry(&node, Some(parent_key));
        if let Some(parent) = self.entry_mut(parent_key) {
            parent.issued = node.id.ordinal();
            parent.children.push(key);
        }

        debug!("posted reply {} under {}", node.id, parent_id);
        Ok(node)
    }

    /// Removes a comment together with all of its replies.
    ///
    /// Returns `false` when no comment has this id. Remaining siblings keep
    /// their ids.
    pub fn delete_comment(&mut self, id: &Identifier) -> bool {
        let Some(key) = self.lookup.get(id).copied() else {
            return false;
        };

        match self.entry(key).and_then(|e| e.parent) {
            Some(parent_key) => {
                if let Some(parent) = self.entry_mut(parent_key) {
                    parent.children.retain(|k| *k != key);
                }
            }
            None => self.roots.retain(|k| *k != key),
        }

        let removed = self.remove_subtree(key);
        debug!("deleted comment {} ({} nodes)", id, removed);
        true
    }

    /// Looks up a comment anywhere in the tree, returning it with its
    /// replies.
    pub fn find_node(&self, id: &Identifier) -> Option<CommentNode> {
        self.lookup.get(id).and_then(|key| self.build(*key))
    }

    /// The whole tree in nested form, top-level comments newest first.
    pub fn snapshot(&self) -> Vec<CommentNode> {
        self.roots.iter().filter_map(|key| self.build(*key)).collect()
    }

    /// Issued-id counters for every parent that has handed out ids.
    pub fn counters(&self) -> Counters {
        let mut counters = Counters::new();
        if self.issued > 0 {
            counters.insert(TOP_LEVEL_KEY.to_string(), self.issued);
        }
        for entry in self.arena.iter().flatten() {
            if entry.issued > 0 {
                counters.insert(entry.id.to_string(), entry.issued);
            }
        }
        counters
    }

    /// Rebuilds a tree from its nested form.
    ///
    /// Nodes deeper than [`MAX_DEPTH`], nodes whose id does not extend their
    /// parent's, and repeated ids are dropped with a warning. Counters are
    /// raised to at least the highest ordinal present under each parent.
    pub fn from_snapshot(nodes: Vec<CommentNode>, counters: &Counters) -> Self {
        let mut tree = CommentTree::new();
        tree.issued = counters.get(TOP_LEVEL_KEY).copied().unwrap_or(0);

        for node in nodes {
            if let Some(key) = tree.restore(node, None) {
                tree.roots.push(key);
            }
        }

        for entry in tree.arena.iter_mut().flatten() {
            let label = entry.id.to_string();
            if let Some(count) = counters.get(&label) {
                entry.issued = entry.issued.max(*count);
            }
        }
        tree
    }

    /// Marks `id` as issued so it is never handed out again, even if no
    /// live comment carries it (for example an orphaned star).
    pub fn reserve(&mut self, id: &Identifier) {
        match id.parent() {
            None => self.issued = self.issued.max(id.ordinal()),
            Some(parent_id) => {
                if let Some(key) = self.lookup.get(&parent_id).copied() {
                    if let Some(parent) = self.entry_mut(key) {
                        parent.issued = parent.issued.max(id.ordinal());
                    }
                }
            }
        }
    }

    fn restore(&mut self, node: CommentNode, parent: Option<NodeKey>) -> Option<NodeKey> {
        let parent_id = parent.and_then(|k| self.entry(k)).map(|e| e.id.clone());
        let depth_ok = node.id.depth() <= MAX_DEPTH;
        let shape_ok = node.id.parent() == parent_id;

        if !depth_ok || !shape_ok {
            warn!(
                "dropping comment {} on load: does not fit under {}",
                node.id,
                parent_id.map(|p| p.to_string()).unwrap_or_else(|| "top level".into())
            );
            return None;
        }
        if self.lookup.contains_key(&node.id) {
            warn!("dropping comment {} on load: duplicate id", node.id);
            return None;
        }

        let ordinal = node.id.ordinal();
        match parent {
            Some(parent_key) => {
                if let Some(p) = self.entry_mut(parent_key) {
                    p.issued = p.issued.max(ordinal);
                }
            }
            None => self.issued = self.issued.max(ordinal),
        }

        let key = self.insert_entry(&node, parent);
        for child in node.children {
            if let Some(child_key) = self.restore(child, Some(key)) {
                if let Some(entry) = self.entry_mut(key) {
                    entry.children.push(child_key);
                }
            }
        }
        Some(key)
    }

    fn insert_entry(&mut self, node: &CommentNode, parent: Option<NodeKey>) -> NodeKey {
        let key = NodeKey(self.arena.len());
        self.arena.push(Some(Entry {
            id: node.id.clone(),
            text: node.text.clone(),
            created_at: node.created_at,
            parent,
            children: Vec::new(),
            issued: 0,
        }));
        self.lookup.insert(node.id.clone(), key);
        key
    }

    fn remove_subtree(&mut self, key: NodeKey) -> usize {
        let Some(entry) = self.arena.get_mut(key.0).and_then(Option::take) else {
            return 0;
        };
        self.lookup.remove(&entry.id);
        1 + entry
            .children
            .into_iter()
            .map(|child| self.remove_subtree(child))
            .sum::<usize>()
    }

    fn build(&self, key: NodeKey) -> Option<CommentNode> {
        let entry = self.entry(key)?;
        Some(CommentNode {
            id: entry.id.clone(),
            text: entry.text.clone(),
            created_at: entry.created_at,
            children: entry
                .children
                .iter()
                .filter_map(|child| self.build(*child))
                .collect(),
        })
    }

    fn entry(&self, key: NodeKey) -> Option<&Entry> {
        self.arena.get(key.0).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, key: NodeKey) -> Option<&mut Entry> {
        self.arena.get_mut(key.0).and_then(Option::as_mut)
    }
}

/// Replies a renderer should descend into at `current_depth` (top level is
/// 1). Below [`MAX_DEPTH`] nothing is shown.
pub fn visible_children(node: &CommentNode, current_depth: usize) -> &[CommentNode] {
    if current_depth < MAX_DEPTH {
        &node.children
    } else {
        &[]
    }
}
