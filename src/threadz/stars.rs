//! Starred comments, tracked apart from the tree.
//!
//! A star is keyed by identifier only. Stars are not checked against the
//! tree and survive the deletion of their comment; since ids are never
//! reissued, an orphaned star can never attach itself to a new comment.

use crate::ident::Identifier;
use log::warn;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Persisted form: identifier label to a truthy marker.
pub type StarBlob = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarIndex {
    starred: BTreeSet<Identifier>,
}

impl StarIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the star on `id` and returns the new state.
    pub fn toggle_star(&mut self, id: &Identifier) -> bool {
        if self.starred.remove(id) {
            false
        } else {
            self.starred.insert(id.clone());
            true
        }
    }

    pub fn is_starred(&self, id: &Identifier) -> bool {
        self.starred.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.starred.iter()
    }

    pub fn len(&self) -> usize {
        self.starred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starred.is_empty()
    }

    pub fn to_blob(&self) -> StarBlob {
        self.starred
            .iter()
            .map(|id| (id.to_string(), Value::Bool(true)))
            .collect()
    }

    /// Entries with a falsy marker count as unstarred; unparseable keys are
    /// skipped.
    pub fn from_blob(blob: StarBlob) -> Self {
        let mut starred = BTreeSet::new();
        for (label, marker) in blob {
            if !is_truthy(&marker) {
                continue;
            }
            match label.parse::<Identifier>() {
                Ok(id) => {
                    starred.insert(id);
                }
                Err(_) => warn!("ignoring star on invalid id {:?}", label),
            }
        }
        Self { starred }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
