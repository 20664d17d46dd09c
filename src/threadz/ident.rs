//! # Comment Identifiers
//!
//! Every comment carries a structural identifier: the 1-based ordinal of the
//! comment among its siblings at each level, from the top level down.
//!
//! ```text
//! 1        first top-level comment ever posted
//! 1.2      second reply to comment 1
//! 1.2.1    first reply to comment 1.2
//! ```
//!
//! The number of segments is the comment's depth, so the identifier alone is
//! enough to tell whether a reply would exceed [`MAX_DEPTH`].
//!
//! Ordinals come from a per-parent high-water mark (how many child ids were
//! ever handed out), never from the current number of children. Deleting a
//! comment therefore leaves a permanent gap: siblings are not renumbered and
//! a deleted id is never issued again.
//!
//! Identifiers are display labels and persistence keys. Inside the tree,
//! nodes are addressed by arena keys (see `tree.rs`).

use crate::error::{Result, ThreadzError};
use crate::model::MAX_DEPTH;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawIdentifier", into = "String")]
pub struct Identifier(Vec<u32>);

impl Identifier {
    pub fn top_level(ordinal: u32) -> Self {
        Identifier(vec![ordinal])
    }

    pub fn child(&self, ordinal: u32) -> Self {
        let mut path = self.0.clone();
        path.push(ordinal);
        Identifier(path)
    }

    /// Distance from the top level; top-level comments are depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Position marker among siblings (last path segment).
    pub fn ordinal(&self) -> u32 {
        self.0.last().copied().unwrap_or(0)
    }

    pub fn parent(&self) -> Option<Identifier> {
        if self.0.len() > 1 {
            Some(Identifier(self.0[..self.0.len() - 1].to_vec()))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, ordinal) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", ordinal)?;
        }
        Ok(())
    }
}

impl FromStr for Identifier {
    type Err = ThreadzError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ThreadzError::InvalidIdentifier(s.to_string()));
        }

        let mut path = Vec::new();
        for segment in trimmed.split('.') {
            if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_digit()) {
                return Err(ThreadzError::InvalidIdentifier(s.to_string()));
            }
            let ordinal: u32 = segment
                .parse()
                .map_err(|_| ThreadzError::InvalidIdentifier(s.to_string()))?;
            if ordinal == 0 {
                return Err(ThreadzError::InvalidIdentifier(s.to_string()));
            }
            path.push(ordinal);
        }
        Ok(Identifier(path))
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}

/// Older blobs stored top-level ids as bare JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Number(u32),
    Label(String),
}

impl TryFrom<RawIdentifier> for Identifier {
    type Error = ThreadzError;

    fn try_from(raw: RawIdentifier) -> Result<Self> {
        match raw {
            RawIdentifier::Number(0) => Err(ThreadzError::InvalidIdentifier("0".to_string())),
            RawIdentifier::Number(n) => Ok(Identifier::top_level(n)),
            RawIdentifier::Label(label) => label.parse(),
        }
    }
}

/// Identifier for a new top-level comment.
///
/// `allocated` is the number of top-level ids issued so far, including
/// those whose comments were since deleted. Fails with `IdSpaceExhausted`
/// once the ordinal range is used up.
pub fn allocate_top_level(allocated: u32) -> Result<Identifier> {
    allocated
        .checked_add(1)
        .map(Identifier::top_level)
        .ok_or_else(|| ThreadzError::IdSpaceExhausted("the top level".to_string()))
}

/// Identifier for a new reply under `parent`.
///
/// `parent` is `None` when the caller could not locate the parent comment.
/// Fails with `DepthExceeded` when the reply would sit below [`MAX_DEPTH`];
/// the check needs only `parent_depth`, not the tree.
pub fn allocate_reply(
    parent: Option<&Identifier>,
    allocated: u32,
    parent_depth: usize,
) -> Result<Identifier> {
    let parent = parent.ok_or_else(|| ThreadzError::ParentNotFound("<unknown>".to_string()))?;
    if parent_depth + 1 > MAX_DEPTH {
        return Err(ThreadzError::DepthExceeded {
            id: parent.to_string(),
            depth: parent_depth,
        });
    }
    let ordinal = allocated
        .checked_add(1)
        .ok_or_else(|| ThreadzError::IdSpaceExhausted(parent.to_string()))?;
    Ok(parent.child(ordinal))
}
