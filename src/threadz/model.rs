use crate::ident::Identifier;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Maximum nesting depth: the top level plus two levels of replies.
pub const MAX_DEPTH: usize = 3;

/// A comment and its replies, in the nested form used for persistence and
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub id: Identifier,
    pub text: String,
    // Stored as epoch milliseconds; older blobs call it `timestamp`
    #[serde(with = "chrono::serde::ts_milliseconds", alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "replies")]
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    pub fn new(id: Identifier, text: String) -> Self {
        Self {
            id,
            text,
            created_at: now(),
            children: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.id.depth()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CommentNode::subtree_size)
            .sum::<usize>()
    }
}

/// Current time truncated to the millisecond precision the blobs keep, so a
/// saved node loads back identical.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Blank means empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_legacy_blob_shape() {
        let json = r#"[
            {"id": 2, "text": "hello", "timestamp": 1700000000123, "isStarred": false,
             "replies": [{"id": "2.1", "text": "re", "timestamp": 1700000000456, "replies": []}]}
        ]"#;
        let nodes: Vec<CommentNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id.to_string(), "2");
        assert_eq!(nodes[0].created_at.timestamp_millis(), 1_700_000_000_123);
        assert_eq!(nodes[0].children[0].id.to_string(), "2.1");
        assert_eq!(nodes[0].subtree_size(), 2);
    }

    #[test]
    fn test_serializes_camel_case_millis() {
        let node = CommentNode::new("1".parse().unwrap(), "A".into());
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["createdAt"], node.created_at.timestamp_millis());
        assert!(value["children"].as_array().unwrap().is_empty());

        let back: CommentNode = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t"));
        assert!(!is_blank(" a "));
    }
}
