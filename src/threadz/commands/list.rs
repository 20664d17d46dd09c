use crate::board::Board;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::ident::Identifier;
use crate::model::{CommentNode, MAX_DEPTH};
use crate::stars::StarIndex;
use crate::tree::visible_children;
use chrono::{DateTime, Utc};

/// One row of a rendered thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayComment {
    pub id: Identifier,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Rendering depth, 1 for top-level comments
    pub depth: usize,
    pub starred: bool,
    /// Whether a reply may be posted here
    pub can_reply: bool,
    /// Replies not shown because of the depth cut-off
    pub hidden_replies: usize,
}

/// Flattens `nodes` in display order, descending only as far as
/// [`visible_children`] allows.
pub fn flatten(
    nodes: &[CommentNode],
    depth: usize,
    stars: &StarIndex,
    out: &mut Vec<DisplayComment>,
) {
    for node in nodes {
        let visible = visible_children(node, depth);
        out.push(DisplayComment {
            id: node.id.clone(),
            text: node.text.clone(),
            created_at: node.created_at,
            depth,
            starred: stars.is_starred(&node.id),
            can_reply: depth < MAX_DEPTH,
            hidden_replies: node.children.len() - visible.len(),
        });
        flatten(visible, depth + 1, stars, out);
    }
}

pub fn run(board: &Board, starred_only: bool) -> Result<CmdResult> {
    let mut listed = Vec::new();
    flatten(&board.tree.snapshot(), 1, &board.stars, &mut listed);

    if starred_only {
        listed.retain(|dc| dc.starred);
    }

    Ok(CmdResult::default().with_listed_comments(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{post, reply, star};

    fn id(s: &str) -> Identifier {
        s.parse().unwrap()
    }

    #[test]
    fn lists_threads_depth_first() {
        let mut board = Board::new();
        post::run(&mut board, "A").unwrap();
        reply::run(&mut board, &id("1"), "A1").unwrap();
        reply::run(&mut board, &id("1.1"), "A1a").unwrap();
        post::run(&mut board, "B").unwrap();

        let result = run(&board, false).unwrap();
        let rows: Vec<(String, usize)> = result
            .listed_comments
            .iter()
            .map(|dc| (dc.id.to_string(), dc.depth))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2".to_string(), 1),
                ("1".to_string(), 1),
                ("1.1".to_string(), 2),
                ("1.1.1".to_string(), 3),
            ]
        );
        assert!(result.changed.is_none());
    }

    #[test]
    fn marks_reply_capability_and_stars() {
        let mut board = Board::new();
        post::run(&mut board, "A").unwrap();
        reply::run(&mut board, &id("1"), "A1").unwrap();
        reply::run(&mut board, &id("1.1"), "A1a").unwrap();
        star::run(&mut board, &[id("1.1")]).unwrap();

        let listed = run(&board, false).unwrap().listed_comments;
        assert!(listed[0].can_reply);
        assert!(listed[1].starred);
        assert!(!listed[2].can_reply);

        let starred = run(&board, true).unwrap().listed_comments;
        assert_eq!(starred.len(), 1);
        assert_eq!(starred[0].id, id("1.1"));
    }

    #[test]
    fn flatten_hides_replies_past_the_cut_off() {
        let node: CommentNode = serde_json::from_str(
            r#"{"id": "1", "text": "a", "createdAt": 0, "children": [
                {"id": "1.1", "text": "b", "createdAt": 0, "children": []}
            ]}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        flatten(&[node], MAX_DEPTH, &StarIndex::new(), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].hidden_replies, 1);
    }
}
