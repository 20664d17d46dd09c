use crate::board::{Board, Change};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ident::Identifier;

pub fn run(board: &mut Board, parent: &Identifier, text: &str) -> Result<CmdResult> {
    let node = board.tree.post_reply(parent, text)?;

    let mut result = CmdResult::default().with_change(Change::Tree);
    result.add_message(CmdMessage::success(format!(
        "Reply posted ({}) to {}",
        node.id, parent
    )));
    result.affected_comments.push(node);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::post;
    use crate::error::ThreadzError;
    use crate::model::MAX_DEPTH;

    fn id(s: &str) -> Identifier {
        s.parse().unwrap()
    }

    #[test]
    fn reply_grows_parent_by_one_at_next_depth() {
        let mut board = Board::new();
        post::run(&mut board, "root").unwrap();

        for parent in ["1", "1.1"] {
            let parent = id(parent);
            let before = board.tree.find_node(&parent).unwrap().children.len();
            let result = run(&mut board, &parent, "reply").unwrap();

            let after = board.tree.find_node(&parent).unwrap().children.len();
            assert_eq!(after, before + 1);
            assert_eq!(result.affected_comments[0].depth(), parent.depth() + 1);
        }
    }

    #[test]
    fn scenario_depth_limit() {
        let mut board = Board::new();
        post::run(&mut board, "A").unwrap();
        let b = run(&mut board, &id("1"), "B").unwrap();
        assert_eq!(b.affected_comments[0].id, id("1.1"));
        assert_eq!(b.affected_comments[0].depth(), 2);

        let c = run(&mut board, &id("1.1"), "C").unwrap();
        let c_id = c.affected_comments[0].id.clone();
        assert_eq!(c_id.depth(), MAX_DEPTH);

        let before = board.tree.snapshot();
        let d = run(&mut board, &c_id, "D");
        assert!(matches!(d, Err(ThreadzError::DepthExceeded { .. })));
        assert_eq!(board.tree.snapshot(), before);
    }

    #[test]
    fn missing_parent_is_a_no_op() {
        let mut board = Board::new();
        post::run(&mut board, "A").unwrap();
        board.tree.delete_comment(&id("1"));

        let result = run(&mut board, &id("1"), "late");
        assert!(matches!(result, Err(ThreadzError::ParentNotFound(_))));
        assert!(board.tree.is_empty());
    }
}
