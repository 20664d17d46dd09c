use crate::board::Board;
use crate::commands::list::flatten;
use crate::commands::CmdResult;
use crate::error::{Result, ThreadzError};
use crate::ident::Identifier;

/// Shows one comment with its visible replies.
pub fn run(board: &Board, id: &Identifier) -> Result<CmdResult> {
    let node = board
        .tree
        .find_node(id)
        .ok_or_else(|| ThreadzError::CommentNotFound(id.to_string()))?;

    let mut listed = Vec::new();
    let depth = node.depth();
    flatten(std::slice::from_ref(&node), depth, &board.stars, &mut listed);

    let mut result = CmdResult::default().with_listed_comments(listed);
    result.affected_comments.push(node);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{post, reply};

    fn id(s: &str) -> Identifier {
        s.parse().unwrap()
    }

    #[test]
    fn views_nested_comment_with_its_replies() {
        let mut board = Board::new();
        post::run(&mut board, "A").unwrap();
        reply::run(&mut board, &id("1"), "A1").unwrap();
        reply::run(&mut board, &id("1.1"), "A1a").unwrap();

        let result = run(&board, &id("1.1")).unwrap();
        assert_eq!(result.listed_comments.len(), 2);
        assert_eq!(result.listed_comments[0].depth, 2);
        assert_eq!(result.listed_comments[1].text, "A1a");
    }

    #[test]
    fn unknown_comment_is_an_error() {
        let board = Board::new();
        assert!(matches!(
            run(&board, &id("3")),
            Err(ThreadzError::CommentNotFound(_))
        ));
    }
}
