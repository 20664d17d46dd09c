use crate::board::{Board, Change};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ThreadzError};
use crate::ident::Identifier;

/// Deletes each comment with its replies.
///
/// Every id must exist before anything is removed. An id that disappears
/// because an earlier one in the list was its ancestor is reported, not an
/// error.
pub fn run(board: &mut Board, ids: &[Identifier]) -> Result<CmdResult> {
    if let Some(missing) = ids.iter().find(|id| !board.tree.contains(id)) {
        return Err(ThreadzError::CommentNotFound(missing.to_string()));
    }

    let mut result = CmdResult::default();
    let mut removed_any = false;

    for id in ids {
        let size = board
            .tree
            .find_node(id)
            .map(|node| node.subtree_size())
            .unwrap_or(0);

        if board.tree.delete_comment(id) {
            removed_any = true;
            let replies = size.saturating_sub(1);
            let msg = if replies > 0 {
                format!("Comment deleted ({}) with {} replies", id, replies)
            } else {
                format!("Comment deleted ({})", id)
            };
            result.add_message(CmdMessage::success(msg));
        } else {
            result.add_message(CmdMessage::info(format!(
                "Comment {} was already removed with its thread",
                id
            )));
        }
    }

    if removed_any {
        result.changed = Some(Change::Tree);
    }
    Ok(result)
}
