use crate::board::{Board, Change};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(board: &mut Board, text: &str) -> Result<CmdResult> {
    let node = board.tree.post_comment(text)?;

    let mut result = CmdResult::default().with_change(Change::Tree);
    result.add_message(CmdMessage::success(format!("Comment posted ({})", node.id)));
    result.affected_comments.push(node);
    Ok(result)
}
