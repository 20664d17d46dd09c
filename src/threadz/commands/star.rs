use crate::board::{Board, Change};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ident::Identifier;

/// Toggles the star on each id. Ids need not refer to a live comment.
///
/// A starred id is reserved in the tree straight away, as it is when the
/// board is loaded, so a later comment never picks up the star.
pub fn run(board: &mut Board, ids: &[Identifier]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let starred = board.stars.toggle_star(id);
        if starred {
            board.tree.reserve(id);
        }
        let verb = if starred { "starred" } else { "unstarred" };
        let mut msg = format!("Comment {} {}", id, verb);
        if !board.tree.contains(id) {
            msg.push_str(" (no such comment)");
        }
        result.add_message(CmdMessage::success(msg));
        result.star_states.push((id.clone(), starred));
    }

    if !ids.is_empty() {
        result.changed = Some(Change::Stars);
    }
    Ok(result)
}
