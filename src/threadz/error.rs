use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThreadzError {
    #[error("Comment text cannot be empty")]
    EmptyInput,

    #[error("Parent comment not found: {0}")]
    ParentNotFound(String),

    #[error("Cannot reply to {id}: it is already at depth {depth}")]
    DepthExceeded { id: String, depth: usize },

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("No comment ids left under {0}")]
    IdSpaceExhausted(String),

    #[error("Invalid comment id: {0}")]
    InvalidIdentifier(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ThreadzError>;
