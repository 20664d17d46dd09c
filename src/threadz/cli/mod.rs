//! Terminal client plumbing: logging setup and output rendering.

pub mod logging;
pub mod print;
