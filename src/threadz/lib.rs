//! # Threadz Architecture
//!
//! Threadz is a **UI-agnostic comment thread library**: nested comments with
//! bounded reply depth, a separate set of starred comments, and local
//! persistence. The `threadz` binary is one client of it; rendering,
//! timestamp display and input handling all live there.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders threads, handles terminal I/O  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Board and the store                             │
//! │  - Parses id labels, dispatches, persists after mutations   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over &mut Board                           │
//! │  - Reports which slot changed in CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (tree.rs, stars.rs, ident.rs, board.rs)              │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Comments are labelled by their structural position (`1`, `1.2`,
//! `1.2.1`). Labels are never renumbered or reissued; see [`ident`]. The
//! tree itself addresses nodes through arena keys; see [`tree`].
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through the `log` facade; the binary decides
//! where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`board`]: The state object and the change contract
//! - [`tree`]: Arena-backed comment tree
//! - [`stars`]: Starred-comment set
//! - [`ident`]: Identifier labels and allocation
//! - [`model`]: Nested comment form and depth limit
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod ident;
pub mod init;
pub mod model;
pub mod stars;
pub mod store;
pub mod tree;
