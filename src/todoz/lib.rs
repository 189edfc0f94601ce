//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo library** with a command-line client on top.
//! The library never prints, never exits, and never assumes a terminal; the
//! same core could sit behind a web view or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the list, prints messages      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session, normalizes selectors, dispatches       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation each; computes the next TodoList, commits  │
//! │    it through the Session, returns a CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State & Storage (session.rs, todos.rs, persistence.rs,     │
//! │  store/)                                                    │
//! │  - TodoList: pure list operations                           │
//! │  - Persistence: two JSON keys over a KeyValueStore          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Write Per Mutation
//!
//! Each mutating command builds a new [`todos::TodoList`] and hands it to
//! [`session::Session::commit_todos`], which writes the whole list to storage
//! and only then swaps it in. The stored `TodoApp` value therefore always
//! matches the last mutation that succeeded.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`session`]: Owned application state
//! - [`todos`]: The ordered todo collection and its operations
//! - [`persistence`]: Reading and writing state under fixed keys
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: `Todo` and `Priority`
//! - [`deadline`]: Parsing and formatting of deadlines
//! - [`validation`]: Name validation
//! - [`index`]: Display indexes and id prefixes
//! - [`config`]: Configuration management
//! - [`seed`]: The starting list for empty storage
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod deadline;
pub mod error;
pub mod index;
pub mod model;
pub mod persistence;
pub mod seed;
pub mod session;
pub mod store;
pub mod todos;
pub mod validation;
