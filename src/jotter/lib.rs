//! # Jotter Architecture
//!
//! Jotter is a small note-taking library with a next-word suggestion feature. Notes are
//! plain `(title, body)` pairs kept in a single JSON file; suggestions come from a
//! pre-trained sequence model that is loaded once and queried one word at a time.
//!
//! The library knows nothing about terminals. The `jot` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: one method per user command                 │
//! │  - Holds the note store and the optional suggester          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns `CmdResult`                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┼───────────────┐
//!               ▼              ▼               ▼
//! ┌──────────────────┐ ┌────────────────┐ ┌──────────────┐
//! │ store/           │ │ suggest.rs     │ │ export.rs    │
//! │ NoteStore +      │ │ Suggester over │ │ text / pdf   │
//! │ StorageBackend   │ │ oracle/        │ │ writers      │
//! └──────────────────┘ └────────────────┘ └──────────────┘
//! ```
//!
//! ## Key Principle: Write-Through
//!
//! The whole store is loaded at startup and every mutation is flushed before it is
//! committed in memory. A failed flush leaves both the file and the in-memory map as
//! they were, so the process can keep serving reads.
//!
//! ## Dependencies Are Injected
//!
//! [`api::JotApi`] is generic over the [`store::StorageBackend`] and the
//! [`oracle::PredictionOracle`]. Production uses `FsBackend` + `ModelOracle`; tests use
//! `MemBackend` and scripted oracles.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by all clients
//! - [`commands`]: Business logic for each command
//! - [`store`]: Note store and storage backends
//! - [`oracle`]: Prediction oracle trait, tokenizer and n-gram model
//! - [`suggest`]: The suggestion workflow
//! - [`export`]: Text and PDF export
//! - [`config`]: Configuration management
//! - [`init`]: Resolves data dirs and wires a ready-to-use API
//! - [`editor`]: External editor integration
//! - [`model`]: The `Note` type and validation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod init;
pub mod model;
pub mod oracle;
pub mod store;
pub mod suggest;
