//! cqrs-scaffold - Serverless CQRS scaffolding toolkit
//!
//! Building blocks for event-sourced, CQRS-style applications backed by a
//! partition/sort-keyed key-value store: the key codec, the master-setting
//! module with its data-sync handler wiring, and the project generator
//! behind the `cqrs-scaffold` CLI.

pub mod config;
pub mod keys;
pub mod master;
pub mod scaffold;
pub mod utils;
