//! # Phonebook Architecture
//!
//! Phonebook is a small contact directory kept in a plain text file. The crate is a
//! library with a thin interactive client on top; everything below the CLI works on
//! Rust values and never touches the terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, the numbered menu, prompts, paging, printing      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - `Phonebook<S>`: the in-memory record sequence + backend  │
//! │  - Returns structured `CmdResult`s                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, pager.rs)                    │
//! │  - add, find, display; page arithmetic                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records on Disk
//!
//! One record per line, six `;`-separated fields:
//! `last;first;middle;organization;work phone;personal phone`. A line with any
//! other field count makes the whole load fail; nothing is skipped.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Phonebook` facade
//! - [`commands`]: Business logic for add, find and display
//! - [`pager`]: Page index arithmetic and navigation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record`, `Field` and the line codec
//! - [`config`]: Configuration management
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod pager;
pub mod store;
