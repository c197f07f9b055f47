//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the record sequence lives. The
//! [`Phonebook`](crate::api::Phonebook) keeps the records in memory and hands
//! the whole sequence to the store on every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production backend
//!   - One record per line, six `;`-separated fields
//!   - Every save rewrites the whole file through a temp file + rename
//!
//! - [`memory::InMemoryStore`]: for testing
//!   - No persistence
//!   - Can be primed to fail the next save
//!
//! ## Storage Format
//!
//! ```text
//! Ivanov;Ivan;Ivanovich;Acme;+7 495 000-00-00;+7 900 000-00-00
//! Smith;John;;Globex;555-0100;555-0199
//! ```
//!
//! There is no header and no escaping; fields containing the delimiter are
//! rejected before they reach the store.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
pub trait DataStore {
    /// Read the full sequence. A store that has never been written is empty.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted sequence with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Human-readable location, used in logs.
    fn location(&self) -> String;
}
