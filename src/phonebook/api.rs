//! # API Facade
//!
//! [`Phonebook`] is the record store: it owns the in-memory sequence and the
//! backend it is persisted to. Every UI (the interactive menu today) goes
//! through it.
//!
//! The facade dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`]s. It never prints and never reads from the terminal.
//!
//! ## Generic Over DataStore
//!
//! - Production: `Phonebook<FileStore>`
//! - Testing: `Phonebook<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::pager::Pager;
use crate::store::DataStore;
use tracing::debug;

pub struct Phonebook<S: DataStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: DataStore> Phonebook<S> {
    /// Loads the full sequence from `store`. Fails on the first malformed line.
    pub fn open(store: S) -> Result<Self> {
        let records = store.load()?;
        debug!(
            location = %store.location(),
            count = records.len(),
            "opened phonebook"
        );
        Ok(Self { store, records })
    }

    pub fn add(&mut self, record: Record) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &mut self.records, record)
    }

    pub fn find(&self, criteria: &SearchCriteria) -> Result<CmdResult> {
        commands::find::run(&self.records, criteria)
    }

    pub fn find_by_last_name(&self, last_name: &str) -> Result<CmdResult> {
        self.find(&SearchCriteria::last_name(last_name))
    }

    /// A pager positioned on page 1 of the current sequence.
    pub fn pager(&self, page_size: usize) -> Pager {
        Pager::new(self.records.len(), page_size)
    }

    pub fn page(&self, pager: &Pager) -> Result<CmdResult> {
        commands::display::run(&self.records, pager)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::find::SearchCriteria;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PageView};
