use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    saves: usize,
    fail_next_save: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// What the last successful save wrote.
    pub fn saved(&self) -> &[Record] {
        &self.records
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Make the next `save` return an I/O error.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        if self.fail_next_save {
            self.fail_next_save = false;
            return Err(PhonebookError::Io(io::Error::other("simulated save failure")));
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` generated contacts named `Contact1`..`ContactN`.
        pub fn with_records(mut self, count: usize) -> Self {
            let start = self.store.records.len();
            for i in start..start + count {
                let n = i + 1;
                self.store.records.push(Record::new(
                    format!("Contact{}", n),
                    format!("First{}", n),
                    format!("Middle{}", n),
                    format!("Org{}", n),
                    format!("100-{:04}", n),
                    format!("200-{:04}", n),
                ));
            }
            self
        }

        pub fn with_contact(mut self, last_name: &str, first_name: &str) -> Self {
            self.store.records.push(Record::new(
                last_name,
                first_name,
                "",
                "Acme",
                "555-0100",
                "555-0199",
            ));
            self
        }
    }
}
