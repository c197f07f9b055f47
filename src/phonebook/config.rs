use crate::error::{PhonebookError, Result};
use crate::pager::DEFAULT_PAGE_SIZE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "phonebook.txt";

/// Configuration for phonebook, stored as JSON in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Backing file; relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Records shown per page when browsing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
        }
    }
}

impl PhonebookConfig {
    /// Platform config file location, if a home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "phonebook", "phonebook")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(PhonebookError::Serialization)?;
        fs::write(path, content).map_err(PhonebookError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PhonebookError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        page_size: Option<usize>,
    ) -> Result<Self> {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        if let Some(size) = page_size {
            self.page_size = size;
        }
        self.validate()?;
        Ok(self)
    }
}
