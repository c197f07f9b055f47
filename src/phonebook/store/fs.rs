use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "phonebook".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(PhonebookError::Io)?;
        let records = content
            .lines()
            .enumerate()
            .map(|(i, line)| Record::from_line(line, i + 1))
            .collect::<Result<Vec<_>>>()?;

        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;

        let mut content = String::new();
        for record in records {
            content.push_str(&record.to_line());
            content.push('\n');
        }

        let tmp = self.tmp_path();
        let written = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(PhonebookError::Io(e));
        }

        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("phonebook.txt"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_writes_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let records = vec![
            Record::new("A", "B", "C", "D", "1", "2"),
            Record::new("E", "F", "G", "H", "3", "4"),
        ];
        store.save(&records).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "A;B;C;D;1;2\nE;F;G;H;3;4\n");
    }

    #[test]
    fn save_overwrites_instead_of_appending() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&[Record::new("Old", "", "", "", "", "")])
            .unwrap();
        store
            .save(&[Record::new("New", "", "", "", "", "")])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].last_name, "New");
    }

    #[test]
    fn load_accepts_crlf_line_endings() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "A;B;C;D;1;2\r\nE;F;G;H;3;4\r\n").unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].personal_phone, "4");
    }

    #[test]
    fn load_fails_on_short_line() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "A;B;C;D;1;2\nE;F;G;H;3\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::MalformedLine { line: 2, found: 5 }
        ));
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/book.txt"));
        store.save(&[Record::new("A", "", "", "", "", "")]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn failed_save_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        // A directory in the target's place makes the final rename fail.
        fs::create_dir(store.path()).unwrap();
        fs::write(store.path().join("keep"), "x").unwrap();

        let err = store
            .save(&[Record::new("A", "", "", "", "", "")])
            .unwrap_err();
        assert!(matches!(err, PhonebookError::Io(_)));

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_tmp_write_is_an_error() {
        let dir = TempDir::new().unwrap();
        // The parent is a file, so neither the tmp file nor the target can be created.
        fs::write(dir.path().join("blocker"), "x").unwrap();
        let mut store = FileStore::new(dir.path().join("blocker").join("book.txt"));

        assert!(store
            .save(&[Record::new("A", "", "", "", "", "")])
            .is_err());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("blocker")]);
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&[Record::new("A", "", "", "", "", "")]).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }
}
