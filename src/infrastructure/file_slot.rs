use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;
use crate::domain::ports::CartSlot;

/// Durable cart slot backed by a single file on disk.
///
/// Writes go through a sibling temp file followed by a rename, so the slot
/// is always either the previous cart or the new one, never a torn write.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl CartSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, DomainError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "reading {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write(&self, payload: &str) -> Result<(), DomainError> {
        let temp = self.temp_path();
        write_and_rename(&temp, &self.path, payload).map_err(|e| {
            DomainError::Storage(format!("writing {}: {e}", self.path.display()))
        })
    }

    fn clear(&self) -> Result<(), DomainError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Storage(format!(
                "clearing {}: {e}",
                self.path.display()
            ))),
        }
    }
}

fn write_and_rename(temp: &Path, target: &Path, payload: &str) -> std::io::Result<()> {
    fs::write(temp, payload)?;
    fs::rename(temp, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn slot_in(dir: &TempDir) -> FileSlot {
        FileSlot::new(dir.path().join("cart.json"))
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(slot_in(&dir).read().unwrap(), None);
    }

    #[test]
    fn write_then_read_survives_a_new_slot_instance() {
        let dir = TempDir::new().unwrap();
        slot_in(&dir).write(r#"[{"productId":"p1"}]"#).unwrap();

        // A fresh instance over the same path sees the payload, as a page
        // reload would.
        let reopened = slot_in(&dir);
        assert_eq!(
            reopened.read().unwrap().as_deref(),
            Some(r#"[{"productId":"p1"}]"#)
        );
    }

    #[test]
    fn write_replaces_previous_content_entirely() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        slot.write("[1,2,3]").unwrap();
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        slot.write("[]").unwrap();
        assert!(!slot.temp_path().exists());
    }

    #[test]
    fn clear_removes_the_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        slot.write("[]").unwrap();
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
        slot.clear().unwrap();
    }

    #[test]
    fn write_into_a_missing_directory_fails_with_storage_error() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("no-such-dir").join("cart.json"));
        assert!(matches!(
            slot.write("[]"),
            Err(DomainError::Storage(_))
        ));
    }
}
