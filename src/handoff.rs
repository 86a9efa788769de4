//! One-shot navigation handoff between launches.
//!
//! A single slot carries at most one pending folder path from an initiating
//! action (for example a `--goto` deep link) to the next launch. Writes are
//! last-write-wins; the reader consumes the value exactly once. After
//! initialization the slot is always empty.

#[cfg(test)]
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
#[cfg(test)]
use std::rc::Rc;

pub trait HandoffChannel {
    /// Store a pending path, overwriting any previous value.
    fn set(&self, path: &str);

    /// Read and clear the pending path. Subsequent calls within the same
    /// launch return `None` until another `set`.
    fn take_if_present(&self) -> Option<String>;
}

/// File-backed slot in the temp directory, surviving a process restart but
/// not intended to outlive the user's session.
pub struct FileHandoff {
    path: PathBuf,
}

impl FileHandoff {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_location() -> Self {
        Self::new(std::env::temp_dir().join("almacen").join("pending-navigation"))
    }
}

impl HandoffChannel for FileHandoff {
    fn set(&self, path: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "could not prepare handoff slot");
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, path) {
            tracing::warn!(error = %e, "could not write handoff slot");
        }
    }

    fn take_if_present(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(error = %e, "could not clear handoff slot");
        }
        let value = contents.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// In-process slot used as a test double. Clones share the same slot.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryHandoff {
    slot: Rc<RefCell<Option<String>>>,
}

#[cfg(test)]
impl HandoffChannel for MemoryHandoff {
    fn set(&self, path: &str) {
        *self.slot.borrow_mut() = Some(path.to_string());
    }

    fn take_if_present(&self) -> Option<String> {
        self.slot.borrow_mut().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_take_consumes_once() {
        let channel = MemoryHandoff::default();
        channel.set("Foo/Bar/");
        assert_eq!(channel.take_if_present(), Some("Foo/Bar/".to_string()));
        assert_eq!(channel.take_if_present(), None);
    }

    #[test]
    fn test_memory_last_write_wins() {
        let channel = MemoryHandoff::default();
        channel.set("First/");
        channel.set("Second/");
        assert_eq!(channel.take_if_present(), Some("Second/".to_string()));
    }

    #[test]
    fn test_file_take_consumes_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let channel = FileHandoff::new(dir.path().join("pending-navigation"));
        channel.set("ConversionFileErrors/Mock8/");
        assert_eq!(
            channel.take_if_present(),
            Some("ConversionFileErrors/Mock8/".to_string())
        );
        assert_eq!(channel.take_if_present(), None);
    }

    #[test]
    fn test_file_empty_slot_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let channel = FileHandoff::new(dir.path().join("pending-navigation"));
        assert_eq!(channel.take_if_present(), None);
    }

    #[test]
    fn test_file_blank_value_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pending-navigation");
        fs::write(&path, "  \n").expect("write");
        let channel = FileHandoff::new(path.clone());
        assert_eq!(channel.take_if_present(), None);
        assert!(!path.exists());
    }
}
