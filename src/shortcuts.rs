//! User-defined quick links to folder paths.
//!
//! Links live in a single JSON file under the config directory, written back
//! in full after every mutation. Unreadable or foreign data falls back to the
//! default set; nothing here is fatal to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: String,
    pub path: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("shortcut file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("shortcut file is not valid JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum AddLinkError {
    #[error("a shortcut to {0} already exists")]
    Duplicate(String),
}

/// Append a trailing separator when absent, so "Foo" and "Foo/" compare equal.
pub fn normalize_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Last non-empty segment of a path, if any.
pub fn last_segment(path: &str) -> Option<&str> {
    path.split('/').rev().find(|s| !s.is_empty())
}

/// Append a new link, rejecting paths already present (compared normalized).
pub fn add_link(links: &[QuickLink], path: &str, name: &str) -> Result<Vec<QuickLink>, AddLinkError> {
    let normalized = normalize_path(path);
    if links.iter().any(|l| l.path == normalized) {
        return Err(AddLinkError::Duplicate(normalized));
    }

    let mut out = links.to_vec();
    out.push(QuickLink {
        id: uuid::Uuid::new_v4().to_string(),
        path: normalized,
        name: name.to_string(),
    });
    Ok(out)
}

/// Remove the link with the given id. An unknown id is a no-op, not an error.
pub fn remove_link(links: &[QuickLink], id: &str) -> Vec<QuickLink> {
    links.iter().filter(|l| l.id != id).cloned().collect()
}

/// The set shipped with the deployment, used when nothing is persisted.
pub fn default_links() -> Vec<QuickLink> {
    vec![
        QuickLink {
            id: "default-mock8".to_string(),
            path: "ConversionFileErrors/Mock8/".to_string(),
            name: "Mock8 Errors".to_string(),
        },
        QuickLink {
            id: "default-erp-errors".to_string(),
            path: "haciendaerp/conversionfileerrors/".to_string(),
            name: "ERP Conversion Errors".to_string(),
        },
    ]
}

/// Durable storage for the quick-link set.
///
/// `load` never fails from the caller's perspective; corrupt or missing data
/// degrades to the default set. `save` replaces the whole persisted set.
pub trait ShortcutStore {
    fn load(&self) -> Vec<QuickLink>;
    fn save(&self, links: &[QuickLink]) -> Result<(), ShortcutError>;
}

/// On-disk shape of the shortcut file: the link set plus a write stamp.
#[derive(Serialize, Deserialize)]
struct ShortcutFile {
    saved_at: DateTime<Utc>,
    links: Vec<QuickLink>,
}

/// File-backed store holding one JSON document of links.
pub struct JsonShortcutStore {
    path: PathBuf,
}

impl JsonShortcutStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform config location, alongside `config.toml`.
    pub fn at_default_location() -> Result<Self, ShortcutError> {
        let proj_dirs =
            directories::ProjectDirs::from("", "", "almacen").ok_or(ShortcutError::NoConfigDir)?;
        Ok(Self::new(proj_dirs.config_dir().join("shortcuts.json")))
    }
}

impl ShortcutStore for JsonShortcutStore {
    fn load(&self) -> Vec<QuickLink> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return default_links(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read shortcuts, using defaults");
                return default_links();
            }
        };

        match serde_json::from_str::<ShortcutFile>(&contents) {
            Ok(file) => file.links,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "shortcut file unreadable, using defaults");
                default_links()
            }
        }
    }

    fn save(&self, links: &[QuickLink]) -> Result<(), ShortcutError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = ShortcutFile {
            saved_at: Utc::now(),
            links: links.to_vec(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("Foo"), "Foo/");
        assert_eq!(normalize_path("Foo/"), "Foo/");
        assert_eq!(normalize_path("Foo/Bar"), "Foo/Bar/");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("Reports/Q1/"), Some("Q1"));
        assert_eq!(last_segment("Reports"), Some("Reports"));
        assert_eq!(last_segment(""), None);
        assert_eq!(last_segment("/"), None);
    }

    #[test]
    fn test_add_link_normalizes_and_generates_id() {
        let links = add_link(&[], "Reports/Q1", "Q1").expect("add should succeed");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].path, "Reports/Q1/");
        assert!(!links[0].id.is_empty());
    }

    #[test]
    fn test_add_duplicate_path_rejected() {
        let links = add_link(&[], "Reports/Q1/", "Q1").expect("add should succeed");
        let err = add_link(&links, "Reports/Q1", "Again").expect_err("duplicate must be rejected");
        assert_eq!(err, AddLinkError::Duplicate("Reports/Q1/".to_string()));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let links = default_links();
        let after = remove_link(&links, "no-such-id");
        assert_eq!(after, links);
    }

    #[test]
    fn test_remove_by_id() {
        let links = default_links();
        let after = remove_link(&links, "default-mock8");
        assert_eq!(after.len(), links.len() - 1);
        assert!(after.iter().all(|l| l.id != "default-mock8"));
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonShortcutStore::new(dir.path().join("shortcuts.json"));
        assert_eq!(store.load(), default_links());
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("shortcuts.json");
        fs::write(&path, "{ not json").expect("write");
        let store = JsonShortcutStore::new(path);
        assert_eq!(store.load(), default_links());
    }

    #[test]
    fn test_save_writes_stamp_with_links() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("shortcuts.json");
        let store = JsonShortcutStore::new(path.clone());
        store.save(&default_links()).expect("save");

        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains("saved_at"));
        assert_eq!(store.load(), default_links());
    }

    #[test]
    fn test_save_load_round_trip_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonShortcutStore::new(dir.path().join("shortcuts.json"));

        let links = store.load();
        store.save(&links).expect("save");
        let reloaded = store.load();
        assert_eq!(reloaded, links);

        // A second save of the freshly loaded set changes nothing observable.
        store.save(&reloaded).expect("save");
        assert_eq!(store.load(), reloaded);
    }
}
