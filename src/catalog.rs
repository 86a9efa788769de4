//! Well-known top-level folders of the storage bucket.
//!
//! The catalog is compiled in and immutable; it maps raw prefixes to display
//! metadata and provides the default visible-prefix set when no folder is
//! selected.

use crate::shortcuts::normalize_path;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FolderCategory {
    Conversion,
    Upload,
    Scripts,
    Validation,
}

#[derive(Clone, Copy, Debug)]
pub struct FolderEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: FolderCategory,
}

const ENTRIES: &[FolderEntry] = &[
    FolderEntry {
        path: "ConversionFiles/",
        name: "Conversion Files",
        icon: "\u{f07b}",
        category: FolderCategory::Conversion,
    },
    FolderEntry {
        path: "ConversionFileErrors/",
        name: "Conversion File Errors",
        icon: "\u{f071}",
        category: FolderCategory::Conversion,
    },
    FolderEntry {
        path: "InitialUpload/",
        name: "Initial Upload",
        icon: "\u{f093}",
        category: FolderCategory::Upload,
    },
    FolderEntry {
        path: "InitialUploadErrors/",
        name: "Initial Upload Errors",
        icon: "\u{f071}",
        category: FolderCategory::Upload,
    },
    FolderEntry {
        path: "TSQLFiles/",
        name: "T-SQL Files",
        icon: "\u{f1c0}",
        category: FolderCategory::Scripts,
    },
    FolderEntry {
        path: "DataValidation/",
        name: "Data Validation",
        icon: "\u{f058}",
        category: FolderCategory::Validation,
    },
];

/// All catalog entries, in display order.
pub fn entries() -> &'static [FolderEntry] {
    ENTRIES
}

/// Find the catalog entry for a path, tolerating a missing trailing separator.
pub fn lookup_by_path(path: &str) -> Option<&'static FolderEntry> {
    let normalized = normalize_path(path);
    ENTRIES.iter().find(|e| e.path == normalized)
}

/// The full prefix set shown when no specific folder is selected.
pub fn default_prefixes() -> Vec<String> {
    ENTRIES.iter().map(|e| e.path.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_trailing_separator() {
        let entry = lookup_by_path("ConversionFiles").expect("entry should exist");
        assert_eq!(entry.name, "Conversion Files");
        assert_eq!(entry.path, "ConversionFiles/");
    }

    #[test]
    fn test_lookup_unknown_path() {
        assert!(lookup_by_path("NoSuchFolder/").is_none());
    }

    #[test]
    fn test_default_prefixes_cover_catalog_in_order() {
        let prefixes = default_prefixes();
        assert_eq!(prefixes.len(), entries().len());
        assert_eq!(prefixes[0], "ConversionFiles/");
        assert_eq!(prefixes.last().map(String::as_str), Some("DataValidation/"));
    }
}
