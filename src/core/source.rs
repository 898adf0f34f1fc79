//! Verified source documents and the startup loader

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed pair of documents the loader looks for
pub const SOURCE_FILES: [&str; 2] = ["source_1.json", "source_2.json"];

/// A claimed original publication, with a verification flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Document title; grouping identity for match results
    pub title: String,
    /// Publishing outlet label
    pub source: String,
    /// Publication date, kept as the string the document carries
    pub created_date: String,
    /// Full article text quotes are matched against
    pub content: String,
    /// Only verified documents participate in quote matching
    pub verified: bool,
}

/// Errors produced while loading a source document from disk
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The in-memory collection of loaded source documents.
///
/// Populated once at startup and read-only afterwards. A failed load leaves
/// the library empty for the lifetime of the process; there is no retry.
#[derive(Debug, Clone, Default)]
pub struct SourceLibrary {
    documents: Vec<SourceDocument>,
}

impl SourceLibrary {
    /// Load the fixed pair of source files from `dir`, in file order.
    ///
    /// All-or-nothing: any read or parse failure discards everything.
    pub fn load(dir: &Path) -> Result<Self, SourceError> {
        let mut documents = Vec::with_capacity(SOURCE_FILES.len());
        for name in SOURCE_FILES {
            documents.push(load_document(&dir.join(name))?);
        }
        Ok(Self { documents })
    }

    /// Load from `dir`, falling back to an empty library on failure.
    ///
    /// The failure is logged but never surfaced to the user directly; an
    /// empty library just means no quote will ever match.
    pub fn load_or_empty(dir: &Path) -> Self {
        match Self::load(dir) {
            Ok(library) => {
                tracing::info!(
                    "Loaded {} source documents from {}",
                    library.len(),
                    dir.display()
                );
                library
            }
            Err(e) => {
                tracing::error!("Failed to load source documents: {}", e);
                Self::default()
            }
        }
    }

    /// The loaded documents, in load order
    pub fn documents(&self) -> &[SourceDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Build a library directly from documents (tests, programmatic use)
    pub fn from_documents(documents: Vec<SourceDocument>) -> Self {
        Self { documents }
    }
}

/// Read and parse a single source document
fn load_document(path: &Path) -> Result<SourceDocument, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory under the system temp dir
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("veriquote-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_source(dir: &Path, name: &str, json: &str) {
        fs::write(dir.join(name), json).unwrap();
    }

    const GOOD: &str = r#"{
        "title": "A Title",
        "source": "An Outlet",
        "created_date": "2024-01-01",
        "content": "some article text",
        "verified": true
    }"#;

    #[test]
    fn test_load_shipped_sources() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("sources");
        let library = SourceLibrary::load(&dir).unwrap();

        assert_eq!(library.len(), 2);
        assert!(library.documents()[0].verified);
        assert!(library.documents()[0]
            .content
            .contains("offers the promise of greater efficiency"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = Path::new("/definitely/not/a/real/sources/dir");
        assert!(SourceLibrary::load(dir).is_err());
        assert!(SourceLibrary::load_or_empty(dir).is_empty());
    }

    #[test]
    fn test_one_bad_file_discards_everything() {
        let dir = scratch_dir("partial");
        write_source(&dir, "source_1.json", GOOD);
        write_source(&dir, "source_2.json", "{ not json");

        let err = SourceLibrary::load(&dir).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(SourceLibrary::load_or_empty(&dir).is_empty());
    }

    #[test]
    fn test_shape_mismatch_fails_at_load_time() {
        let dir = scratch_dir("shape");
        write_source(&dir, "source_1.json", GOOD);
        // Missing the `content` field entirely
        write_source(
            &dir,
            "source_2.json",
            r#"{"title": "T", "source": "S", "created_date": "2024-01-01", "verified": true}"#,
        );

        assert!(matches!(
            SourceLibrary::load(&dir),
            Err(SourceError::Parse { .. })
        ));
    }

    #[test]
    fn test_both_files_load_in_order() {
        let dir = scratch_dir("order");
        write_source(&dir, "source_1.json", GOOD);
        write_source(
            &dir,
            "source_2.json",
            &GOOD.replace("A Title", "Another Title"),
        );

        let library = SourceLibrary::load(&dir).unwrap();
        assert_eq!(library.documents()[0].title, "A Title");
        assert_eq!(library.documents()[1].title, "Another Title");
    }
}
