//! File-based document source for native platforms.

use super::{BoxFuture, DocumentLoader, LoadError, LoadResult, log_outcome};
use crate::document::FloorplanDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads documents from disk.
///
/// URLs are treated as paths relative to a base directory; absolute paths
/// are used as-is. A file that cannot be read counts as a transport
/// failure.
pub struct FileLoader {
    base_path: PathBuf,
}

impl FileLoader {
    /// Create a loader resolving relative URLs against `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Loader resolving relative URLs against the working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, url: &str) -> PathBuf {
        let url = url.strip_prefix("file://").unwrap_or(url);
        let path = Path::new(url);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

impl DocumentLoader for FileLoader {
    fn load(&self, url: &str) -> BoxFuture<'_, LoadResult<FloorplanDocument>> {
        let path = self.resolve(url);
        let url = url.to_string();

        Box::pin(async move {
            let result = fs::read_to_string(&path)
                .map_err(|e| LoadError::Network(format!("Failed to read {}: {}", path.display(), e)))
                .and_then(|json| FloorplanDocument::from_json(&json));
            log_outcome(&url, result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::test_util::block_on;
    use tempfile::tempdir;

    #[test]
    fn test_file_loader_load() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("plan.json"),
            r#"{"Furnitures": [{
                "xPlacement": 2, "yPlacement": 3, "rotation": 0,
                "MinBound": {"X": 0, "Y": 0}, "MaxBound": {"X": 1, "Y": 1},
                "equipName": "Stool"
            }]}"#,
        )
        .unwrap();

        let loader = FileLoader::new(dir.path());
        let doc = block_on(loader.load("plan.json")).unwrap();
        assert_eq!(doc.furnitures()[0].label, "Stool");
    }

    #[test]
    fn test_file_loader_absolute_and_file_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, "{}").unwrap();

        let loader = FileLoader::new("/nonexistent-base");
        let url = format!("file://{}", path.display());
        assert!(block_on(loader.load(&url)).unwrap().is_empty());
    }

    #[test]
    fn test_file_loader_missing_file() {
        let dir = tempdir().unwrap();
        let loader = FileLoader::new(dir.path());
        let result = block_on(loader.load("nope.json"));
        assert!(matches!(result, Err(LoadError::Network(_))));
    }

    #[test]
    fn test_file_loader_malformed_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{\"Doors\": [{}]}").unwrap();
        let loader = FileLoader::new(dir.path());
        let result = block_on(loader.load("broken.json"));
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }
}
