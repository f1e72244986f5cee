//! Filesystem resolution and parsing of property sources.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use lamina_core::{LaminaError, PropertyMap, ResourceLoader, Result, SourceId};
use tracing::debug;

/// Resolves source identifiers against an ordered list of search directories
/// and parses the resolved files as Java-style `.properties`.
///
/// An identifier resolves to the first directory that contains it; a leading
/// `/` on a resource-style identifier is stripped before joining, so
/// `"/app.properties"` and `"app.properties"` name the same file. Entries are
/// sorted by key on load so per-source iteration is deterministic.
pub struct FsResourceLoader {
    /// Directories searched in order; first hit wins.
    search_paths: Vec<PathBuf>,
}

impl FsResourceLoader {
    /// Creates a loader over a single base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_paths: vec![base_dir.into()],
        }
    }

    /// Creates a loader over an ordered list of search directories.
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Returns the search directories, in order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Resolves an identifier to the first existing file under the search
    /// directories.
    fn resolve(&self, id: &SourceId) -> Option<PathBuf> {
        let relative = id.as_str().trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        self.search_paths
            .iter()
            .map(|dir| dir.join(relative))
            .find(|path| path.is_file())
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load(&self, id: &SourceId) -> Result<Option<PropertyMap>> {
        let Some(path) = self.resolve(id) else {
            return Ok(None);
        };

        debug!("reading properties file: {:?}", path);

        let file = match File::open(&path) {
            Ok(file) => file,
            // Resolved but gone by open time; report not-found, not failure.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let table = java_properties::read(BufReader::new(file))
            .map_err(|e| LaminaError::parse_error(id.as_str(), e.to_string()))?;

        let mut entries: Vec<(String, String)> = table.into_iter().collect();
        entries.sort();

        Ok(Some(entries.into_iter().collect()))
    }
}
