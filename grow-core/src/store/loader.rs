//! Content Loader
//!
//! Loads a [`Catalog`] from a content directory:
//!
//! ```text
//! content/
//! ├── states/             # One document per state, lanes inline
//! │   └── *.json
//! ├── partners.json       # Array of partner records
//! ├── jobs.json           # Array of job openings
//! └── truck-types.json    # Array of truck type records
//! ```
//!
//! State documents are read in sorted path order. A missing collection file
//! gives an empty collection; a present but unreadable or malformed file is
//! an error naming the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{ContentError, Result};

use super::catalog::{parse_collection, parse_state, Catalog};

/// Loads authored content from disk
#[derive(Debug, Clone)]
pub struct ContentLoader {
    /// Content root directory
    root: PathBuf,
}

impl ContentLoader {
    /// Create a loader for the given content root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every collection under the content root
    pub fn load(&self) -> Result<Catalog> {
        if !self.root.is_dir() {
            return Err(ContentError::ContentLoadError {
                path: self.root.display().to_string(),
                reason: "Not a directory".to_string(),
            });
        }

        let catalog = Catalog {
            states: self.load_states()?,
            partners: self.load_collection("partners.json")?,
            jobs: self.load_collection("jobs.json")?,
            truck_types: self.load_collection("truck-types.json")?,
        };

        tracing::info!(
            root = %self.root.display(),
            states = catalog.states.len(),
            partners = catalog.partners.len(),
            jobs = catalog.jobs.len(),
            truck_types = catalog.truck_types.len(),
            "content loaded"
        );

        Ok(catalog)
    }

    /// Paths of all state documents, in sorted order
    pub fn discover_states(&self) -> Result<Vec<PathBuf>> {
        let states_dir = self.root.join("states");
        if !states_dir.is_dir() {
            tracing::debug!(path = %states_dir.display(), "no states directory");
            return Ok(vec![]);
        }

        let pattern = format!(
            "{}/*.json",
            glob::Pattern::escape(&states_dir.to_string_lossy())
        );
        let paths = glob::glob(&pattern).map_err(|e| ContentError::ContentLoadError {
            path: pattern.clone(),
            reason: e.to_string(),
        })?;

        let mut found = vec![];
        for entry in paths {
            let path = entry.map_err(|e| ContentError::ContentLoadError {
                path: e.path().display().to_string(),
                reason: e.error().to_string(),
            })?;
            found.push(path);
        }
        found.sort();

        Ok(found)
    }

    fn load_states(&self) -> Result<Vec<crate::entity::StateEntity>> {
        let mut states = vec![];
        for path in self.discover_states()? {
            let json = read_file(&path)?;
            tracing::debug!(path = %path.display(), "loading state");
            states.push(parse_state(&path.display().to_string(), &json)?);
        }
        Ok(states)
    }

    fn load_collection<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "collection file absent; collection is empty");
            return Ok(vec![]);
        }

        let json = read_file(&path)?;
        parse_collection(&path.display().to_string(), &json)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ContentError::ContentLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
