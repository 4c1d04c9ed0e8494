//! JSON persistence for the catalog aggregate.
//!
//! The data file holds one document with three top-level fields (`books`,
//! `members`, `borrow_history`) and is always rewritten wholesale: serialize
//! the whole aggregate, write a temp file beside the target, rename into
//! place. There is no partial write and no append log.

use std::fs;
use std::io;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::fs::rename_with_fallback;

impl Catalog {
    /// Load the catalog from `path`.
    ///
    /// An absent file is not an error: a fresh empty catalog is returned so
    /// first runs start clean.
    ///
    /// # Errors
    ///
    /// `CorruptState` if the file exists but does not parse as a catalog
    /// document; `Io` if it cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&contents).map_err(|source| CatalogError::CorruptState {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the whole catalog to `path`, pretty-printed for diffability.
    ///
    /// The document is written to a sibling temp file first and renamed over
    /// the target, so an interrupted save never truncates the previous data
    /// file. Parent directories are created as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(CatalogError::Serialize)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut temp_name = path.as_os_str().to_os_string();
        temp_name.push(".tmp");
        let temp_path = Path::new(&temp_name);

        fs::write(temp_path, json)?;
        rename_with_fallback(temp_path, path)?;
        Ok(())
    }
}
