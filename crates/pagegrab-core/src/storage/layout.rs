//! Fixed destination layout: `<root>/index.html` plus flat `css/`, `js/`, `images/`.

use crate::error::RunError;
use crate::extract::AssetCategory;
use std::fs;
use std::path::{Path, PathBuf};

/// Constant subfolder under the user's Downloads directory.
pub const OUTPUT_DIR_NAME: &str = "website_download";

/// Filename of the saved page.
pub const INDEX_FILE: &str = "index.html";

/// Where a run writes its files. Not configurable by users; tests point it at a temp dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<home>/Downloads/website_download`. Falls back to the current directory
    /// when no home directory can be determined.
    pub fn default_location() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join("Downloads").join(OUTPUT_DIR_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Flat per-category directory; created lazily by the first saved asset.
    pub fn category_dir(&self, category: AssetCategory) -> PathBuf {
        self.root.join(category.dir_name())
    }
}

/// Writes `content` to `path` byte for byte, creating parent directories and
/// overwriting any existing file.
pub fn save_text(content: &[u8], path: &Path) -> Result<(), RunError> {
    let storage_err = |source| RunError::Storage {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(storage_err)?;
    }
    fs::write(path, content).map_err(storage_err)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "saved page file");
    Ok(())
}
