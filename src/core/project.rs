//! Project discovery and structure

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding one YAML file per part
pub const PARTS_DIR: &str = "parts";

/// Content directory for exported CSV artifacts (flat, no index)
pub const DATA_LAKE_DIR: &str = "data-lake";

/// Represents a partstock project
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (parent of .partstock/)
    root: PathBuf,
}

impl Project {
    /// Find project root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current =
            std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find project root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, ProjectError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        loop {
            let marker = current.join(".partstock");
            if marker.is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(ProjectError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new project structure at the given path
    pub fn init(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let marker = root.join(".partstock");
        if marker.exists() {
            return Err(ProjectError::AlreadyExists(root.clone()));
        }

        Self::create_structure(&root)
    }

    /// Force initialization even if .partstock/ exists
    pub fn init_force(path: &Path) -> Result<Self, ProjectError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::create_structure(&root)
    }

    fn create_structure(root: &Path) -> Result<Self, ProjectError> {
        let marker = root.join(".partstock");
        std::fs::create_dir_all(&marker).map_err(|e| ProjectError::IoError(e.to_string()))?;

        let config_path = marker.join("config.yaml");
        std::fs::write(&config_path, Self::default_config())
            .map_err(|e| ProjectError::IoError(e.to_string()))?;

        for dir in [PARTS_DIR, DATA_LAKE_DIR] {
            std::fs::create_dir_all(root.join(dir))
                .map_err(|e| ProjectError::IoError(e.to_string()))?;
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    fn default_config() -> &'static str {
        r#"# partstock project configuration

# Editor to use for `partstock part edit` (default: $EDITOR)
# editor: ""

# Default output format (auto, yaml, json, tsv, csv, id)
# default_format: auto
"#
    }

    /// Get the project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the .partstock configuration directory
    pub fn partstock_dir(&self) -> PathBuf {
        self.root.join(".partstock")
    }

    /// Get the directory holding part records
    pub fn parts_dir(&self) -> PathBuf {
        self.root.join(PARTS_DIR)
    }

    /// Get the content directory for exported artifacts
    pub fn data_lake_dir(&self) -> PathBuf {
        self.root.join(DATA_LAKE_DIR)
    }
}

/// Errors that can occur during project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("not a partstock project (searched from {searched_from:?}). Run 'partstock init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("partstock project already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}
