//! Artifact sinks: where exported documents land.
//!
//! The pipeline writes through this capability rather than a hard-coded
//! path, so it can be exercised without touching the real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportError;

/// Destination for export artifacts
pub trait ArtifactSink {
    /// Write one artifact, returning the path it is addressable under
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError>;
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &S {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        (**self).write(name, bytes)
    }
}

/// Sink writing flat files into a content directory, created if absent.
///
/// Existing files with the same name are overwritten: the artifact is
/// derived data and same-name exports are last-writer-wins.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirectorySink {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        let io_err = |source| ExportError::Io {
            name: name.to_string(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(io_err)?;
        let path = self.root.join(name);
        fs::write(&path, bytes).map_err(io_err)?;
        Ok(path)
    }
}

#[cfg(test)]
pub mod test_support {
    //! In-memory sink for pipeline tests

    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemorySink {
        artifacts: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MemorySink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn take(&self, name: &str) -> Option<Vec<u8>> {
            self.artifacts.borrow().get(name).cloned()
        }

        pub fn len(&self) -> usize {
            self.artifacts.borrow().len()
        }

        pub fn is_empty(&self) -> bool {
            self.artifacts.borrow().is_empty()
        }
    }

    impl ArtifactSink for MemorySink {
        fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
            self.artifacts
                .borrow_mut()
                .insert(name.to_string(), bytes.to_vec());
            Ok(PathBuf::from(name))
        }
    }
}
