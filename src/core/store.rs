//! Inventory store: one YAML file per part under the project's parts directory

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::identity::PartId;
use crate::core::project::Project;
use crate::entities::part::{Part, PartDraft};

/// Durable keyed collection of parts.
///
/// Records are stored as `<id>.yaml` files. Scans return parts ordered by
/// id; since ids are ULIDs this is creation-ordered at millisecond
/// resolution (the low bits are random within one millisecond), and it is
/// the stable iteration order the export pipeline preserves.
pub struct PartStore {
    dir: PathBuf,
}

impl PartStore {
    /// Open the store for a project
    pub fn open(project: &Project) -> Self {
        Self {
            dir: project.parts_dir(),
        }
    }

    /// Open a store rooted at an arbitrary directory
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the record file backing a part
    pub fn file_path(&self, id: PartId) -> PathBuf {
        self.dir.join(format!("{}.yaml", id))
    }

    /// Insert a new part, assigning its id and registration date
    pub fn insert(&self, draft: PartDraft) -> Result<Part, StoreError> {
        let part = Part::from_draft(draft, PartId::new(), chrono::Local::now().date_naive());
        self.write(&part)?;
        Ok(part)
    }

    /// Load all parts, ordered by id (creation-ordered at millisecond resolution)
    pub fn fetch_all(&self) -> Result<Vec<Part>, StoreError> {
        let mut parts = Vec::new();

        if !self.dir.exists() {
            return Ok(parts);
        }

        for entry in walkdir::WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|x| x == "yaml"))
        {
            let content = fs::read_to_string(entry.path())?;
            let part: Part = serde_yml::from_str(&content)
                .map_err(|e| StoreError::Parse(entry.path().display().to_string(), e.to_string()))?;
            parts.push(part);
        }

        parts.sort_by_key(|p| p.id);
        Ok(parts)
    }

    /// Load a single part by id
    pub fn get(&self, id: PartId) -> Result<Part, StoreError> {
        let path = self.file_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        let content = fs::read_to_string(&path)?;
        let part = serde_yml::from_str(&content)
            .map_err(|e| StoreError::Parse(path.display().to_string(), e.to_string()))?;
        Ok(part)
    }

    /// Check whether a part exists
    pub fn exists(&self, id: PartId) -> bool {
        self.file_path(id).exists()
    }

    /// Replace the mutable fields of an existing part.
    ///
    /// The id and registration date of the stored record are preserved.
    pub fn update(&self, id: PartId, draft: PartDraft) -> Result<Part, StoreError> {
        let existing = self.get(id)?;
        let updated = Part::from_draft(draft, existing.id, existing.registration_date);
        self.write(&updated)?;
        Ok(updated)
    }

    /// Delete a part by id
    pub fn delete(&self, id: PartId) -> Result<(), StoreError> {
        let path = self.file_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        fs::remove_file(&path)?;
        Ok(())
    }

    /// Count parts grouped by category
    pub fn count_by_category(&self) -> Result<BTreeMap<String, usize>, StoreError> {
        let mut counts = BTreeMap::new();
        for part in self.fetch_all()? {
            *counts.entry(part.category).or_insert(0) += 1;
        }
        Ok(counts)
    }

    fn write(&self, part: &Part) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let yaml = serde_yml::to_string(part)
            .map_err(|e| StoreError::Parse(part.id.to_string(), e.to_string()))?;
        fs::write(self.file_path(part.id), yaml)?;
        Ok(())
    }
}

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no part found with id {0}")]
    NotFound(PartId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    Parse(String, String),
}
