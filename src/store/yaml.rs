//! YAML file backed quiz store

use crate::error::QuizError;
use crate::store::memory::MemoryStore;
use crate::store::schema::validate_against_schema;
use crate::store::{Quiz, QuizId, QuizStore};
use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk layout of the store file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFile {
    pub quizzes: Vec<Quiz>,
}

/// Load and validate the quizzes of a store file
///
/// # Errors
///
/// Returns [`QuizError::Storage`] if the file cannot be read, is not YAML,
/// or violates the schema, and [`QuizError::Validation`] on duplicate ids
pub fn load_quizzes(system: &dyn System, path: &Path) -> Result<Vec<Quiz>, QuizError> {
    let content = system.read_to_string(path).map_err(|e| {
        return QuizError::storage(format!(
            "Failed to read store file {}: {e}",
            path.display()
        ));
    })?;

    // Parse YAML into a generic document first so the schema sees the raw values
    let document: serde_json::Value = serde_yaml::from_str(&content).map_err(|e| {
        return QuizError::storage(format!(
            "Failed to parse YAML in store file {}: {e}",
            path.display()
        ));
    })?;

    validate_against_schema(&document)?;

    let file: StoreFile = serde_json::from_value(document).map_err(|e| {
        return QuizError::storage(format!(
            "Failed to read quizzes from {}: {e}",
            path.display()
        ));
    })?;

    Ok(file.quizzes)
}

/// Quiz store persisted to a YAML file after every change
///
/// Changes are applied to a copy first and only become visible once the
/// file has been written, so a failed write leaves the store unchanged.
pub struct YamlStore<'sys> {
    system: &'sys dyn System,
    path: PathBuf,
    inner: MemoryStore,
}

impl<'sys> YamlStore<'sys> {
    /// Open the store file at `path`
    ///
    /// A missing file yields a fresh store (seeded with the sample quizzes
    /// when `seed` is set); it is created on the first change.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path exists but is not a file
    /// - The file cannot be read or parsed
    /// - The file content is invalid
    pub fn open<P: Into<PathBuf>>(
        system: &'sys dyn System,
        path: P,
        seed: bool,
    ) -> Result<Self, QuizError> {
        let path = path.into();

        let inner = if system.is_file(&path) {
            let quizzes = load_quizzes(system, &path)?;
            info!("Loaded {} quizzes from {}", quizzes.len(), path.display());
            MemoryStore::from_quizzes(quizzes)?
        } else if system.exists(&path) {
            return Err(QuizError::storage(format!(
                "Store path is not a file: {}",
                path.display()
            )));
        } else if seed {
            debug!("No store file at {}, starting with samples", path.display());
            MemoryStore::seeded()
        } else {
            debug!("No store file at {}, starting empty", path.display());
            MemoryStore::new()
        };

        Ok(Self {
            system,
            path,
            inner,
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, store: &MemoryStore) -> Result<(), QuizError> {
        let file = StoreFile {
            quizzes: store.get_all(),
        };
        let content = serde_yaml::to_string(&file)
            .map_err(|e| QuizError::storage(format!("Failed to serialize quizzes: {e}")))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            self.system.create_dir_all(parent).map_err(|e| {
                return QuizError::storage(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ));
            })?;
        }

        self.system
            .write(&self.path, content.as_bytes())
            .map_err(|e| {
                return QuizError::storage(format!(
                    "Failed to write store file {}: {e}",
                    self.path.display()
                ));
            })?;

        debug!("Saved {} quizzes to {}", file.quizzes.len(), self.path.display());
        Ok(())
    }

    fn commit<T, F>(&mut self, change: F) -> Result<T, QuizError>
    where
        F: FnOnce(&mut MemoryStore) -> Result<T, QuizError>,
    {
        let mut next = self.inner.clone();
        let value = change(&mut next)?;
        self.persist(&next)?;
        self.inner = next;
        Ok(value)
    }
}

impl QuizStore for YamlStore<'_> {
    fn get_all(&self) -> Vec<Quiz> {
        self.inner.get_all()
    }

    fn get_by_id(&self, id: QuizId) -> Result<Quiz, QuizError> {
        self.inner.get_by_id(id)
    }

    fn add(&mut self, question: &str, answer: &str) -> Result<Quiz, QuizError> {
        self.commit(|store| store.add(question, answer))
    }

    fn update(&mut self, id: QuizId, question: &str, answer: &str) -> Result<Quiz, QuizError> {
        self.commit(|store| store.update(id, question, answer))
    }

    fn delete_by_id(&mut self, id: QuizId) -> Result<Quiz, QuizError> {
        self.commit(|store| store.delete_by_id(id))
    }
}
