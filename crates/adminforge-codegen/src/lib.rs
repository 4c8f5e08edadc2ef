//! Admin module emission for adminforge entities.
//!
//! This crate turns one [`Entity`](adminforge_schema::Entity) definition into
//! the files of a generated admin module (TypeScript types, a zod validation
//! schema, a create/edit form component, a package manifest). Emission runs
//! as a pipeline of passes composed through a [`PassManager`]:
//!
//! ```ignore
//! use adminforge_codegen::react;
//!
//! let pipeline = react::admin_module();
//! let files = pipeline.run(&entity)?;
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod pass;
pub mod react;

pub use pass::{GenerationContext, Pass, PassManager};

/// Errors that can occur during emission.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

/// A generated file with its path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path for the generated file.
    pub path: PathBuf,
    /// Content of the generated file.
    pub content: String,
}

impl GeneratedFile {
    /// Creates a new generated file.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The files produced by one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct GeneratedFiles {
    /// The generated files.
    pub files: Vec<GeneratedFile>,
}

impl GeneratedFiles {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file to the result.
    pub fn add(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Looks up a file's content by path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path.to_str() == Some(path))
            .map(|f| f.content.as_str())
    }

    /// Number of generated files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
