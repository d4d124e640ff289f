use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test context owning a temporary directory for file-backed stores.
///
/// The directory and everything written into it are removed when the context is dropped,
/// so keep the context alive for as long as the test reads from `questions_path()`.
pub struct TestContext {
    /// Temporary directory holding the test files.
    dir: TempDir,

    /// Path of the FAQ file inside `dir`.
    ///
    /// The file itself only exists if the builder was configured with questions or raw
    /// content; otherwise the path points at a missing file.
    questions_path: PathBuf,
}

impl TestContext {
    /// Creates a context from an already created temporary directory.
    ///
    /// # Arguments
    /// - `dir` - Temporary directory owned by the context
    /// - `file_name` - Name of the FAQ file inside the directory
    ///
    /// # Returns
    /// - New `TestContext` whose `questions_path` points into `dir`
    pub fn new(dir: TempDir, file_name: &str) -> Self {
        let questions_path = dir.path().join(file_name);
        Self {
            dir,
            questions_path,
        }
    }

    /// Path of the FAQ file for this test.
    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    /// Root of the temporary directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
