use std::{
    collections::HashMap,
    io::ErrorKind,
    path::PathBuf,
};

use crate::{error::faq::FaqError, model::faq::FaqEntry};

/// Lookup of FAQ entries in a YAML file.
///
/// The file is read and parsed again on every lookup, so edits to it show up without
/// restarting the bot.
#[derive(Debug, Clone)]
pub struct FaqStore {
    path: PathBuf,
}

impl FaqStore {
    /// Creates a store reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Looks up the entry stored under `id`.
    ///
    /// # Arguments
    /// - `id` - Question id, matched exactly against the mapping keys
    ///
    /// # Returns
    /// - `Ok(FaqEntry)` - The entry for `id`
    /// - `Err(FaqError::MissingStore)` - The file does not exist
    /// - `Err(FaqError::Io)` - The file exists but could not be read
    /// - `Err(FaqError::EmptyStore)` - The file has no content
    /// - `Err(FaqError::Parse)` - The file is not a mapping of ids to entries
    /// - `Err(FaqError::NotFound)` - The file has no entry for `id`
    pub async fn lookup(&self, id: &str) -> Result<FaqEntry, FaqError> {
        let file_name = self.file_name();

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FaqError::MissingStore { file_name });
            }
            Err(e) => {
                return Err(FaqError::Io {
                    file_name,
                    source: e,
                });
            }
        };

        if content.trim().is_empty() {
            return Err(FaqError::EmptyStore { file_name });
        }

        let entries: Option<HashMap<String, FaqEntry>> = serde_yaml::from_str(&content)
            .map_err(|e| FaqError::Parse {
                file_name: file_name.clone(),
                source: e,
            })?;
        let mut entries = entries.ok_or(FaqError::EmptyStore { file_name })?;

        tracing::debug!(
            "Loaded {} FAQ entries from {}",
            entries.len(),
            self.path.display()
        );

        entries.remove(id).ok_or_else(|| FaqError::NotFound { id: id.to_string() })
    }

    /// File name shown to users in error messages.
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
