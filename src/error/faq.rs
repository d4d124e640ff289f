use thiserror::Error;

/// Failures of a FAQ file lookup.
///
/// The display strings are shown to Discord users verbatim, so they name the file
/// rather than its full path.
#[derive(Error, Debug)]
pub enum FaqError {
    /// The FAQ file does not exist.
    #[error("'{file_name}' does not exist!")]
    MissingStore { file_name: String },

    /// The FAQ file exists but could not be read.
    #[error("Failed to read '{file_name}': {source}")]
    Io {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The FAQ file is empty or only contains a null document.
    #[error("Invalid YAML configuration in '{file_name}'.")]
    EmptyStore { file_name: String },

    /// The FAQ file is not a valid mapping of question ids to entries.
    #[error("Invalid YAML configuration in '{file_name}'.")]
    Parse {
        file_name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The FAQ file is valid but has no entry for the requested id.
    #[error("Could not find a solution with id '{id}'.")]
    NotFound { id: String },
}
