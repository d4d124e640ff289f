use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing the FAQ file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing the configured questions to YAML failed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
