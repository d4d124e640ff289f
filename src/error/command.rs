use thiserror::Error;

use crate::error::faq::FaqError;

/// Errors produced by slash command handlers.
///
/// Every variant carries the message shown to the invoking user. The command registry
/// converts these into an error reply, so they never reach the transport layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The invoker may not run the command where it was invoked.
    ///
    /// Replied to without naming the invoker in the footer.
    #[error("{0}")]
    Forbidden(String),

    /// An argument is missing or has an invalid value.
    #[error("{0}")]
    Validation(String),

    /// A requested key or backing resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A backing resource exists but its content is malformed.
    #[error("{0}")]
    Parse(String),

    /// Any other failure while gathering data.
    #[error("{0}")]
    Unexpected(String),
}

impl CommandError {
    /// Validation error for a required option the invoker didn't supply.
    pub fn missing_argument(name: &str) -> Self {
        Self::Validation(format!("Missing Argument '{}'.", name))
    }

    /// Whether the failure was caused by the invoker rather than the bot.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Forbidden(_) | Self::Validation(_) | Self::NotFound(_)
        )
    }

    /// Whether the error reply should leave out the "Executed by" footer.
    pub fn hides_invoker(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}

impl From<FaqError> for CommandError {
    fn from(err: FaqError) -> Self {
        let message = err.to_string();
        match err {
            FaqError::MissingStore { .. } | FaqError::NotFound { .. } => Self::NotFound(message),
            FaqError::EmptyStore { .. } | FaqError::Parse { .. } => Self::Parse(message),
            FaqError::Io { .. } => Self::Unexpected(message),
        }
    }
}
