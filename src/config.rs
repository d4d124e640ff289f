use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_QUESTIONS_PATH: &str = "questions.yml";
const DEFAULT_RESOURCE_URL: &str = "http://resources.sirblobman.xyz/slimy_bot/images";

pub struct Config {
    pub discord_bot_token: String,
    pub bot_owner_id: u64,

    pub questions_path: PathBuf,
    pub resource_url: String,
}

impl Config {
    /// Loads the configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Loads the configuration using `lookup` to resolve variable names.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `BOT_OWNER_ID` is not a Discord id
    pub fn from_source<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let owner_id = require("BOT_OWNER_ID")?;
        let bot_owner_id = owner_id
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BOT_OWNER_ID".to_string(),
                value: owner_id.clone(),
            })?;

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            bot_owner_id,
            questions_path: lookup("QUESTIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_QUESTIONS_PATH)),
            resource_url: lookup("RESOURCE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_RESOURCE_URL.to_string()),
        })
    }
}
