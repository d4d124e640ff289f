use std::collections::BTreeMap;

use serde::Serialize;

use crate::{context::TestContext, error::TestError};

/// Default name of the FAQ file written by the builder.
pub const QUESTIONS_FILE_NAME: &str = "questions.yml";

/// A single question as written to the YAML file.
#[derive(Serialize)]
struct QuestionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    plugin: Option<String>,
    question: String,
    answer: String,
}

/// Content written to the FAQ file when the context is built.
enum Content {
    /// Don't create the file at all.
    Missing,
    /// Serialize the configured questions.
    Questions(BTreeMap<String, QuestionRecord>),
    /// Write the given text verbatim, used for malformed files.
    Raw(String),
}

/// Builder for creating test contexts with a customizable FAQ file.
///
/// Provides a fluent interface for configuring the `questions.yml` file used by FAQ
/// lookups. By default no file is written, which lets tests exercise the missing store
/// path. Adding questions or raw content causes the file to be created on `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_question("install", Some("CombatLogX"), "How do I install it?", "Drop the jar.")
///     .build()?;
/// ```
pub struct TestBuilder {
    file_name: String,
    content: Content,
}

impl TestBuilder {
    /// Creates a new test builder that writes no FAQ file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with the default file name
    pub fn new() -> Self {
        Self {
            file_name: QUESTIONS_FILE_NAME.to_string(),
            content: Content::Missing,
        }
    }

    /// Overrides the name of the FAQ file inside the temporary directory.
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    /// Adds a question to the FAQ file.
    ///
    /// Calling this after `with_raw_content()` discards the raw content.
    ///
    /// # Arguments
    /// - `id` - Question id used as the mapping key
    /// - `plugin` - Optional owning plugin name
    /// - `question` - Question text
    /// - `answer` - Answer text
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_question(
        mut self,
        id: &str,
        plugin: Option<&str>,
        question: &str,
        answer: &str,
    ) -> Self {
        let record = QuestionRecord {
            plugin: plugin.map(str::to_string),
            question: question.to_string(),
            answer: answer.to_string(),
        };

        match &mut self.content {
            Content::Questions(questions) => {
                questions.insert(id.to_string(), record);
            }
            _ => {
                let mut questions = BTreeMap::new();
                questions.insert(id.to_string(), record);
                self.content = Content::Questions(questions);
            }
        }

        self
    }

    /// Writes the given text as the FAQ file, replacing any configured questions.
    pub fn with_raw_content(mut self, content: &str) -> Self {
        self.content = Content::Raw(content.to_string());
        self
    }

    /// Creates the temporary directory and writes the configured FAQ file.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    /// - `Err(TestError::Yaml)` - Failed to serialize the configured questions
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;
        let context = TestContext::new(dir, &self.file_name);

        match self.content {
            Content::Missing => {}
            Content::Questions(questions) => {
                let yaml = serde_yaml::to_string(&questions)?;
                std::fs::write(context.questions_path(), yaml)?;
            }
            Content::Raw(raw) => {
                std::fs::write(context.questions_path(), raw)?;
            }
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
