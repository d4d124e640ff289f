use serde::Deserialize;

/// A single question from the FAQ file.
///
/// The FAQ file maps question ids to entries:
///
/// ```yaml
/// combatlogx-install:
///   plugin: CombatLogX
///   question: How do I install CombatLogX?
///   answer: Put the jar into your plugins folder.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    /// Plugin the question is about, if it is plugin specific.
    #[serde(default)]
    pub plugin: Option<String>,
    pub question: String,
    pub answer: String,
}
