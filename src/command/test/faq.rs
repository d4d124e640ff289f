use test_utils::{builder::TestBuilder, fixture, fixture::MEMBER_ID};

use super::*;
use crate::{
    command::{slash::FaqCommand, SlashCommand},
    model::embed::COLOR_GREEN,
    service::faq::FaqStore,
};

/// Tests invoking the command without an id.
///
/// Expected: Err(Validation) naming the missing option
#[tokio::test]
async fn requires_id_option() {
    let test = TestBuilder::new().build().unwrap();
    let faq = FaqCommand::new(FaqStore::new(test.questions_path()));

    let err = faq.execute(&guild_context(MEMBER_ID)).await.unwrap_err();

    assert_eq!(err, CommandError::missing_argument("id"));
}

/// Tests answering a plugin question.
///
/// Expected: green FAQ embed with Plugin, Question and Answer fields
#[tokio::test]
async fn answers_plugin_question() {
    let test = TestBuilder::new()
        .with_raw_content(fixture::QUESTIONS_YAML)
        .build()
        .unwrap();
    let faq = FaqCommand::new(FaqStore::new(test.questions_path()));
    let ctx = guild_context(MEMBER_ID).with_option("id", "combatlogx-install");

    let reply = faq.execute(&ctx).await.unwrap();

    let embed = &reply.embeds()[0];
    assert_eq!(embed.title.as_deref(), Some("FAQ"));
    assert_eq!(embed.color, Some(COLOR_GREEN));
    assert_eq!(
        embed.description.as_deref(),
        Some("Question ID: combatlogx-install")
    );
    assert_eq!(embed.field_names(), vec!["Plugin", "Question", "Answer"]);
    assert_eq!(embed.field_value("Plugin"), Some("CombatLogX"));
    assert!(embed.fields.iter().all(|field| !field.inline));
    assert_eq!(
        embed.footer.as_ref().map(|footer| footer.text.as_str()),
        Some("Executed by slimefan")
    );
}

/// Tests answering a question without a plugin, invoked from a direct message.
///
/// Expected: no Plugin field and no footer
#[tokio::test]
async fn omits_plugin_field_when_unset() {
    let test = TestBuilder::new()
        .with_raw_content(fixture::QUESTIONS_YAML)
        .build()
        .unwrap();
    let faq = FaqCommand::new(FaqStore::new(test.questions_path()));
    let ctx = direct_message_context().with_option("id", "support-hours");

    let reply = faq.execute(&ctx).await.unwrap();

    let embed = &reply.embeds()[0];
    assert_eq!(embed.field_names(), vec!["Question", "Answer"]);
    assert_eq!(embed.footer, None);
}

/// Tests asking for an id that isn't in the file.
///
/// Expected: Err(NotFound) whose message contains the id
#[tokio::test]
async fn reports_unknown_id() {
    let test = TestBuilder::new()
        .with_raw_content(fixture::QUESTIONS_YAML)
        .build()
        .unwrap();
    let faq = FaqCommand::new(FaqStore::new(test.questions_path()));
    let ctx = guild_context(MEMBER_ID).with_option("id", "how-to-fly");

    let err = faq.execute(&ctx).await.unwrap_err();

    assert!(matches!(err, CommandError::NotFound(_)));
    assert!(err.to_string().contains("how-to-fly"));
}

/// Tests asking a question when the FAQ file is missing.
///
/// Expected: Err(NotFound) naming the file
#[tokio::test]
async fn reports_missing_file() {
    let test = TestBuilder::new().build().unwrap();
    let faq = FaqCommand::new(FaqStore::new(test.questions_path()));
    let ctx = guild_context(MEMBER_ID).with_option("id", "support-hours");

    let err = faq.execute(&ctx).await.unwrap_err();

    assert_eq!(err.to_string(), "'questions.yml' does not exist!");
}

/// Tests asking a question when the FAQ file is malformed.
///
/// Expected: Err(Parse) naming the file
#[tokio::test]
async fn reports_malformed_file() {
    let test = TestBuilder::new()
        .with_raw_content(fixture::MALFORMED_YAML)
        .build()
        .unwrap();
    let faq = FaqCommand::new(FaqStore::new(test.questions_path()));
    let ctx = guild_context(MEMBER_ID).with_option("id", "support-hours");

    let err = faq.execute(&ctx).await.unwrap_err();

    assert!(matches!(err, CommandError::Parse(_)));
    assert_eq!(
        err.to_string(),
        "Invalid YAML configuration in 'questions.yml'."
    );
}
