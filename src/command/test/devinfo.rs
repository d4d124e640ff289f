use std::sync::Arc;
use test_utils::fixture::{MEMBER_ID, OWNER_ID};

use super::*;
use crate::{
    command::{
        slash::{
            devinfo::{InfoType, GUILD_ONLY, OWNER_ONLY},
            DevInfoCommand,
        },
        SlashCommand,
    },
    model::embed::Embed,
};

fn command(system: FakeSystemInfo) -> DevInfoCommand {
    DevInfoCommand::new(Arc::new(system))
}

/// Runs `/devinfo type:<tag>` as the owner and returns the single embed.
async fn owner_section(system: FakeSystemInfo, tag: &str) -> Embed {
    let ctx = guild_context(OWNER_ID).with_option("type", tag);
    let reply = command(system).execute(&ctx).await.unwrap();

    let embeds = reply.embeds();
    assert_eq!(embeds.len(), 1);
    embeds[0].clone()
}

/// Tests invoking the command from a direct message.
///
/// Expected: Err(Forbidden) with the guild-only message
#[tokio::test]
async fn rejects_direct_messages() {
    let ctx = direct_message_context().with_option("type", "all");

    let err = command(FakeSystemInfo::new()).execute(&ctx).await.unwrap_err();

    assert_eq!(err, CommandError::Forbidden(GUILD_ONLY.to_string()));
}

/// Tests that non-owners are rejected whatever options they pass.
///
/// Expected: Err(Forbidden) with the owner-only message for every option set
#[tokio::test]
async fn rejects_non_owner_regardless_of_options() {
    let devinfo = command(FakeSystemInfo::new());
    let contexts = [
        guild_context(MEMBER_ID),
        guild_context(MEMBER_ID).with_option("type", "all"),
        guild_context(MEMBER_ID).with_option("type", "nonsense"),
    ];

    for ctx in contexts {
        let err = devinfo.execute(&ctx).await.unwrap_err();
        assert_eq!(err, CommandError::Forbidden(OWNER_ONLY.to_string()));
    }
}

/// Tests invoking the command as owner without the `type` option.
///
/// Expected: Err(Validation) naming the missing option
#[tokio::test]
async fn requires_type_option() {
    let err = command(FakeSystemInfo::new())
        .execute(&guild_context(OWNER_ID))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Missing Argument 'type'.");
}

/// Tests an unknown information type.
///
/// Expected: Err(Validation) quoting the lowercased value
#[tokio::test]
async fn rejects_unknown_type_in_lowercase() {
    let ctx = guild_context(OWNER_ID).with_option("type", "GPU");

    let err = command(FakeSystemInfo::new()).execute(&ctx).await.unwrap_err();

    assert_eq!(err.to_string(), "Unknown information type 'gpu'.");
}

/// Tests that `all` returns every section once in the fixed order.
///
/// Expected: six embeds titled in `InfoType::ALL` order, each with the executor footer
#[tokio::test]
async fn all_returns_every_section_in_order() {
    let ctx = guild_context(OWNER_ID).with_option("type", "ALL");

    let reply = command(FakeSystemInfo::new()).execute(&ctx).await.unwrap();

    let titles: Vec<_> = reply
        .embeds()
        .iter()
        .map(|embed| embed.title.as_deref().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Operating System",
            "Bot Information",
            "Runtime Information",
            "Uptime",
            "Resource Information",
            "Sensors",
        ]
    );
    assert!(reply
        .embeds()
        .iter()
        .all(|embed| embed.footer.as_ref().unwrap().text == "Executed by slimefan"));
}

/// Tests that `all` is exactly the concatenation of the single sections.
///
/// Expected: each embed equals the embed returned for its own tag
#[tokio::test]
async fn all_matches_individual_sections() {
    let devinfo = command(FakeSystemInfo::new());
    let ctx = guild_context(OWNER_ID).with_option("type", "all");

    let all = devinfo.execute(&ctx).await.unwrap();

    assert_eq!(all.embeds().len(), InfoType::ALL.len());
    for (embed, info_type) in all.embeds().iter().zip(InfoType::ALL) {
        let ctx = guild_context(OWNER_ID).with_option("type", info_type.tag());
        let single = devinfo.execute(&ctx).await.unwrap();

        assert_eq!(single.embeds(), std::slice::from_ref(embed));
    }
}

/// Tests that each tag maps back to its own section.
///
/// Expected: tag round-trips through `from_tag`
#[test]
fn tags_match_sections() {
    for info_type in InfoType::ALL {
        assert_eq!(InfoType::from_tag(info_type.tag()), Some(info_type));
    }
    assert_eq!(InfoType::from_tag("java"), None);
}

/// Tests the operating system section.
///
/// Expected: inline Name/Version/Arch and the image matching the OS
#[tokio::test]
async fn builds_operating_system_section() {
    let mut system = FakeSystemInfo::new();
    system.os_name = "Windows 11".to_string();

    let embed = owner_section(system, "os").await;

    assert_eq!(embed.title.as_deref(), Some("Operating System"));
    assert_eq!(
        embed.thumbnail.as_deref(),
        Some("http://resources.example/images/windows.png")
    );
    assert_eq!(embed.field_names(), vec!["Name", "Version", "Arch"]);
    assert_eq!(embed.field_value("Name"), Some("Windows 11"));
    assert!(embed.fields.iter().all(|field| field.inline));
}

/// Tests the bot section.
///
/// Expected: identity fields inline, dates in long format and not inline
#[tokio::test]
async fn builds_bot_section() {
    let embed = owner_section(FakeSystemInfo::new(), "bot").await;

    assert_eq!(
        embed.field_names(),
        vec!["Name", "Tag", "ID", "Date Created", "Date Joined"]
    );
    assert_eq!(embed.field_value("Name"), Some("Slimy"));
    assert_eq!(embed.field_value("ID"), Some(BOT_ID.to_string().as_str()));
    assert_eq!(
        embed.field_value("Date Joined"),
        Some("June 01, 2021 12:00:00.000PM UTC")
    );
    assert!(embed.field_value("Date Created").unwrap().ends_with(" UTC"));
    assert!(embed.thumbnail.as_deref().unwrap().contains("b07a"));
    assert!(!embed.fields[3].inline);
    assert!(!embed.fields[4].inline);
}

/// Tests that the join date is shown with its milliseconds.
///
/// Expected: Date Joined ends in `.123PM UTC`
#[tokio::test]
async fn bot_section_shows_join_milliseconds() {
    let user = test_utils::serenity::create_test_user(OWNER_ID, "slimefan", None);
    let member = test_utils::serenity::create_test_member(
        test_utils::fixture::GUILD_ID,
        user,
        Some("2021-06-01T12:00:00.123456+00:00"),
    );
    let ctx = direct_message_context()
        .with_member(Invoker::from(&member))
        .with_option("type", "bot");

    let reply = command(FakeSystemInfo::new()).execute(&ctx).await.unwrap();

    assert_eq!(
        reply.embeds()[0].field_value("Date Joined"),
        Some("June 01, 2021 12:00:00.123PM UTC")
    );
}

/// Tests the bot section for a member whose join date is unknown.
///
/// Expected: Date Joined holds the placeholder
#[tokio::test]
async fn bot_section_without_join_date() {
    let mut member = invoker(OWNER_ID);
    member.joined_at = None;
    let ctx = direct_message_context()
        .with_member(member)
        .with_option("type", "bot");

    let reply = command(FakeSystemInfo::new()).execute(&ctx).await.unwrap();

    assert_eq!(reply.embeds()[0].field_value("Date Joined"), Some("N/A"));
}

/// Tests the runtime section.
///
/// Expected: Package/Version/Target from the provider with the rust image
#[tokio::test]
async fn builds_runtime_section() {
    let embed = owner_section(FakeSystemInfo::new(), "runtime").await;

    assert_eq!(embed.title.as_deref(), Some("Runtime Information"));
    assert_eq!(embed.field_names(), vec!["Package", "Version", "Target"]);
    assert_eq!(embed.field_value("Target"), Some("x86_64-linux"));
    assert_eq!(
        embed.thumbnail.as_deref(),
        Some("http://resources.example/images/rust.png")
    );
}

/// Tests the uptime section.
///
/// Expected: system uptime verbatim, bot uptime formatted from the context times
#[tokio::test]
async fn builds_uptime_section() {
    let embed = owner_section(FakeSystemInfo::new(), "uptime").await;

    assert_eq!(
        embed.field_value("System Uptime"),
        Some("up 3 days, 4 hours")
    );
    assert_eq!(embed.field_value("Bot Uptime"), Some("1d 1h 1m 1s 1ms"));
}

/// Tests the uptime section when the system uptime is unknown and no time has passed.
///
/// Expected: both values are the placeholder
#[tokio::test]
async fn uptime_section_placeholders() {
    let mut system = FakeSystemInfo::new();
    system.system_uptime = None;
    let ctx = InvocationContext::new(bot(), state(), started_at())
        .with_member(invoker(OWNER_ID))
        .with_option("type", "uptime");

    let reply = command(system).execute(&ctx).await.unwrap();

    let embed = &reply.embeds()[0];
    assert_eq!(embed.field_value("System Uptime"), Some("N/A"));
    assert_eq!(embed.field_value("Bot Uptime"), Some("N/A"));
}

/// Tests the resources section.
///
/// Expected: core count and memory totals in mebibytes
#[tokio::test]
async fn builds_resources_section() {
    let embed = owner_section(FakeSystemInfo::new(), "resources").await;

    assert_eq!(
        embed.field_names(),
        vec!["CPU Cores", "Free RAM", "Used RAM", "Max RAM"]
    );
    assert_eq!(embed.field_value("CPU Cores"), Some("8"));
    assert_eq!(embed.field_value("Free RAM"), Some("3072.000 MiB"));
    assert_eq!(embed.field_value("Used RAM"), Some("5120.000 MiB"));
    assert_eq!(embed.field_value("Max RAM"), Some("8192.000 MiB"));
}

/// Tests that a failing provider fails the whole reply.
///
/// Expected: Err(Unexpected) even when other sections succeed
#[tokio::test]
async fn resources_failure_fails_reply() {
    let mut system = FakeSystemInfo::new();
    system.fail_resources = true;
    let ctx = guild_context(OWNER_ID).with_option("type", "all");

    let err = command(system).execute(&ctx).await.unwrap_err();

    assert!(matches!(err, CommandError::Unexpected(_)));
}

/// Tests the sensors section with three fans.
///
/// Expected: temperature, voltage and one numbered field per fan
#[tokio::test]
async fn builds_sensors_section_with_fans() {
    let embed = owner_section(FakeSystemInfo::new(), "temperature").await;

    assert_eq!(
        embed.field_names(),
        vec![
            "CPU Temperature",
            "CPU Voltage",
            "Fan Speed 1",
            "Fan Speed 2",
            "Fan Speed 3",
        ]
    );
    assert_eq!(embed.field_value("CPU Temperature"), Some("45.50\u{00B0}C"));
    assert_eq!(embed.field_value("CPU Voltage"), Some("1.20V"));
    assert_eq!(embed.field_value("Fan Speed 1"), Some("1,234rpm"));
    assert_eq!(embed.field_value("Fan Speed 2"), Some("987rpm"));
    assert_eq!(embed.field_value("Fan Speed 3"), Some("12,000rpm"));
}

/// Tests the sensors section without fans.
///
/// Expected: a single unnumbered Fan Speed placeholder field
#[tokio::test]
async fn builds_sensors_section_without_fans() {
    let mut system = FakeSystemInfo::new();
    system.fan_speeds = Vec::new();

    let embed = owner_section(system, "temperature").await;

    assert_eq!(
        embed.field_names(),
        vec!["CPU Temperature", "CPU Voltage", "Fan Speed"]
    );
    assert_eq!(embed.field_value("Fan Speed"), Some("N/A"));
}
