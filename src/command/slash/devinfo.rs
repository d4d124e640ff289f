//! `/devinfo` - information about the host and the bot for the bot owner.
//!
//! The `type` option selects one section; `all` returns every section as separate
//! embeds in `InfoType::ALL` order.

use serenity::async_trait;
use std::sync::Arc;

use crate::{
    command::{CommandSchema, OptionSchema, SlashCommand},
    error::command::CommandError,
    model::{
        context::{BotIdentity, InvocationContext, Invoker},
        embed::{Embed, Reply, NOT_AVAILABLE},
        system::{OperatingSystemInfo, ResourceUsage, RuntimeInfo, SensorReadings},
    },
    service::system::SystemInfoProvider,
    state::BotState,
    util::format::{
        format_decimal, format_duration, format_thousands, format_timestamp, to_mebibytes,
    },
};

pub const GUILD_ONLY: &str = "This command can only be executed in a guild.";
pub const OWNER_ONLY: &str = "This command can only be executed by the bot owner.";

/// Option value requesting every section.
const ALL_TAG: &str = "all";

/// A section of the `/devinfo` reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    OperatingSystem,
    Bot,
    Runtime,
    Uptime,
    Resources,
    Sensors,
}

impl InfoType {
    /// Every section, in the order used for `all`.
    pub const ALL: [InfoType; 6] = [
        InfoType::OperatingSystem,
        InfoType::Bot,
        InfoType::Runtime,
        InfoType::Uptime,
        InfoType::Resources,
        InfoType::Sensors,
    ];

    /// Parses a lowercase option value.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "os" => Some(InfoType::OperatingSystem),
            "bot" => Some(InfoType::Bot),
            "runtime" => Some(InfoType::Runtime),
            "uptime" => Some(InfoType::Uptime),
            "resources" => Some(InfoType::Resources),
            "temperature" => Some(InfoType::Sensors),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            InfoType::OperatingSystem => "os",
            InfoType::Bot => "bot",
            InfoType::Runtime => "runtime",
            InfoType::Uptime => "uptime",
            InfoType::Resources => "resources",
            InfoType::Sensors => "temperature",
        }
    }
}

/// Sections requested through the `type` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoRequest {
    All,
    Single(InfoType),
}

impl InfoRequest {
    /// Parses the `type` option, ignoring case.
    ///
    /// # Returns
    /// - `Ok(InfoRequest)` - `all` or a known section tag
    /// - `Err(CommandError::Validation)` - Unknown tag, reported in lowercase
    pub fn parse(value: &str) -> Result<Self, CommandError> {
        let tag = value.to_lowercase();
        if tag == ALL_TAG {
            return Ok(InfoRequest::All);
        }

        InfoType::from_tag(&tag)
            .map(InfoRequest::Single)
            .ok_or_else(|| {
                CommandError::Validation(format!("Unknown information type '{}'.", tag))
            })
    }

    pub fn sections(self) -> Vec<InfoType> {
        match self {
            InfoRequest::All => InfoType::ALL.to_vec(),
            InfoRequest::Single(info_type) => vec![info_type],
        }
    }
}

pub struct DevInfoCommand {
    system: Arc<dyn SystemInfoProvider>,
}

impl DevInfoCommand {
    pub fn new(system: Arc<dyn SystemInfoProvider>) -> Self {
        Self { system }
    }

    /// Gathers the data for one section and builds its embed.
    async fn build_section(
        &self,
        info_type: InfoType,
        ctx: &InvocationContext,
        member: &Invoker,
    ) -> Result<Embed, CommandError> {
        let embed = match info_type {
            InfoType::OperatingSystem => {
                operating_system_embed(member, &ctx.state, &self.system.operating_system())
            }
            InfoType::Bot => bot_embed(member, &ctx.bot),
            InfoType::Runtime => runtime_embed(member, &ctx.state, &self.system.runtime()),
            InfoType::Uptime => {
                let system_uptime = self.system.system_uptime().await;
                uptime_embed(member, system_uptime, ctx.bot_uptime_millis())
            }
            InfoType::Resources => {
                resources_embed(member, &ctx.state, &self.system.resources()?)
            }
            InfoType::Sensors => sensors_embed(member, &self.system.sensors().await),
        };

        Ok(embed)
    }
}

#[async_trait]
impl SlashCommand for DevInfoCommand {
    fn name(&self) -> &'static str {
        "devinfo"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new(
            self.name(),
            "View information for developers and bot owners.",
        )
        .option(OptionSchema::string(
            "type",
            "What type of information do you need?",
            false,
        ))
    }

    fn is_ephemeral(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: &InvocationContext) -> Result<Reply, CommandError> {
        let member = ctx
            .member
            .as_ref()
            .ok_or_else(|| CommandError::Forbidden(GUILD_ONLY.to_string()))?;

        if member.id != ctx.state.owner_id {
            return Err(CommandError::Forbidden(OWNER_ONLY.to_string()));
        }

        let value = ctx
            .option("type")
            .ok_or_else(|| CommandError::missing_argument("type"))?;
        let request = InfoRequest::parse(value)?;

        let sections = request.sections();
        let mut embeds = Vec::with_capacity(sections.len());
        for info_type in sections {
            tracing::debug!("Building devinfo section '{}'", info_type.tag());
            embeds.push(self.build_section(info_type, ctx, member).await?);
        }

        Ok(Reply::Success(embeds))
    }
}

pub fn operating_system_embed(
    member: &Invoker,
    state: &BotState,
    os: &OperatingSystemInfo,
) -> Embed {
    Embed::executed_by(Some(member))
        .title("Operating System")
        .thumbnail(state.image_url(os.image_name()))
        .field("Name", &os.name, true)
        .field("Version", &os.version, true)
        .field("Arch", &os.arch, true)
}

pub fn bot_embed(member: &Invoker, bot: &BotIdentity) -> Embed {
    let date_joined = member
        .joined_at
        .map(format_timestamp)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Embed::executed_by(Some(member))
        .title("Bot Information")
        .thumbnail(&bot.avatar_url)
        .field("Name", &bot.name, true)
        .field("Tag", &bot.tag, true)
        .field("ID", bot.id.to_string(), true)
        .field("Date Created", format_timestamp(bot.created_at), false)
        .field("Date Joined", date_joined, false)
}

pub fn runtime_embed(member: &Invoker, state: &BotState, runtime: &RuntimeInfo) -> Embed {
    Embed::executed_by(Some(member))
        .title("Runtime Information")
        .thumbnail(state.image_url("rust.png"))
        .field("Package", &runtime.package, true)
        .field("Version", &runtime.version, true)
        .field("Target", &runtime.target, true)
}

pub fn uptime_embed(member: &Invoker, system_uptime: Option<String>, bot_uptime_millis: u64) -> Embed {
    let bot_uptime = match format_duration(bot_uptime_millis) {
        formatted if formatted.is_empty() => NOT_AVAILABLE.to_string(),
        formatted => formatted,
    };

    Embed::executed_by(Some(member))
        .title("Uptime")
        .field(
            "System Uptime",
            system_uptime.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            false,
        )
        .field("Bot Uptime", bot_uptime, false)
}

pub fn resources_embed(member: &Invoker, state: &BotState, usage: &ResourceUsage) -> Embed {
    Embed::executed_by(Some(member))
        .title("Resource Information")
        .thumbnail(state.image_url("cpu.png"))
        .field("CPU Cores", usage.cpu_cores.to_string(), true)
        .field("Free RAM", to_mebibytes(usage.free_memory as f64), true)
        .field("Used RAM", to_mebibytes(usage.used_memory() as f64), true)
        .field("Max RAM", to_mebibytes(usage.max_memory as f64), true)
}

/// Builds the sensors embed.
///
/// Fans are numbered from 1 in the order reported. Without any fan a single `Fan Speed`
/// field holds the placeholder.
pub fn sensors_embed(member: &Invoker, readings: &SensorReadings) -> Embed {
    let embed = Embed::executed_by(Some(member))
        .title("Sensors")
        .field(
            "CPU Temperature",
            format_decimal(readings.cpu_temperature, "\u{00B0}C"),
            false,
        )
        .field("CPU Voltage", format_decimal(readings.cpu_voltage, "V"), false);

    if readings.fan_speeds.is_empty() {
        return embed.field("Fan Speed", NOT_AVAILABLE, false);
    }

    readings
        .fan_speeds
        .iter()
        .enumerate()
        .fold(embed, |embed, (index, rpm)| {
            embed.field(
                format!("Fan Speed {}", index + 1),
                format!("{}rpm", format_thousands(u64::from(*rpm))),
                false,
            )
        })
}
