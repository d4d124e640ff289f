use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::async_trait;
use std::sync::Arc;
use test_utils::{
    fixture::{BOT_ID, GUILD_ID, OWNER_ID},
    serenity::{create_test_member, create_test_user},
};

use crate::{
    error::command::CommandError,
    model::{
        context::{BotIdentity, InvocationContext, Invoker},
        system::{OperatingSystemInfo, ResourceUsage, RuntimeInfo, SensorReadings},
    },
    service::system::SystemInfoProvider,
    state::BotState,
};

mod devinfo;
mod faq;

pub const RESOURCE_URL: &str = "http://resources.example/images";

/// Time between startup and invocation in test contexts: 1d 1h 1m 1s 1ms.
pub const UPTIME_MILLIS: i64 = 90_061_001;

/// System information provider returning fixed readings.
pub struct FakeSystemInfo {
    pub os_name: String,
    pub system_uptime: Option<String>,
    pub fan_speeds: Vec<u32>,
    pub fail_resources: bool,
}

impl FakeSystemInfo {
    pub fn new() -> Self {
        Self {
            os_name: "Linux".to_string(),
            system_uptime: Some("up 3 days, 4 hours".to_string()),
            fan_speeds: vec![1234, 987, 12000],
            fail_resources: false,
        }
    }
}

#[async_trait]
impl SystemInfoProvider for FakeSystemInfo {
    fn operating_system(&self) -> OperatingSystemInfo {
        OperatingSystemInfo {
            name: self.os_name.clone(),
            version: "6.1.0".to_string(),
            arch: "x86_64".to_string(),
        }
    }

    fn runtime(&self) -> RuntimeInfo {
        RuntimeInfo {
            package: "slimy".to_string(),
            version: "0.1.0".to_string(),
            target: "x86_64-linux".to_string(),
        }
    }

    fn resources(&self) -> Result<ResourceUsage, CommandError> {
        if self.fail_resources {
            return Err(CommandError::Unexpected(
                "Failed to read memory information".to_string(),
            ));
        }

        Ok(ResourceUsage {
            cpu_cores: 8,
            max_memory: 8 * 1024 * 1024 * 1024,
            free_memory: 3 * 1024 * 1024 * 1024,
        })
    }

    async fn system_uptime(&self) -> Option<String> {
        self.system_uptime.clone()
    }

    async fn sensors(&self) -> SensorReadings {
        SensorReadings {
            cpu_temperature: 45.5,
            cpu_voltage: 1.2,
            fan_speeds: self.fan_speeds.clone(),
        }
    }
}

pub fn started_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn state() -> Arc<BotState> {
    Arc::new(BotState {
        owner_id: OWNER_ID,
        started_at: started_at(),
        resource_url: RESOURCE_URL.to_string(),
    })
}

pub fn bot() -> BotIdentity {
    BotIdentity::from(&create_test_user(BOT_ID, "Slimy", Some("b07a")))
}

/// Guild member `id` who joined on June 1st 2021 at noon.
pub fn invoker(id: u64) -> Invoker {
    let user = create_test_user(id, "slimefan", None);
    let member = create_test_member(GUILD_ID, user, Some("2021-06-01T12:00:00.000000+00:00"));
    Invoker::from(&member)
}

/// Context of an invocation outside of a guild.
pub fn direct_message_context() -> InvocationContext {
    InvocationContext::new(
        bot(),
        state(),
        started_at() + Duration::milliseconds(UPTIME_MILLIS),
    )
}

/// Context of an invocation by guild member `id`.
pub fn guild_context(id: u64) -> InvocationContext {
    direct_message_context().with_member(invoker(id))
}
