//! System information providers.
//!
//! `SystemInfoProvider` is the seam between command handlers and the machine the bot runs
//! on. `LiveSystemInfo` reads the real values; tests substitute fixed readings.

use serenity::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::{
    error::command::CommandError,
    model::{
        embed::NOT_AVAILABLE,
        system::{OperatingSystemInfo, ResourceUsage, RuntimeInfo, SensorReadings},
    },
};

/// Source of operating system and hardware readings.
///
/// Every call reads fresh values; implementations must not cache.
#[async_trait]
pub trait SystemInfoProvider: Send + Sync {
    fn operating_system(&self) -> OperatingSystemInfo;

    fn runtime(&self) -> RuntimeInfo;

    /// Processor count and memory totals.
    fn resources(&self) -> Result<ResourceUsage, CommandError>;

    /// Human readable uptime of the machine, `None` if it can't be determined.
    async fn system_uptime(&self) -> Option<String>;

    async fn sensors(&self) -> SensorReadings;
}

/// Reads system information from the host the bot is running on.
pub struct LiveSystemInfo {
    /// Mount point of sysfs, where temperature, voltage and fan readings live on Linux.
    sysfs_root: PathBuf,
}

impl LiveSystemInfo {
    pub fn new() -> Self {
        Self {
            sysfs_root: PathBuf::from("/sys"),
        }
    }
}

impl Default for LiveSystemInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemInfoProvider for LiveSystemInfo {
    fn operating_system(&self) -> OperatingSystemInfo {
        OperatingSystemInfo {
            name: sys_info::os_type().unwrap_or_else(|_| std::env::consts::OS.to_string()),
            version: sys_info::os_release().unwrap_or_else(|_| NOT_AVAILABLE.to_string()),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    fn runtime(&self) -> RuntimeInfo {
        RuntimeInfo {
            package: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            target: format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
        }
    }

    fn resources(&self) -> Result<ResourceUsage, CommandError> {
        let memory = sys_info::mem_info().map_err(|e| {
            CommandError::Unexpected(format!("Failed to read memory information: {}", e))
        })?;

        // sys-info reports KiB
        Ok(ResourceUsage {
            cpu_cores: num_cpus::get(),
            max_memory: memory.total * 1024,
            free_memory: memory.avail * 1024,
        })
    }

    async fn system_uptime(&self) -> Option<String> {
        if !cfg!(target_os = "linux") {
            return None;
        }

        let output = match Command::new("uptime").arg("-p").output().await {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to run 'uptime -p': {}", e);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!("'uptime -p' exited with {}", output.status);
            return None;
        }

        first_line(&String::from_utf8_lossy(&output.stdout))
    }

    async fn sensors(&self) -> SensorReadings {
        if !cfg!(target_os = "linux") {
            return SensorReadings::default();
        }

        let root = self.sysfs_root.clone();
        match tokio::task::spawn_blocking(move || read_sensors(&root)).await {
            Ok(readings) => readings,
            Err(e) => {
                tracing::error!("Sensor reading task failed: {}", e);
                SensorReadings::default()
            }
        }
    }
}

/// First non-empty line of `output`, trimmed.
fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// Reads sensor values below a sysfs mount point.
///
/// Missing files yield `0.0` readings and no fans. Temperatures and voltages are stored
/// by the kernel in milli-units.
pub(crate) fn read_sensors(sysfs_root: &Path) -> SensorReadings {
    let hwmon_dirs = sorted_entries(&sysfs_root.join("class/hwmon"));

    let cpu_temperature = read_number(&sysfs_root.join("class/thermal/thermal_zone0/temp"))
        .map(|millidegrees| millidegrees / 1000.0)
        .unwrap_or(0.0);

    let cpu_voltage = hwmon_dirs
        .iter()
        .find_map(|dir| read_number(&dir.join("in0_input")))
        .map(|millivolts| millivolts / 1000.0)
        .unwrap_or(0.0);

    let fan_speeds = hwmon_dirs
        .iter()
        .flat_map(|dir| sorted_entries(dir))
        .filter(|path| is_fan_input(path))
        .filter_map(|path| read_number(&path))
        .map(|rpm| rpm.max(0.0) as u32)
        .collect();

    SensorReadings {
        cpu_temperature,
        cpu_voltage,
        fan_speeds,
    }
}

fn is_fan_input(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with("fan") && name.ends_with("_input"))
        .unwrap_or(false)
}

/// Entries of `dir` in the kernel's numbering order, so `fan10_input` follows
/// `fan9_input` and `hwmon10` follows `hwmon9`.
fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(Result::ok).map(|e| e.path()).collect(),
        Err(_) => Vec::new(),
    };
    entries.sort_by_cached_key(|path| index_key(path));
    entries
}

/// Sort key splitting a file name like `fan12_input` into `("fan", 12, "fan12_input")`.
fn index_key(path: &Path) -> (String, u64, String) {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let prefix: String = name.chars().take_while(|c| !c.is_ascii_digit()).collect();
    let index = name[prefix.len()..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0);

    (prefix, index, name)
}

fn read_number(path: &Path) -> Option<f64> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}
