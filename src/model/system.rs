/// Operating system identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingSystemInfo {
    pub name: String,
    pub version: String,
    pub arch: String,
}

impl OperatingSystemInfo {
    /// File name of the thumbnail image matching this operating system.
    pub fn image_name(&self) -> &'static str {
        let name = self.name.to_lowercase();
        if name.contains("windows") {
            "windows.png"
        } else if name.contains("mac os") || name.contains("darwin") || name.contains("macos") {
            "apple.png"
        } else {
            "linux.png"
        }
    }
}

/// Description of the running bot binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub package: String,
    pub version: String,
    pub target: String,
}

/// Processor count and memory totals, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceUsage {
    pub cpu_cores: usize,
    pub max_memory: u64,
    pub free_memory: u64,
}

impl ResourceUsage {
    /// Memory in use, never underflowing if a provider reports more free than max.
    pub fn used_memory(&self) -> u64 {
        self.max_memory.saturating_sub(self.free_memory)
    }
}

/// Hardware sensor readings.
///
/// Providers report `0.0` for readings the hardware doesn't expose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorReadings {
    /// CPU temperature in degrees Celsius.
    pub cpu_temperature: f64,
    /// CPU voltage in volts.
    pub cpu_voltage: f64,
    /// Fan speeds in rpm, one entry per fan.
    pub fan_speeds: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(name: &str) -> OperatingSystemInfo {
        OperatingSystemInfo {
            name: name.to_string(),
            version: "1".to_string(),
            arch: "x86_64".to_string(),
        }
    }

    #[test]
    fn picks_image_by_os_name() {
        assert_eq!(os("Windows 10").image_name(), "windows.png");
        assert_eq!(os("Mac OS X").image_name(), "apple.png");
        assert_eq!(os("Darwin").image_name(), "apple.png");
        assert_eq!(os("Linux").image_name(), "linux.png");
        assert_eq!(os("FreeBSD").image_name(), "linux.png");
    }

    #[test]
    fn used_memory_saturates() {
        let usage = ResourceUsage {
            cpu_cores: 4,
            max_memory: 100,
            free_memory: 150,
        };
        assert_eq!(usage.used_memory(), 0);
    }
}
