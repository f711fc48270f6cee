use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Used when `CONFIG_FILE` is unset. Missing file means built-in defaults.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub interfaces: InterfacesConfig,
    #[serde(default)]
    pub probes: ProbesConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    /// SSD1306 128x32 panel on an I2C bus.
    Oled,
    /// Headless: committed frames go to the log.
    Log,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub kind: DisplayKind,
    pub i2c_bus: String,
    /// 7-bit bus address; SSD1306 modules answer on 0x3C or 0x3D.
    pub i2c_address: u8,
    /// Vertical pixels per text row.
    pub line_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            kind: DisplayKind::Oled,
            i2c_bus: "/dev/i2c-1".into(),
            i2c_address: 0x3C,
            line_height: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterfacesConfig {
    pub wired: String,
    pub wireless: String,
}

impl Default for InterfacesConfig {
    fn default() -> Self {
        Self {
            wired: "eth0".into(),
            wireless: "wlan0".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbesConfig {
    pub ping_program: String,
    pub ping_target: String,
    pub ping_timeout_secs: u64,
    /// Program + args; stdout is the SSID.
    pub ssid_command: Vec<String>,
    /// Program + args; the interface name is appended.
    pub ipv6_command: Vec<String>,
    /// Text file holding milli-degrees Celsius.
    pub thermal_path: PathBuf,
}

impl Default for ProbesConfig {
    fn default() -> Self {
        Self {
            ping_program: "ping".into(),
            ping_target: "8.8.8.8".into(),
            ping_timeout_secs: 1,
            ssid_command: vec!["iwgetid".into(), "-r".into()],
            ipv6_command: vec!["ip".into(), "-6".into(), "addr".into(), "show".into()],
            thermal_path: PathBuf::from("/sys/class/thermal/thermal_zone0/temp"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Sleep between cycles; collection time is not subtracted.
    pub interval_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = std::env::var_os("CONFIG_FILE") {
            return Self::load_from_path(Path::new(&path));
        }
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            return Self::load_from_path(path);
        }
        tracing::debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::load_from_str(&s).with_context(|| format!("loading config {}", path.display()))
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.display.i2c_bus.is_empty(),
            "display.i2c_bus must be non-empty"
        );
        anyhow::ensure!(
            self.display.i2c_address <= 0x7F,
            "display.i2c_address must be a 7-bit address, got {:#04x}",
            self.display.i2c_address
        );
        anyhow::ensure!(
            self.display.line_height > 0,
            "display.line_height must be > 0, got {}",
            self.display.line_height
        );
        anyhow::ensure!(
            !self.interfaces.wired.is_empty(),
            "interfaces.wired must be non-empty"
        );
        anyhow::ensure!(
            !self.interfaces.wireless.is_empty(),
            "interfaces.wireless must be non-empty"
        );
        anyhow::ensure!(
            !self.probes.ping_program.is_empty(),
            "probes.ping_program must be non-empty"
        );
        anyhow::ensure!(
            !self.probes.ping_target.is_empty(),
            "probes.ping_target must be non-empty"
        );
        anyhow::ensure!(
            self.probes.ping_timeout_secs > 0,
            "probes.ping_timeout_secs must be > 0, got {}",
            self.probes.ping_timeout_secs
        );
        anyhow::ensure!(
            self.probes.ssid_command.first().is_some_and(|p| !p.is_empty()),
            "probes.ssid_command must name a program"
        );
        anyhow::ensure!(
            self.probes.ipv6_command.first().is_some_and(|p| !p.is_empty()),
            "probes.ipv6_command must name a program"
        );
        anyhow::ensure!(
            !self.probes.thermal_path.as_os_str().is_empty(),
            "probes.thermal_path must be non-empty"
        );
        anyhow::ensure!(
            self.render.interval_secs > 0,
            "render.interval_secs must be > 0, got {}",
            self.render.interval_secs
        );
        Ok(())
    }
}
