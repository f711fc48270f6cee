// Host fact collectors: interface addresses, Wi-Fi, reachability, CPU temperature

mod linux;
mod probe;

pub use linux::{parse_global_ipv6, parse_millidegrees};

use crate::config::ProbesConfig;
use crate::models::{InternetStatus, SSID_UNAVAILABLE};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;
use tracing::instrument;

/// Fatal collector failures. Only the thermal sensor can produce one; every
/// other collector degrades to an absent/fallback value instead.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    #[error("reading thermal sensor {}: {source}", path.display())]
    ThermalRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "thermal sensor {} holds {content:?}, expected milli-degrees: {source}",
        path.display()
    )]
    ThermalParse {
        path: PathBuf,
        content: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Source of the facts shown on the status screen.
#[allow(async_fn_in_trait)]
pub trait FactSource {
    /// IPv4 bound to `interface`, or `None` when the interface is missing or unaddressed.
    async fn interface_ipv4(&self, interface: &str) -> Option<Ipv4Addr>;

    /// First global-scope, non link-local IPv6 on `interface`.
    async fn interface_ipv6_global(&self, interface: &str) -> Option<Ipv6Addr>;

    /// Associated SSID, or [`SSID_UNAVAILABLE`].
    async fn wifi_ssid(&self) -> String;

    async fn internet_status(&self) -> InternetStatus;

    /// CPU temperature in degrees Celsius. No fallback: errors are fatal.
    async fn cpu_temperature(&self) -> Result<f64, FactError>;
}

impl<T: FactSource + ?Sized> FactSource for &T {
    async fn interface_ipv4(&self, interface: &str) -> Option<Ipv4Addr> {
        (**self).interface_ipv4(interface).await
    }

    async fn interface_ipv6_global(&self, interface: &str) -> Option<Ipv6Addr> {
        (**self).interface_ipv6_global(interface).await
    }

    async fn wifi_ssid(&self) -> String {
        (**self).wifi_ssid().await
    }

    async fn internet_status(&self) -> InternetStatus {
        (**self).internet_status().await
    }

    async fn cpu_temperature(&self) -> Result<f64, FactError> {
        (**self).cpu_temperature().await
    }
}

/// Facts read from the running Linux host.
pub struct SystemFacts {
    probes: ProbesConfig,
}

impl SystemFacts {
    pub fn new(probes: ProbesConfig) -> Self {
        Self { probes }
    }
}

impl FactSource for SystemFacts {
    #[instrument(skip(self), fields(operation = "interface_ipv4"))]
    async fn interface_ipv4(&self, interface: &str) -> Option<Ipv4Addr> {
        let interface = interface.to_string();
        match tokio::task::spawn_blocking(move || linux::interface_ipv4(&interface)).await {
            Ok(addr) => addr,
            Err(e) => {
                tracing::warn!(error = %e, "interface lookup task failed");
                None
            }
        }
    }

    #[instrument(skip(self), fields(operation = "interface_ipv6_global"))]
    async fn interface_ipv6_global(&self, interface: &str) -> Option<Ipv6Addr> {
        let output = probe::capture(&self.probes.ipv6_command, &[interface]).await?;
        parse_global_ipv6(&output)
    }

    #[instrument(skip(self), fields(operation = "wifi_ssid"))]
    async fn wifi_ssid(&self) -> String {
        probe::capture(&self.probes.ssid_command, &[])
            .await
            .map(|out| out.trim().to_string())
            .filter(|ssid| !ssid.is_empty())
            .unwrap_or_else(|| SSID_UNAVAILABLE.to_string())
    }

    #[instrument(skip(self), fields(operation = "internet_status"))]
    async fn internet_status(&self) -> InternetStatus {
        let timeout = self.probes.ping_timeout_secs.to_string();
        let args = ["-c", "1", "-W", &timeout, &self.probes.ping_target];
        if probe::succeeds(&self.probes.ping_program, &args).await {
            InternetStatus::Online
        } else {
            InternetStatus::Offline
        }
    }

    #[instrument(skip(self), fields(operation = "cpu_temperature"))]
    async fn cpu_temperature(&self) -> Result<f64, FactError> {
        linux::read_cpu_temperature(&self.probes.thermal_path).await
    }
}
