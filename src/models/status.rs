// Per-cycle status snapshot

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// SSID value when the Wi-Fi query utility is missing or reports no association.
pub const SSID_UNAVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternetStatus {
    Online,
    Offline,
}

impl fmt::Display for InternetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternetStatus::Online => f.write_str("Online"),
            InternetStatus::Offline => f.write_str("Offline"),
        }
    }
}

/// Facts gathered in one render cycle. Built whole, rendered once, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub wired_address: Option<Ipv4Addr>,
    pub wireless_address: Option<Ipv4Addr>,
    /// Collected every cycle but not part of the rendered line set.
    pub wired_ipv6_address: Option<Ipv6Addr>,
    pub wifi_ssid: String,
    pub internet_status: InternetStatus,
    pub cpu_temperature_celsius: f64,
}

impl StatusSnapshot {
    pub fn has_ssid(&self) -> bool {
        self.wifi_ssid != SSID_UNAVAILABLE
    }
}
