// Shared test helpers: scripted fact source and a display that records calls

#![allow(dead_code)]

use kvmscreen::display::{DisplayAdapter, DisplayError};
use kvmscreen::facts::{FactError, FactSource};
use kvmscreen::models::{InternetStatus, SSID_UNAVAILABLE};
use kvmscreen::worker::WorkerConfig;
use std::cell::RefCell;
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;
use std::time::Duration;

pub struct StubFacts {
    pub ipv4: HashMap<String, Ipv4Addr>,
    pub ipv6: HashMap<String, Ipv6Addr>,
    pub ssid: String,
    pub internet: InternetStatus,
    /// Raw thermal file content; parsed the same way the real sensor is.
    pub thermal: String,
    pub calls: RefCell<Vec<String>>,
}

impl StubFacts {
    pub fn new() -> Self {
        Self {
            ipv4: HashMap::new(),
            ipv6: HashMap::new(),
            ssid: SSID_UNAVAILABLE.to_string(),
            internet: InternetStatus::Offline,
            thermal: "40000".into(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_ipv4(mut self, interface: &str, addr: &str) -> Self {
        self.ipv4.insert(interface.into(), addr.parse().unwrap());
        self
    }

    pub fn with_ipv6(mut self, interface: &str, addr: &str) -> Self {
        self.ipv6.insert(interface.into(), addr.parse().unwrap());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl FactSource for StubFacts {
    async fn interface_ipv4(&self, interface: &str) -> Option<Ipv4Addr> {
        self.record(format!("ipv4:{}", interface));
        self.ipv4.get(interface).copied()
    }

    async fn interface_ipv6_global(&self, interface: &str) -> Option<Ipv6Addr> {
        self.record(format!("ipv6:{}", interface));
        self.ipv6.get(interface).copied()
    }

    async fn wifi_ssid(&self) -> String {
        self.record("ssid");
        self.ssid.clone()
    }

    async fn internet_status(&self) -> InternetStatus {
        self.record("internet");
        self.internet
    }

    async fn cpu_temperature(&self) -> Result<f64, FactError> {
        self.record("temperature");
        let millis = kvmscreen::facts::parse_millidegrees(&self.thermal).map_err(|source| {
            FactError::ThermalParse {
                path: PathBuf::from("stub"),
                content: self.thermal.clone(),
                source,
            }
        })?;
        Ok(millis as f64 / 1000.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Begin,
    Line(usize, String),
    End,
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
    pub fail_flush: bool,
}

impl RecordingDisplay {
    /// Rows drawn since the last `Begin`.
    pub fn last_frame(&self) -> Vec<String> {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DisplayCall::Begin)
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Line(_, text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DisplayAdapter for RecordingDisplay {
    fn begin_frame(&mut self) -> Result<(), DisplayError> {
        self.calls.push(DisplayCall::Begin);
        Ok(())
    }

    fn draw_line(&mut self, row: usize, text: &str) -> Result<(), DisplayError> {
        self.calls.push(DisplayCall::Line(row, text.to_string()));
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Flush("bus write failed".into()));
        }
        self.calls.push(DisplayCall::End);
        Ok(())
    }
}

pub fn worker_config() -> WorkerConfig {
    WorkerConfig {
        interval: Duration::from_secs(5),
        wired_interface: "eth0".into(),
        wireless_interface: "wlan0".into(),
    }
}
