// Linux-specific helpers: interface table, `ip -6 addr` output, thermal zone file.

use super::FactError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;
use sysinfo::Networks;

/// First IPv4 address sysinfo reports for `interface`.
pub(super) fn interface_ipv4(interface: &str) -> Option<Ipv4Addr> {
    let networks = Networks::new_with_refreshed_list();
    let data = networks.list().get(interface)?;
    data.ip_networks().iter().find_map(|n| match n.addr {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    })
}

/// Extract the first global-scope address from `ip -6 addr show` output,
/// e.g. `inet6 2605:ab:cd::123/64 scope global` -> `2605:ab:cd::123`.
/// Link-local (`fe80:`) lines and anything unparseable are skipped.
pub fn parse_global_ipv6(output: &str) -> Option<Ipv6Addr> {
    output
        .lines()
        .filter(|line| {
            line.contains("inet6") && line.contains("scope global") && !line.contains("fe80:")
        })
        .find_map(|line| {
            let mut tokens = line.split_whitespace();
            tokens.find(|t| *t == "inet6")?;
            let with_prefix = tokens.next()?;
            let addr = with_prefix.split('/').next()?;
            addr.parse().ok()
        })
}

/// Parse thermal zone content (milli-degrees, surrounding whitespace allowed).
pub fn parse_millidegrees(content: &str) -> Result<i64, std::num::ParseIntError> {
    content.trim().parse()
}

pub(super) async fn read_cpu_temperature(path: &Path) -> Result<f64, FactError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FactError::ThermalRead {
            path: path.to_path_buf(),
            source,
        })?;
    let millis = parse_millidegrees(&content).map_err(|source| FactError::ThermalParse {
        path: path.to_path_buf(),
        content: content.trim().to_string(),
        source,
    })?;
    Ok(millis as f64 / 1000.0)
}
