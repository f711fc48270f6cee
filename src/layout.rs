// Snapshot -> ordered screen lines

use crate::models::StatusSnapshot;

const DISCONNECTED: &str = "Disconnected";

/// Lines in screen order: Net, Eth, Wif, SSID (only when associated), Temp.
/// The wired IPv6 address is not part of the readout.
pub fn render_lines(snapshot: &StatusSnapshot) -> Vec<String> {
    let mut lines = Vec::with_capacity(5);
    lines.push(format!("Net: {}", snapshot.internet_status));
    lines.push(match snapshot.wired_address {
        Some(addr) => format!("Eth: {}", addr),
        None => format!("Eth: {}", DISCONNECTED),
    });
    lines.push(match snapshot.wireless_address {
        Some(addr) => format!("Wif: {}", addr),
        None => format!("Wif: {}", DISCONNECTED),
    });
    if snapshot.has_ssid() {
        lines.push(format!("SSID: {}", snapshot.wifi_ssid));
    }
    lines.push(format!(
        "Temp: {} °C",
        format_celsius(snapshot.cpu_temperature_celsius)
    ));
    lines
}

/// Shortest round-trip decimal, always with a fractional part ("45.0", "45.231").
pub fn format_celsius(celsius: f64) -> String {
    format!("{:?}", celsius)
}
