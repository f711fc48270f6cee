// Domain models

mod status;

pub use status::{InternetStatus, SSID_UNAVAILABLE, StatusSnapshot};
