// Render loop: collect a snapshot, paint it, sleep, repeat until shutdown or a fatal error.
// Sequential on the caller's task; no collector runs concurrently with another.

use crate::config::AppConfig;
use crate::display::{DisplayAdapter, DisplayError};
use crate::facts::{FactError, FactSource};
use crate::layout::render_lines;
use crate::models::StatusSnapshot;
use tokio::sync::oneshot;
use tokio::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error(transparent)]
    Fact(#[from] FactError),
    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Loop timing and the interfaces to report on.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Pause after each cycle; not adjusted for collection time.
    pub interval: Duration,
    pub wired_interface: String,
    pub wireless_interface: String,
}

impl From<&AppConfig> for WorkerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.render.interval_secs),
            wired_interface: config.interfaces.wired.clone(),
            wireless_interface: config.interfaces.wireless.clone(),
        }
    }
}

pub struct StatusWorker<F, D> {
    facts: F,
    display: D,
    config: WorkerConfig,
}

impl<F: FactSource, D: DisplayAdapter> StatusWorker<F, D> {
    pub fn new(facts: F, display: D, config: WorkerConfig) -> Self {
        Self {
            facts,
            display,
            config,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Query every collector in fixed order: wired v4, wireless v4, SSID,
    /// internet, wired v6, CPU temperature.
    pub async fn collect(&self) -> Result<StatusSnapshot, FactError> {
        let wired_address = self.facts.interface_ipv4(&self.config.wired_interface).await;
        let wireless_address = self
            .facts
            .interface_ipv4(&self.config.wireless_interface)
            .await;
        let wifi_ssid = self.facts.wifi_ssid().await;
        let internet_status = self.facts.internet_status().await;
        let wired_ipv6_address = self
            .facts
            .interface_ipv6_global(&self.config.wired_interface)
            .await;
        let cpu_temperature_celsius = self.facts.cpu_temperature().await?;

        Ok(StatusSnapshot {
            wired_address,
            wireless_address,
            wired_ipv6_address,
            wifi_ssid,
            internet_status,
            cpu_temperature_celsius,
        })
    }

    /// One full cycle without the trailing sleep. Returns the lines drawn.
    pub async fn tick(&mut self) -> Result<Vec<String>, WorkerError> {
        let snapshot = self.collect().await?;
        tracing::debug!(?snapshot, "status collected");
        tracing::info!(
            internet = %snapshot.internet_status,
            temperature_celsius = snapshot.cpu_temperature_celsius,
            "status"
        );

        let lines = render_lines(&snapshot);
        self.display.begin_frame()?;
        for (row, line) in lines.iter().enumerate() {
            self.display.draw_line(row, line)?;
        }
        self.display.end_frame()?;
        Ok(lines)
    }

    /// Run cycles until `shutdown_rx` fires (or its sender is dropped). Any
    /// fact or display error ends the loop and is returned.
    #[tracing::instrument(
        name = "worker",
        level = "debug",
        skip_all,
        fields(interval_secs = self.config.interval.as_secs())
    )]
    pub async fn run(mut self, mut shutdown_rx: oneshot::Receiver<()>) -> Result<(), WorkerError> {
        loop {
            if let Err(e) = self.tick().await {
                tracing::error!(error = %e, operation = "tick", "status cycle failed");
                return Err(e);
            }
            tokio::select! {
                _ = tokio::time::sleep(self.config.interval) => {}
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
            }
        }
        Ok(())
    }
}
