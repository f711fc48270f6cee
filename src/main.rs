use anyhow::Result;
use kvmscreen::*;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    tracing::info!(build = %version::banner(), "starting");

    let app_config = config::AppConfig::load()?;
    let display = display::open(&app_config.display)?;
    let facts = facts::SystemFacts::new(app_config.probes.clone());
    let worker = worker::StatusWorker::new(facts, display, worker::WorkerConfig::from(&app_config));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let run = worker.run(shutdown_rx);
    tokio::pin!(run);

    tokio::select! {
        result = &mut run => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            run.await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
