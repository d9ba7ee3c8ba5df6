// Standard library
use std::error::Error;
use std::future::Future;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

// Project imports
use crate::metrics::{LatencySink, StatusPageReporter};
use crate::poller::{PassSummary, Poller};
use crate::provisioner::{provision, DeveloperPortal};
use crate::settings::types::ConfigManager;
use crate::utility::ip_detector::types::IpDetector;
use crate::utility::rotator::CredentialRotator;
use crate::utility::throttle::QueueThrottler;

/// Main application loop.
///
/// This function:
/// - Detects the egress IP and provisions API keys bound to it
/// - Polls every configured target once per pass through the throttler
/// - Waits the pass interval after each pass completes
/// - Implements graceful shutdown on signal
pub async fn run(
    config: Arc<ConfigManager>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let settings = config.get_settings().await;
    let timeout: Duration = settings.throttle.request_timeout();
    let pass_interval: Duration = settings.get_pass_interval();
    let targets: Vec<String> = settings.poll.targets.clone();

    // Provision the credential pool; nothing below can run without it.
    let rotator = CredentialRotator::new();
    let ip_detector = IpDetector::new(settings.ip_detection.clone())?;
    let portal = DeveloperPortal::new(&settings.provisioning, timeout)?;
    let provisioning = async {
        let egress_ip: IpAddr = ip_detector.detect_ip().await?;
        provision(&portal, &settings.provisioning, egress_ip, &rotator).await?;
        Ok::<(), Box<dyn Error>>(())
    };
    match unless_shutdown(provisioning, &mut shutdown_rx).await {
        Some(result) => result?,
        None => {
            info!("Received shutdown signal, abandoning key provisioning...");
            return Ok(());
        }
    }

    let throttler = QueueThrottler::new(settings.throttle.rate_limit);
    let mut poller = Poller::new(&settings.poll, timeout, throttler, rotator)?;
    if settings.metrics.enabled {
        let reporter = StatusPageReporter::new(&settings.metrics, timeout)?;
        poller = poller.with_sink(Arc::new(reporter) as Arc<dyn LatencySink>);
    } else {
        debug!("Latency reporting disabled");
    }

    info!(
        targets = targets.len(),
        min_gap_ms = poller.throttler.interval().as_millis() as u64,
        credentials = poller.rotator.len(),
        "🕰️ Polling every {} ms after each pass",
        pass_interval.as_millis()
    );

    // Drop the settings lock
    drop(settings);

    loop {
        tokio::select! {
            Ok(_) = shutdown_rx.recv() => {
                info!("Received shutdown signal, abandoning current pass...");
                break;
            }

            summary = poller.run_pass(&targets) => log_pass(&summary),
        }

        tokio::select! {
            Ok(_) = shutdown_rx.recv() => {
                info!("Received shutdown signal, stopping poll loop...");
                break;
            }

            _ = tokio::time::sleep(pass_interval) => {}
        }
    }

    Ok(())
}

fn log_pass(summary: &PassSummary) {
    if summary.failed == 0 {
        info!(
            succeeded = summary.succeeded,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Poll pass complete"
        );
    } else {
        warn!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            total = summary.total(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Poll pass complete with failures"
        );
    }
}

/// Runs `work` to completion unless a shutdown signal arrives first.
async fn unless_shutdown<F: Future>(
    work: F,
    shutdown_rx: &mut broadcast::Receiver<()>,
) -> Option<F::Output> {
    tokio::select! {
        Ok(_) = shutdown_rx.recv() => None,
        output = work => Some(output),
    }
}
