//! Connection health monitor use case

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::health::HealthStatus;

use super::ports::HealthProbe;

/// Called whenever the observed status value changes
pub type StatusCallback = Box<dyn Fn(HealthStatus) + Send + Sync>;

struct MonitorInner<P> {
    probe: P,
    interval: Duration,
    status: Mutex<HealthStatus>,
    /// Sequence of the most recently issued probe. Completions carrying an
    /// older sequence are stale and discarded.
    latest_seq: AtomicU64,
    running: AtomicBool,
    on_change: Mutex<Option<StatusCallback>>,
}

impl<P> MonitorInner<P> {
    /// Record a status change and notify the observer. Once the monitor
    /// has stopped the last observed value stays frozen, even if the
    /// scheduler loop was mid-cycle when `stop` landed.
    fn set_status(&self, next: HealthStatus) {
        let changed = {
            let mut current = self.status.lock().unwrap();
            if !self.running.load(Ordering::SeqCst) || *current == next {
                false
            } else {
                *current = next;
                true
            }
        };
        if changed {
            if let Some(callback) = self.on_change.lock().unwrap().as_ref() {
                callback(next);
            }
        }
    }

    /// Apply a probe outcome, unless the monitor stopped in the meantime or
    /// a newer probe has since been issued.
    fn apply_probe(&self, seq: u64, healthy: bool) {
        if !self.running.load(Ordering::SeqCst) {
            return;
        }
        if seq != self.latest_seq.load(Ordering::SeqCst) {
            return;
        }
        self.set_status(if healthy {
            HealthStatus::Connected
        } else {
            HealthStatus::Disconnected
        });
    }
}

/// Recurring poll of backend reachability, independent of any transcription
/// activity.
///
/// `start` issues an immediate probe and then one per interval until `stop`.
/// Probe cycles are fire-and-forget: a slow probe never delays the next
/// tick, and late completions are discarded by sequence number so an older
/// result can never overwrite a newer one.
pub struct HealthMonitor<P: HealthProbe + 'static> {
    inner: Arc<MonitorInner<P>>,
    scheduler: Mutex<Option<JoinHandle<()>>>,
}

impl<P: HealthProbe + 'static> HealthMonitor<P> {
    /// Create a stopped monitor with status `Unknown`
    pub fn new(probe: P, interval: Duration) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                probe,
                interval,
                status: Mutex::new(HealthStatus::Unknown),
                latest_seq: AtomicU64::new(0),
                running: AtomicBool::new(false),
                on_change: Mutex::new(None),
            }),
            scheduler: Mutex::new(None),
        }
    }

    /// Register the render collaborator. Replaces any previous callback.
    pub fn set_on_change(&self, callback: StatusCallback) {
        *self.inner.on_change.lock().unwrap() = Some(callback);
    }

    /// Begin probing: one probe immediately, then one per interval.
    /// Idempotent while already running.
    pub fn start(&self) {
        let mut scheduler = self.scheduler.lock().unwrap();
        if scheduler.is_some() {
            return;
        }
        self.inner.running.store(true, Ordering::SeqCst);

        let inner = Arc::clone(&self.inner);
        *scheduler = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(inner.interval);
            loop {
                // First tick completes immediately
                ticker.tick().await;
                if !inner.running.load(Ordering::SeqCst) {
                    break;
                }

                let seq = inner.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;
                inner.set_status(HealthStatus::Checking);

                let probe_owner = Arc::clone(&inner);
                tokio::spawn(async move {
                    let healthy = probe_owner.probe.check().await.is_ok();
                    probe_owner.apply_probe(seq, healthy);
                });
            }
        }));
    }

    /// Cancel the recurring schedule. In-flight probes may still complete
    /// but their results are no longer applied. Idempotent.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
        // Invalidate outstanding probes so they stay stale across a restart
        self.inner.latest_seq.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.scheduler.lock().unwrap().take() {
            handle.abort();
        }
    }

    /// Whether the recurring schedule is active
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Current reachability belief
    pub fn status(&self) -> HealthStatus {
        *self.inner.status.lock().unwrap()
    }
}

impl<P: HealthProbe + 'static> Drop for HealthMonitor<P> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ProbeError;
    use async_trait::async_trait;

    struct NeverProbe;

    #[async_trait]
    impl HealthProbe for NeverProbe {
        async fn check(&self) -> Result<(), ProbeError> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    // The scheduler loop checks `running` and then marks Checking; on a
    // multi-thread runtime stop() can land between the two. The status
    // gate has to hold on its own.
    #[test]
    fn status_updates_are_dropped_while_stopped() {
        let monitor = HealthMonitor::new(NeverProbe, Duration::from_secs(1000));
        let fired = Arc::new(AtomicBool::new(false));
        let sink = Arc::clone(&fired);
        monitor.set_on_change(Box::new(move |_| {
            sink.store(true, Ordering::SeqCst);
        }));

        monitor.inner.set_status(HealthStatus::Checking);

        assert_eq!(monitor.status(), HealthStatus::Unknown);
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn status_updates_apply_while_running() {
        let monitor = HealthMonitor::new(NeverProbe, Duration::from_secs(1000));
        monitor.inner.running.store(true, Ordering::SeqCst);

        monitor.inner.set_status(HealthStatus::Checking);

        assert_eq!(monitor.status(), HealthStatus::Checking);
    }
}
