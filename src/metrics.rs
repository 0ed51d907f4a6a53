//! Performance metrics and statistics tracking for the recommendation service.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics collector for request handling.
///
/// Counts outcomes and latencies only; profile contents are never recorded.
pub struct ServiceMetrics {
    /// Requests answered with a recommendation
    pub requests_served: AtomicU64,
    /// Requests rejected as malformed or out of range
    pub requests_rejected: AtomicU64,
    /// Requests failed by inference or mapping errors
    pub requests_failed: AtomicU64,
    /// Recommendations by final label
    recommendations_by_label: RwLock<HashMap<i64, u64>>,
    /// Processing times (in microseconds)
    processing_times: RwLock<Vec<u64>>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl ServiceMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            requests_served: AtomicU64::new(0),
            requests_rejected: AtomicU64::new(0),
            requests_failed: AtomicU64::new(0),
            recommendations_by_label: RwLock::new(HashMap::new()),
            processing_times: RwLock::new(Vec::with_capacity(1000)),
            start_time: Instant::now(),
        }
    }

    /// Record a served recommendation
    pub fn record_request(&self, processing_time: Duration, label: i64) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut times) = self.processing_times.write() {
            times.push(processing_time.as_micros() as u64);
            // Keep only last 10000 for memory efficiency
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }

        if let Ok(mut by_label) = self.recommendations_by_label.write() {
            *by_label.entry(label).or_insert(0) += 1;
        }
    }

    /// Record a rejected request (malformed or invalid profile)
    pub fn record_rejection(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed request (inference or mapping error)
    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get processing time statistics
    pub fn get_processing_stats(&self) -> ProcessingStats {
        let times = self.processing_times.read().unwrap();
        if times.is_empty() {
            return ProcessingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        ProcessingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get current throughput (requests per second)
    pub fn get_throughput(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.requests_served.load(Ordering::Relaxed) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Get recommendations by final label
    pub fn get_recommendations_by_label(&self) -> HashMap<i64, u64> {
        self.recommendations_by_label.read().unwrap().clone()
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let served = self.requests_served.load(Ordering::Relaxed);
        let rejected = self.requests_rejected.load(Ordering::Relaxed);
        let failed = self.requests_failed.load(Ordering::Relaxed);

        let processing = self.get_processing_stats();
        let throughput = self.get_throughput();
        let by_label = self.get_recommendations_by_label();

        info!("╔══════════════════════════════════════════════════════════════╗");
        info!("║        COURSE RECOMMENDATION SERVICE - METRICS SUMMARY       ║");
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!(
            "║ Served: {:>8}  │  Rejected: {:>8}  │  Failed: {:>8} ║",
            served, rejected, failed
        );
        info!("║ Throughput: {:>6.1} req/s                                     ║", throughput);
        info!(
            "║ Processing Time (μs): mean={:>5} p50={:>5} p95={:>5} p99={:>5} ║",
            processing.mean_us, processing.p50_us, processing.p95_us, processing.p99_us
        );
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!("║ Recommendations by Label:                                    ║");
        let mut labels: Vec<_> = by_label.iter().collect();
        labels.sort();
        for (label, count) in labels {
            let pct = if served > 0 {
                (*count as f64 / served as f64) * 100.0
            } else {
                0.0
            };
            info!(
                "║   label {}: {:>6} ({:>5.1}%)                                  ║",
                label, count, pct
            );
        }
        info!("╚══════════════════════════════════════════════════════════════╝");
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing time statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

/// Real-time metrics reporter that prints periodic summaries
pub struct MetricsReporter {
    metrics: std::sync::Arc<ServiceMetrics>,
    interval_secs: u64,
}

impl MetricsReporter {
    pub fn new(metrics: std::sync::Arc<ServiceMetrics>, interval_secs: u64) -> Self {
        Self {
            metrics,
            interval_secs,
        }
    }

    /// Start the periodic reporting task
    pub async fn start(self) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            interval.tick().await;
            self.metrics.print_summary();
        }
    }
}
