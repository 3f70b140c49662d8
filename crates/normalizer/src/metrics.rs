use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for normalize calls.
///
/// All operations use `Ordering::Relaxed` — for observability counters,
/// eventual correctness is sufficient. `snapshot()` reads are not atomic
/// across fields; slight tearing between counts and timings is acceptable.
#[derive(Debug, Default)]
pub struct BridgeMetrics {
    /// Lines normalized successfully
    normalized: AtomicU64,
    /// Empty (or trimmed-to-empty) inputs short-circuited to null
    empty_input: AtomicU64,
    /// Calls that ended in a normalization failure
    failures: AtomicU64,
    /// Cumulative time spent in the engine + conversion
    time_nanos: AtomicU64,
}

impl BridgeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_normalized(&self, time_nanos: u64) {
        self.normalized.fetch_add(1, Ordering::Relaxed);
        self.time_nanos.fetch_add(time_nanos, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_empty_input(&self) {
        self.empty_input.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failure(&self, time_nanos: u64) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        self.time_nanos.fetch_add(time_nanos, Ordering::Relaxed);
    }

    /// Create a serializable snapshot of current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let normalized = self.normalized.load(Ordering::Relaxed);
        let failures = self.failures.load(Ordering::Relaxed);
        let time_nanos = self.time_nanos.load(Ordering::Relaxed);
        let engine_calls = normalized + failures;

        MetricsSnapshot {
            normalized,
            empty_input: self.empty_input.load(Ordering::Relaxed),
            failures,
            avg_normalize_time_us: if engine_calls > 0 {
                (time_nanos as f64 / engine_calls as f64) / 1000.0
            } else {
                0.0
            },
            success_rate: if engine_calls > 0 {
                normalized as f64 / engine_calls as f64
            } else {
                1.0
            },
        }
    }
}

/// A read-only snapshot of bridge metrics, cheap to clone and serializable
/// for logging or export.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub normalized: u64,
    pub empty_input: u64,
    pub failures: u64,
    pub avg_normalize_time_us: f64,
    pub success_rate: f64,
}
