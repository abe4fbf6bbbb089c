use std::sync::Mutex;

/// Point-in-time view of the recognition counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub recognitions: usize,
    pub admitted: usize,
    pub rejected: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_recognition(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.recognitions += 1;
        }
    }

    pub fn record_admission(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.admitted += 1;
        }
    }

    pub fn record_rejection(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
