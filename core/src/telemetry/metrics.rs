use std::sync::Mutex;

/// Counts RMS computations and empty-input failures.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    computed: usize,
    empty_inputs: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                computed: 0,
                empty_inputs: 0,
            }),
        }
    }

    pub fn record_computed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.computed += 1;
        }
    }

    pub fn record_empty_input(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.empty_inputs += 1;
        }
    }

    /// Returns `(computed, empty_inputs)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.computed, metrics.empty_inputs)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn recorder_counts_from_several_threads() {
        let recorder = Arc::new(MetricsRecorder::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let recorder = recorder.clone();
                thread::spawn(move || {
                    recorder.record_computed();
                    recorder.record_empty_input();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(recorder.snapshot(), (4, 4));
    }
}
