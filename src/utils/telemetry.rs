// file: src/utils/telemetry.rs
// description: Operation timing for the search pipeline stages
// reference: tracing spans without a collector backend

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed operation: {} in {:.3}s",
            self.operation,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed operation: {} - {} rows in {:.3}s",
            self.operation,
            count,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn warn_if_slow(&self, threshold: Duration) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "Slow operation [{}]: took {:.2}s (threshold: {:.2}s)",
                self.operation,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        timer.warn_if_slow(Duration::from_secs(60));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }

    #[test]
    fn test_finish_with_count() {
        let timer = OperationTimer::new("search");
        let elapsed = timer.finish_with_count(2);
        assert!(elapsed < Duration::from_secs(60));
    }
}
