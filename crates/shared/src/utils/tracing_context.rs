use crate::utils::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{error, info};

/// Timing for one service operation, finished with [`TracingContext::complete`].
pub struct TracingContext {
    pub operation: &'static str,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation: &'static str) -> Self {
        info!("Starting operation: {operation}");

        Self {
            operation,
            start_time: Instant::now(),
        }
    }

    pub fn complete(&self, metrics: &Metrics, method: Method, is_success: bool, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();

        let status = if is_success {
            info!(
                "✅ Operation {} completed successfully in {:.3}s: {message}",
                self.operation, elapsed
            );
            Status::Success
        } else {
            error!(
                "❌ Operation {} failed after {:.3}s: {message}",
                self.operation, elapsed
            );
            Status::Error
        };

        metrics.record(method, status, elapsed);
    }
}
