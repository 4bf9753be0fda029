//! Application state for the message server.

use factcheck_common::MessageHandler;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared state for one served component.
pub struct AppState {
    /// The agent or orchestrator answering messages
    pub handler: Arc<dyn MessageHandler>,

    /// Held while a message is processed, so requests run one at a time
    pub gate: Mutex<()>,

    /// Server start time (for health checks)
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(handler: Arc<dyn MessageHandler>) -> Self {
        Self {
            handler,
            gate: Mutex::new(()),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
