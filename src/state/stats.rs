//! Session request statistics for the top bar.

/// Statistics displayed in the top bar.
#[derive(Default, Clone, Debug)]
pub struct SessionStats {
    /// Catalog requests completed this session (pages and batches).
    pub request_count: u32,

    /// Requests that ended in an error.
    pub failed_request_count: u32,

    /// Latency of the most recent completed request in milliseconds.
    pub last_latency_ms: Option<f64>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed request.
    pub fn record_request(&mut self, latency_ms: f64, succeeded: bool) {
        self.request_count += 1;
        if !succeeded {
            self.failed_request_count += 1;
        }
        self.last_latency_ms = Some(latency_ms);
    }

    /// Format request statistics for display (e.g., "12 requests · 1 failed · 142ms").
    pub fn format_summary(&self) -> String {
        let mut parts = vec![format!(
            "{} request{}",
            self.request_count,
            if self.request_count == 1 { "" } else { "s" }
        )];

        if self.failed_request_count > 0 {
            parts.push(format!("{} failed", self.failed_request_count));
        }
        if let Some(latency) = self.last_latency_ms {
            parts.push(format!("{:.0}ms", latency));
        }

        parts.join(" · ")
    }
}
