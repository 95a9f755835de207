//! Simulated request latency applied before every service call.

use std::time::Duration;

/// Delay used when nothing else is configured.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Delay strategy awaited at the start of each service operation.
///
/// Timing only; results are identical for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// Resolve immediately. Used by tests.
    None,
    /// Sleep for the given duration.
    Fixed(Duration),
}

impl Latency {
    /// Maps `0` to `Latency::None`.
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Self::None
        } else {
            Self::Fixed(Duration::from_millis(millis))
        }
    }

    pub fn as_duration(self) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Fixed(duration) => duration,
        }
    }

    pub async fn simulate(self) {
        if let Self::Fixed(duration) = self {
            if !duration.is_zero() {
                tokio::time::sleep(duration).await;
            }
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::Fixed(DEFAULT_LATENCY)
    }
}
