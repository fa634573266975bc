//! Process start time, the origin of every elapsed-time computation.

use std::time::{Duration, Instant};

/// Captured once before serving and never changed. `Copy`, so handlers read
/// it without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct StartTime(Instant);

impl StartTime {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    /// Seconds since start, as fed to the value generator.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}
