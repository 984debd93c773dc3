//! Layer 0: time primitive
//!
//! Wall-clock instants for due/wakeup/closed fields and classification
//! reference times. Measurement, not causality: every classifier entry
//! point takes the reference instant as an argument, so the core itself
//! never reads the system clock.

use serde::{Deserialize, Serialize};

/// An instant in unix epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WallClock(pub u64);

impl WallClock {
    /// Current wall time. Collaborator use only; the pure core takes
    /// reference instants as parameters.
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self(ms)
    }

    pub const fn from_unix_ms(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_ms(self) -> u64 {
        self.0
    }

    /// Saturating offset, for TTL deadlines.
    pub const fn plus_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}
