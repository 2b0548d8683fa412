use crate::constants::PRELOAD_DELAY_MAX_MS;
use std::time::Duration;

/// Milliseconds to hand a browser timer for `delay`: at least 1, saturating at
/// the longest delay timers accept instead of wrapping.
#[inline]
pub fn timer_millis(delay: Duration) -> u32 {
    let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
    ms.clamp(1, PRELOAD_DELAY_MAX_MS) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadPhase {
    Loading,
    Loaded,
}

/// Two-state intro timer: `Loading` until `delay` has elapsed, then `Loaded` for good.
#[derive(Clone, Debug)]
pub struct Preloader {
    phase: PreloadPhase,
    delay: Duration,
    cancelled: bool,
}

impl Preloader {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: PreloadPhase::Loading,
            delay,
            cancelled: false,
        }
    }

    /// Report time since arming. Yields `Some(Loaded)` on the single transition only.
    pub fn advance(&mut self, elapsed: Duration) -> Option<PreloadPhase> {
        if self.cancelled || self.phase == PreloadPhase::Loaded || elapsed < self.delay {
            return None;
        }
        self.phase = PreloadPhase::Loaded;
        Some(PreloadPhase::Loaded)
    }

    /// Time left before the transition, or `None` once it can no longer happen.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        if self.cancelled || self.phase == PreloadPhase::Loaded {
            return None;
        }
        Some(self.delay.saturating_sub(elapsed))
    }

    /// Disarm a pending transition. No effect once loaded.
    pub fn cancel(&mut self) {
        if self.phase == PreloadPhase::Loading {
            self.cancelled = true;
        }
    }

    #[inline]
    pub fn phase(&self) -> PreloadPhase {
        self.phase
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
