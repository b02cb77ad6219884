//! Placeholder animation shown while a page resolves

use std::time::Duration;

/// Indeterminate progress bar that sweeps back and forth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingIndicator {
    /// Position of the sweep, 0.0 (left) to 1.0 (right)
    pub position: f32,
    /// Time spent loading so far
    pub elapsed: Duration,
}

impl LoadingIndicator {
    /// Duration of one left-to-right sweep
    const SWEEP_DURATION: Duration = Duration::from_millis(900);
    /// Loads shorter than this render no placeholder text
    const QUIET_PERIOD: Duration = Duration::from_millis(150);

    /// Compute the animation frame for a load running for `elapsed`
    pub fn at(elapsed: Duration) -> Self {
        let sweep = Self::SWEEP_DURATION.as_secs_f32();
        let cycles = elapsed.as_secs_f32() / sweep;
        let phase = cycles.fract();
        // even cycles sweep right, odd cycles sweep back
        let forward = (cycles as u64) % 2 == 0;
        let linear = if forward { phase } else { 1.0 - phase };
        Self {
            position: simple_easing::sine_in_out(linear),
            elapsed,
        }
    }

    /// Whether the load has run long enough to be worth announcing
    pub fn is_visible(&self) -> bool {
        self.elapsed >= Self::QUIET_PERIOD
    }

    /// Column of the sweep head within a bar `width` cells wide
    pub fn head_column(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let max = (width - 1) as f32;
        (self.position * max).round() as u16
    }
}
