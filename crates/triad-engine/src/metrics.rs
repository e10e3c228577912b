//! Per-frame metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and interaction counts for a single
//! frame, for telemetry and headless reporting.

use triad_core::Census;

/// Timing and interaction data collected during a single `step()`.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Wall-clock time for the entire frame, in microseconds.
    pub total_us: u64,
    /// Time spent in the movement pass, in microseconds. Zero under
    /// [`PassSchedule::Interleaved`](crate::PassSchedule::Interleaved),
    /// where the passes are not separable.
    pub movement_us: u64,
    /// Time spent in the interaction pass, in microseconds. Zero under
    /// the interleaved schedule.
    pub interaction_us: u64,
    /// Number of ordered pairs `(a, b)` where `a` was touching `b`.
    pub collisions: u32,
    /// Number of conversions during the frame. An agent converted twice
    /// in one frame counts twice.
    pub conversions: u32,
    /// Population by kind after the frame.
    pub census: Census,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.movement_us, 0);
        assert_eq!(m.interaction_us, 0);
        assert_eq!(m.collisions, 0);
        assert_eq!(m.conversions, 0);
        assert_eq!(m.census.total(), 0);
    }
}
