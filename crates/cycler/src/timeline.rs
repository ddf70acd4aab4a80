use crate::CyclerError;

/// Normalized blend progress driven by raw scroll deltas.
///
/// Progress lives in `[0, 1]` and is only ever assigned through `clamp`, so
/// the exact boundary comparisons in [`at_start`](Self::at_start) and
/// [`at_end`](Self::at_end) are reliable even after long runs of fractional
/// deltas. There is no background ticking; progress moves only when
/// [`apply`](Self::apply) is called.
#[derive(Debug, Clone)]
pub struct ScrollTimeline {
    progress: f32,
    scale: f32,
}

impl ScrollTimeline {
    /// `scale` divides incoming wheel deltas; larger values mean slower
    /// traversal. A full traversal takes `scale` worth of accumulated delta.
    pub fn new(scale: f32) -> Result<Self, CyclerError> {
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(CyclerError::InvalidScrollScale(scale));
        }
        Ok(Self {
            progress: 0.0,
            scale,
        })
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn at_start(&self) -> bool {
        self.progress == 0.0
    }

    pub fn at_end(&self) -> bool {
        self.progress == 1.0
    }

    /// Applies a signed wheel delta. Positive deltas (scroll up) rewind,
    /// negative deltas (scroll down) advance, matching natural wheel
    /// semantics. Non-finite deltas are ignored: `clamp` propagates NaN,
    /// which would poison progress for the rest of the session.
    pub fn apply(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.progress = (self.progress - delta / self.scale).clamp(0.0, 1.0);
    }

    pub fn reset_to_start(&mut self) {
        self.progress = 0.0;
    }

    pub fn reset_to_end(&mut self) {
        self.progress = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_scale() {
        assert!(ScrollTimeline::new(0.0).is_err());
        assert!(ScrollTimeline::new(-10.0).is_err());
        assert!(ScrollTimeline::new(f32::NAN).is_err());
    }

    #[test]
    fn forward_delta_advances_progress() {
        let mut timeline = ScrollTimeline::new(100.0).expect("timeline");
        timeline.apply(-25.0);
        assert!((timeline.progress() - 0.25).abs() < 1e-6);
        timeline.apply(-25.0);
        assert!((timeline.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn progress_clamps_under_oversized_deltas() {
        let mut timeline = ScrollTimeline::new(100.0).expect("timeline");
        timeline.apply(-1_000_000.0);
        assert_eq!(timeline.progress(), 1.0);
        assert!(timeline.at_end());
        timeline.apply(1_000_000.0);
        assert_eq!(timeline.progress(), 0.0);
        assert!(timeline.at_start());
    }

    #[test]
    fn non_finite_deltas_leave_progress_untouched() {
        let mut timeline = ScrollTimeline::new(100.0).expect("timeline");
        timeline.apply(-25.0);
        timeline.apply(f32::NAN);
        assert!((timeline.progress() - 0.25).abs() < 1e-6);
        timeline.apply(f32::INFINITY);
        timeline.apply(f32::NEG_INFINITY);
        assert!((timeline.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn boundary_checks_hold_after_exact_traversal() {
        let mut timeline = ScrollTimeline::new(100.0).expect("timeline");
        for _ in 0..10 {
            timeline.apply(-10.0);
        }
        // Accumulated fractional steps may or may not land exactly on 1.0,
        // but a saturating delta always does.
        timeline.apply(-10.0);
        assert!(timeline.at_end());
    }
}
