use fadeconfig::FadeConfig;

use crate::curve::{UniformValue, VariantProfile};
use crate::ring::{ActiveSlots, CycleDirection, TextureRing};
use crate::timeline::ScrollTimeline;
use crate::CyclerError;

/// Fired when scroll input crosses a saturated timeline boundary and the
/// ring transitions to a neighbouring slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleEvent {
    pub direction: CycleDirection,
    pub outgoing: String,
    pub incoming: String,
    pub current_index: usize,
}

/// Read-only state handed to the rendering collaborator each frame: the two
/// bound texture names plus the sampled uniform values for the active
/// variant.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub progress: f32,
    pub outgoing: String,
    pub incoming: String,
    pub uniforms: Vec<UniformValue>,
}

/// Owns the texture ring and the scroll timeline and wires them together.
///
/// All mutation happens through [`handle_scroll`](Self::handle_scroll) on
/// one logical thread; renderers only read snapshots. Cycle transitions fire
/// exactly once per saturating input event: the boundary check runs before
/// the delta is applied, and progress is reset across the boundary so the
/// next event starts mid-range.
#[derive(Debug, Clone)]
pub struct FadeDriver {
    ring: TextureRing,
    timeline: ScrollTimeline,
    profile: VariantProfile,
    last_cycle: Option<CycleDirection>,
}

impl FadeDriver {
    pub fn new(
        ring: TextureRing,
        profile: VariantProfile,
        scroll_scale: f32,
    ) -> Result<Self, CyclerError> {
        Ok(Self {
            ring,
            timeline: ScrollTimeline::new(scroll_scale)?,
            profile,
            last_cycle: None,
        })
    }

    /// Builds a driver from a validated configuration, selecting `variant`,
    /// falling back to the config's default, then to its first declared
    /// variant. A plain blend profile covers the unvalidated case of no
    /// variants at all.
    pub fn from_config(config: &FadeConfig, variant: Option<&str>) -> Result<Self, CyclerError> {
        let ring = TextureRing::new(config.texture_names())?;
        let profile = match variant.or_else(|| config.default_variant()) {
            Some(name) => {
                let spec = config
                    .variant(name)
                    .ok_or_else(|| CyclerError::UnknownVariant(name.to_string()))?;
                VariantProfile::from_config(name, spec)
            }
            None => match config.variants.iter().next() {
                Some((name, spec)) => VariantProfile::from_config(name, spec),
                None => VariantProfile::blend_only(),
            },
        };
        Self::new(ring, profile, config.scroll_scale)
    }

    pub fn ring(&self) -> &TextureRing {
        &self.ring
    }

    pub fn profile(&self) -> &VariantProfile {
        &self.profile
    }

    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    pub fn last_cycle(&self) -> Option<CycleDirection> {
        self.last_cycle
    }

    /// Feeds one scroll-wheel event into the timeline. Negative deltas
    /// (scroll down) advance, positive deltas rewind. Returns the cycle
    /// event when the input crossed a saturated boundary.
    pub fn handle_scroll(&mut self, delta: f32) -> Option<CycleEvent> {
        let mut event = None;

        if self.timeline.at_end() && delta < 0.0 {
            self.cycle(CycleDirection::Forward);
            self.timeline.reset_to_start();
            event = Some(self.cycle_event(CycleDirection::Forward));
        } else if self.timeline.at_start() && delta > 0.0 {
            self.cycle(CycleDirection::Backward);
            self.timeline.reset_to_end();
            event = Some(self.cycle_event(CycleDirection::Backward));
        }

        self.timeline.apply(delta);
        event
    }

    /// Snapshot of the state a renderer reads at the top of a frame.
    pub fn frame(&self) -> FrameSnapshot {
        let progress = self.timeline.progress();
        FrameSnapshot {
            progress,
            outgoing: self.ring.outgoing_name().to_string(),
            incoming: self.ring.incoming_name().to_string(),
            uniforms: self.profile.sample(progress),
        }
    }

    pub fn active_slots(&self) -> ActiveSlots {
        self.ring.active_slots()
    }

    fn cycle(&mut self, direction: CycleDirection) {
        let reversed = self
            .last_cycle
            .map_or(false, |previous| previous != direction);

        if reversed {
            // The base layer is the wrong slot after a reversal; trading
            // roles keeps the displayed texture bound to the same uniform.
            self.ring.reverse_slots();
        } else {
            match direction {
                CycleDirection::Forward => self.ring.advance(),
                CycleDirection::Backward => self.ring.retreat(),
            }
        }

        self.last_cycle = Some(direction);
        tracing::debug!(
            %direction,
            reversed,
            index = self.ring.current_index(),
            outgoing = self.ring.outgoing_name(),
            incoming = self.ring.incoming_name(),
            "texture cycle"
        );
    }

    fn cycle_event(&self, direction: CycleDirection) -> CycleEvent {
        CycleEvent {
            direction,
            outgoing: self.ring.outgoing_name().to_string(),
            incoming: self.ring.incoming_name().to_string(),
            current_index: self.ring.current_index(),
        }
    }
}
