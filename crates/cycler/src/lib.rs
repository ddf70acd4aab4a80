//! Scroll-driven texture cycling: a cyclic ring of named texture slots, a
//! clamped scroll timeline, and the driver that wires boundary crossings to
//! ring transitions. Rendering is a collaborator: it reads frame snapshots
//! and never mutates controller state.

mod curve;
mod driver;
mod ring;
mod timeline;

pub use curve::{ControlRange, EaseCurve, TweenSegment, UniformTrack, UniformValue, VariantProfile};
pub use driver::{CycleEvent, FadeDriver, FrameSnapshot};
pub use ring::{ActiveSlots, CycleDirection, TextureRing};
pub use timeline::ScrollTimeline;

#[derive(Debug, thiserror::Error)]
pub enum CyclerError {
    #[error("texture ring must contain at least one slot")]
    EmptyRing,
    #[error("variant '{0}' not found")]
    UnknownVariant(String),
    #[error("scroll scale must be positive and finite, got {0}")]
    InvalidScrollScale(f32),
}
