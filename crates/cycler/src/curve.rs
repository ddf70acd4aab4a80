use fadeconfig::{ControlSpec, EaseSpec, SegmentSpec, UniformSpec, Variant};

/// Easing shape applied within a tween segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseCurve {
    Linear,
    Smoothstep,
    EaseInOut,
}

impl EaseCurve {
    pub fn sample(self, t: f32) -> f32 {
        let clamped = t.clamp(0.0, 1.0);
        match self {
            EaseCurve::Linear => clamped,
            EaseCurve::Smoothstep => clamped * clamped * (3.0 - 2.0 * clamped),
            EaseCurve::EaseInOut => {
                if clamped < 0.5 {
                    2.0 * clamped * clamped
                } else {
                    -1.0 + (4.0 - 2.0 * clamped) * clamped
                }
            }
        }
    }
}

impl From<EaseSpec> for EaseCurve {
    fn from(spec: EaseSpec) -> Self {
        match spec {
            EaseSpec::Linear => EaseCurve::Linear,
            EaseSpec::Smoothstep => EaseCurve::Smoothstep,
            EaseSpec::EaseInOut => EaseCurve::EaseInOut,
        }
    }
}

/// Tween of a uniform value over a progress span.
#[derive(Debug, Clone, Copy)]
pub struct TweenSegment {
    pub start: f32,
    pub end: f32,
    pub from: f32,
    pub to: f32,
    pub ease: EaseCurve,
}

impl TweenSegment {
    fn from_spec(spec: &SegmentSpec) -> Self {
        Self {
            start: spec.span[0],
            end: spec.span[1],
            from: spec.from,
            to: spec.to,
            ease: spec.ease.into(),
        }
    }

    fn sample(&self, progress: f32) -> f32 {
        let span = (self.end - self.start).max(f32::EPSILON);
        let t = self.ease.sample((progress - self.start) / span);
        self.from + (self.to - self.from) * t
    }
}

/// Live-edit range advertised to the debug-panel collaborator.
#[derive(Debug, Clone, Copy)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl From<ControlSpec> for ControlRange {
    fn from(spec: ControlSpec) -> Self {
        Self {
            min: spec.min,
            max: spec.max,
            step: spec.step,
        }
    }
}

/// One uniform driven as a function of timeline progress.
///
/// Segments are ordered and non-overlapping (config validation enforces
/// this). Sampling is total: before the first segment the track holds its
/// first `from` value, between and after segments it holds the last reached
/// `to`.
#[derive(Debug, Clone)]
pub struct UniformTrack {
    pub name: String,
    pub control: Option<ControlRange>,
    segments: Vec<TweenSegment>,
}

impl UniformTrack {
    fn from_spec(spec: &UniformSpec) -> Self {
        Self {
            name: spec.name.clone(),
            control: spec.control.map(ControlRange::from),
            segments: spec.segments.iter().map(TweenSegment::from_spec).collect(),
        }
    }

    pub fn sample(&self, progress: f32) -> f32 {
        let mut value = self.segments.first().map(|s| s.from).unwrap_or(0.0);
        for segment in &self.segments {
            if progress < segment.start {
                break;
            }
            if progress < segment.end {
                value = segment.sample(progress);
                break;
            }
            value = segment.to;
        }
        value
    }
}

/// Sampled uniform value for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformValue {
    pub name: String,
    pub value: f32,
}

/// A shader variant's parameter tweens, compiled from configuration.
///
/// The profile is the pluggable `progress -> {mix, distortion, ...}` mapping:
/// variants differ only in which tracks exist and how they ease, never in
/// code.
#[derive(Debug, Clone)]
pub struct VariantProfile {
    name: String,
    tracks: Vec<UniformTrack>,
}

impl VariantProfile {
    pub fn from_config(name: &str, variant: &Variant) -> Self {
        Self {
            name: name.to_string(),
            tracks: variant.uniforms.iter().map(UniformTrack::from_spec).collect(),
        }
    }

    /// The simplest profile: a single linear mix ramp over the whole
    /// timeline.
    pub fn blend_only() -> Self {
        Self {
            name: "blend".to_string(),
            tracks: vec![UniformTrack {
                name: "uMix".to_string(),
                control: Some(ControlRange {
                    min: 0.0,
                    max: 1.0,
                    step: 0.01,
                }),
                segments: vec![TweenSegment {
                    start: 0.0,
                    end: 1.0,
                    from: 0.0,
                    to: 1.0,
                    ease: EaseCurve::Linear,
                }],
            }],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[UniformTrack] {
        &self.tracks
    }

    pub fn sample(&self, progress: f32) -> Vec<UniformValue> {
        self.tracks
            .iter()
            .map(|track| UniformValue {
                name: track.name.clone(),
                value: track.sample(progress),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_curve_increases_monotonically() {
        let curve = EaseCurve::Linear;
        let mut last = 0.0;
        for step in 0..=10 {
            let sample = curve.sample(step as f32 / 10.0);
            assert!(sample >= last - f32::EPSILON);
            last = sample;
        }
    }

    #[test]
    fn smoothstep_matches_expected_values() {
        let curve = EaseCurve::Smoothstep;
        assert!((curve.sample(0.0) - 0.0).abs() < 1e-6);
        assert!((curve.sample(0.5) - 0.5).abs() < 1e-6);
        assert!((curve.sample(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_accelerates_then_decelerates() {
        let curve = EaseCurve::EaseInOut;
        let first = curve.sample(0.25);
        let mid = curve.sample(0.5);
        let last = curve.sample(0.75);
        assert!(first < mid);
        assert!(last > mid);
        assert!((curve.sample(0.0) - 0.0).abs() < 1e-6);
        assert!((curve.sample(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn track_extends_constantly_outside_segments() {
        let track = UniformTrack {
            name: "uDistortion".into(),
            control: None,
            segments: vec![TweenSegment {
                start: 0.2,
                end: 0.6,
                from: 6.0,
                to: 1.0,
                ease: EaseCurve::Linear,
            }],
        };
        assert!((track.sample(0.0) - 6.0).abs() < 1e-6);
        assert!((track.sample(0.4) - 3.5).abs() < 1e-6);
        assert!((track.sample(0.9) - 1.0).abs() < 1e-6);
        assert!((track.sample(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn two_stage_track_holds_between_segments() {
        let track = UniformTrack {
            name: "uPower".into(),
            control: None,
            segments: vec![
                TweenSegment {
                    start: 0.0,
                    end: 0.3,
                    from: 0.0,
                    to: 2.0,
                    ease: EaseCurve::Linear,
                },
                TweenSegment {
                    start: 0.7,
                    end: 1.0,
                    from: 2.0,
                    to: 4.0,
                    ease: EaseCurve::Linear,
                },
            ],
        };
        assert!((track.sample(0.15) - 1.0).abs() < 1e-6);
        assert!((track.sample(0.5) - 2.0).abs() < 1e-6);
        assert!((track.sample(1.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn blend_only_profile_tracks_progress_linearly() {
        let profile = VariantProfile::blend_only();
        let sampled = profile.sample(0.35);
        assert_eq!(sampled.len(), 1);
        assert_eq!(sampled[0].name, "uMix");
        assert!((sampled[0].value - 0.35).abs() < 1e-6);
    }

    #[test]
    fn profile_compiles_from_config() {
        let config = fadeconfig::FadeConfig::from_toml_str(
            r#"
version = 1

[[textures]]
name = "tex1"
path = "a.jpg"

[variants.twirl]

[[variants.twirl.uniforms]]
name = "uMix"
[[variants.twirl.uniforms.segments]]
span = [0.2, 1.0]
from = 0.0
to = 1.0
ease = "smoothstep"

[[variants.twirl.uniforms]]
name = "uDistortion"
control = { min = 0.0, max = 8.0, step = 0.1 }
[[variants.twirl.uniforms.segments]]
span = [0.0, 0.4]
from = 6.0
to = 1.0
ease = "ease-in-out"
"#,
        )
        .expect("config");

        let profile = VariantProfile::from_config("twirl", config.variant("twirl").unwrap());
        assert_eq!(profile.name(), "twirl");
        assert_eq!(profile.tracks().len(), 2);

        let sampled = profile.sample(0.0);
        assert!((sampled[0].value - 0.0).abs() < 1e-6);
        assert!((sampled[1].value - 6.0).abs() < 1e-6);

        let sampled = profile.sample(1.0);
        assert!((sampled[0].value - 1.0).abs() < 1e-6);
        assert!((sampled[1].value - 1.0).abs() < 1e-6);

        let control = profile.tracks()[1].control.expect("control range");
        assert!((control.max - 8.0).abs() < 1e-6);
    }
}
