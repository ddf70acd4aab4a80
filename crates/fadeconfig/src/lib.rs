use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Easing applied within a single tween segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EaseSpec {
    Linear,
    Smoothstep,
    EaseInOut,
}

impl Default for EaseSpec {
    fn default() -> Self {
        Self::Linear
    }
}

/// Top-level fade configuration: the texture ring, scroll sensitivity, and
/// the named shader variants the driver can be pointed at.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FadeConfig {
    pub version: u32,
    #[serde(default = "default_scroll_scale")]
    pub scroll_scale: f32,
    #[serde(default)]
    pub textures: Vec<TextureEntry>,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub variants: BTreeMap<String, Variant>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Defaults {
    pub variant: Option<String>,
}

/// One slot of the texture ring. List order defines the cycle order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextureEntry {
    pub name: String,
    pub path: PathBuf,
}

/// A shader variant expressed as data: which uniforms exist and how each one
/// tweens as a function of timeline progress.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Variant {
    #[serde(default)]
    pub uniforms: Vec<UniformSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UniformSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<ControlSpec>,
    #[serde(default)]
    pub segments: Vec<SegmentSpec>,
}

/// Live-edit range advertised to a debug-panel collaborator.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ControlSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

/// Tween over a progress span. Outside its span the segment extends
/// constantly (`from` before, `to` after).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SegmentSpec {
    pub span: [f32; 2],
    pub from: f32,
    pub to: f32,
    #[serde(default)]
    pub ease: EaseSpec,
}

fn default_scroll_scale() -> f32 {
    20_000.0
}

impl FadeConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: FadeConfig = toml::from_str(input)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.get(name)
    }

    pub fn default_variant(&self) -> Option<&str> {
        self.defaults.variant.as_deref()
    }

    /// Ordered slot names of the texture ring.
    pub fn texture_names(&self) -> Vec<String> {
        self.textures.iter().map(|t| t.name.clone()).collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 1 {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {}; expected 1",
                self.version
            )));
        }

        if self.textures.is_empty() {
            return Err(ConfigError::Invalid(
                "config must define at least one texture; the ring may not be empty".into(),
            ));
        }

        if !(self.scroll_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scroll_scale must be positive, got {}",
                self.scroll_scale
            )));
        }

        let mut seen = std::collections::BTreeSet::new();
        for texture in &self.textures {
            if texture.name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "texture entries must have a non-empty name".into(),
                ));
            }
            if texture.path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "texture '{}' must have a non-empty path",
                    texture.name
                )));
            }
            if !seen.insert(texture.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "texture name '{}' appears more than once",
                    texture.name
                )));
            }
        }

        if self.variants.is_empty() {
            return Err(ConfigError::Invalid(
                "config must define at least one variant".into(),
            ));
        }

        for (name, variant) in &self.variants {
            variant
                .validate()
                .map_err(|msg| ConfigError::Invalid(format!("variant '{name}': {msg}")))?;
        }

        if let Some(default_variant) = &self.defaults.variant {
            if !self.variants.contains_key(default_variant) {
                return Err(ConfigError::Invalid(format!(
                    "defaults.variant references unknown variant '{default_variant}'"
                )));
            }
        }

        Ok(())
    }
}

impl Variant {
    fn validate(&self) -> Result<(), String> {
        if self.uniforms.is_empty() {
            return Err("must declare at least one uniform".into());
        }

        let mut seen = std::collections::BTreeSet::new();
        for uniform in &self.uniforms {
            if uniform.name.trim().is_empty() {
                return Err("uniform names must be non-empty".into());
            }
            if !seen.insert(uniform.name.as_str()) {
                return Err(format!("uniform '{}' appears more than once", uniform.name));
            }
            uniform
                .validate()
                .map_err(|msg| format!("uniform '{}': {msg}", uniform.name))?;
        }
        Ok(())
    }
}

impl UniformSpec {
    fn validate(&self) -> Result<(), String> {
        if self.segments.is_empty() {
            return Err("must declare at least one tween segment".into());
        }

        let mut cursor = 0.0_f32;
        for segment in &self.segments {
            let [start, end] = segment.span;
            if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
                return Err(format!("segment span [{start}, {end}] must lie within [0, 1]"));
            }
            if start >= end {
                return Err(format!(
                    "segment span [{start}, {end}] must have start < end"
                ));
            }
            if start < cursor {
                return Err("segments must be sorted and non-overlapping".into());
            }
            cursor = end;
        }

        if let Some(control) = &self.control {
            if control.min > control.max {
                return Err(format!(
                    "control range min {} exceeds max {}",
                    control.min, control.max
                ));
            }
            if !(control.step > 0.0) {
                return Err(format!("control step must be positive, got {}", control.step));
            }
            for segment in &self.segments {
                for value in [segment.from, segment.to] {
                    if value < control.min || value > control.max {
                        return Err(format!(
                            "segment value {} falls outside control range [{}, {}]",
                            value, control.min, control.max
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
