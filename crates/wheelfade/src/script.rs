use std::path::Path;

use anyhow::{bail, Context, Result};

/// Parses a scroll script: one signed wheel delta per line. Blank lines are
/// skipped and `#` starts a comment. Deltas must be finite; `nan` and `inf`
/// parse as floats but make no sense as wheel input.
pub fn parse_script(input: &str) -> Result<Vec<f32>> {
    let mut deltas = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let trimmed = line.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }
        let delta: f32 = trimmed.parse().with_context(|| {
            format!("invalid wheel delta '{trimmed}' on line {}", number + 1)
        })?;
        if !delta.is_finite() {
            bail!("non-finite wheel delta '{trimmed}' on line {}", number + 1);
        }
        deltas.push(delta);
    }
    Ok(deltas)
}

pub fn load_script(path: &Path) -> Result<Vec<f32>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scroll script at {}", path.display()))?;
    parse_script(&contents)
}

/// Built-in demonstration: a forward sweep across one cycle boundary, then a
/// reversal back across it. Steps are an exact eighth of the sensitivity so
/// the sweep lands cleanly on the timeline boundaries.
pub fn demo_sweep(scroll_scale: f32) -> Vec<f32> {
    let step = scroll_scale / 8.0;
    let mut deltas = vec![-step; 10];
    deltas.extend(std::iter::repeat(step).take(12));
    deltas
}
