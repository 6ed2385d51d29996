//! Gradient style table construction.
//!
//! One style per density value, interpolated between two endpoint colors.
//! The table is built exactly once per run, from the first data record's
//! density, and stays immutable afterward.

use tracing::debug;

use overlay_common::color::Rgb;
use overlay_common::error::{OverlayError, OverlayResult};

/// Palette endpoints and fill alpha for a gradient run.
#[derive(Debug, Clone)]
pub struct GradientSpec {
    /// Color of the lowest-density style.
    pub start: Rgb,
    /// Color of the highest-density style.
    pub end: Rgb,
    /// Alpha applied to every polygon fill.
    pub fill_alpha: u8,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            start: Rgb::new(0, 0, 255),
            end: Rgb::new(0, 128, 0),
            fill_alpha: 0x88,
        }
    }
}

/// One rendering style in the gradient.
#[derive(Debug, Clone)]
pub struct GradientStep {
    /// Style identifier, `style-1`..`style-N`.
    pub id: String,
    pub fill: Rgb,
    pub fill_alpha: u8,
}

/// An immutable, ordered sequence of gradient steps.
///
/// Density value `d` maps to the step with id `style-<d>` (1-based).
#[derive(Debug, Clone)]
pub struct GradientTable {
    steps: Vec<GradientStep>,
}

impl GradientTable {
    /// Build a table of exactly `steps` styles interpolated in HSL space.
    ///
    /// The first step's color equals `spec.start` and the last equals
    /// `spec.end`; a single-step table carries the start color alone.
    pub fn build(steps: i64, spec: &GradientSpec) -> OverlayResult<Self> {
        if steps <= 0 {
            return Err(OverlayError::InvalidGradientSteps(steps));
        }

        let count = steps as usize;
        let mut table = Vec::with_capacity(count);
        for index in 0..count {
            let t = if count == 1 {
                0.0
            } else {
                index as f64 / (count - 1) as f64
            };
            table.push(GradientStep {
                id: format!("style-{}", index + 1),
                fill: spec.start.lerp_hsl(spec.end, t),
                fill_alpha: spec.fill_alpha,
            });
        }

        debug!(steps = count, "built gradient table");
        Ok(Self { steps: table })
    }

    /// Number of steps in the table.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in density order.
    pub fn steps(&self) -> &[GradientStep] {
        &self.steps
    }

    /// Resolve the style for a density value (1-based).
    ///
    /// Densities outside `1..=len` are an explicit error rather than being
    /// clamped, so gradient/data mismatches surface loudly.
    pub fn style_for(&self, density: i64) -> OverlayResult<&GradientStep> {
        if density < 1 || density as usize > self.steps.len() {
            return Err(OverlayError::StyleIndexOutOfRange {
                density,
                steps: self.steps.len(),
            });
        }
        Ok(&self.steps[density as usize - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_table() {
        let spec = GradientSpec::default();
        let table = GradientTable::build(1, &spec).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.steps()[0].fill, spec.start);
        assert_eq!(table.steps()[0].id, "style-1");
    }

    #[test]
    fn test_style_lookup_is_one_based() {
        let table = GradientTable::build(3, &GradientSpec::default()).unwrap();
        assert_eq!(table.style_for(1).unwrap().id, "style-1");
        assert_eq!(table.style_for(3).unwrap().id, "style-3");
        assert!(table.style_for(0).is_err());
        assert!(table.style_for(4).is_err());
    }
}
