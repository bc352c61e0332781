use serde::{Deserialize, Serialize};

const DEFAULT_FLATNESS_TOLERANCE: f64 = 0.01;
const DEFAULT_MAX_SUBDIVISION_DEPTH: u32 = 24;
const DEFAULT_PROJECTION_EPSILON: f64 = 1e-12;
const DEFAULT_MAX_PROJECTION_ITERATIONS: usize = 100;

/// Configuration of the conversion pipeline.
///
/// The defaults are the values the algorithms are tuned for. Options can be loaded from a file with `serde`:
/// missing fields take default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    flatness_tolerance: f64,
    max_subdivision_depth: u32,
    projection_epsilon: f64,
    max_projection_iterations: usize,
    unloop_rings: bool,
    deduplicate: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            flatness_tolerance: DEFAULT_FLATNESS_TOLERANCE,
            max_subdivision_depth: DEFAULT_MAX_SUBDIVISION_DEPTH,
            projection_epsilon: DEFAULT_PROJECTION_EPSILON,
            max_projection_iterations: DEFAULT_MAX_PROJECTION_ITERATIONS,
            unloop_rings: false,
            deduplicate: true,
        }
    }
}

impl ConversionOptions {
    /// Maximum value of the flatness measure `u + v` for a curve to be replaced by its chord.
    pub fn flatness_tolerance(&self) -> f64 {
        self.flatness_tolerance
    }

    /// Sets maximum value of the flatness measure for a curve to be replaced by its chord.
    pub fn with_flatness_tolerance(mut self, tolerance: f64) -> Self {
        self.flatness_tolerance = tolerance;
        self
    }

    /// Recursion limit of curve subdivision. Reaching it emits the curve end point without further splitting.
    pub fn max_subdivision_depth(&self) -> u32 {
        self.max_subdivision_depth
    }

    /// Sets recursion limit of curve subdivision.
    pub fn with_max_subdivision_depth(mut self, depth: u32) -> Self {
        self.max_subdivision_depth = depth;
        self
    }

    /// Residual tolerance of the inverse projection solver, in projection domain units.
    pub fn projection_epsilon(&self) -> f64 {
        self.projection_epsilon
    }

    /// Sets residual tolerance of the inverse projection solver.
    pub fn with_projection_epsilon(mut self, epsilon: f64) -> Self {
        self.projection_epsilon = epsilon;
        self
    }

    /// Iteration limit of the inverse projection solver.
    pub fn max_projection_iterations(&self) -> usize {
        self.max_projection_iterations
    }

    /// Sets iteration limit of the inverse projection solver.
    pub fn with_max_projection_iterations(mut self, iterations: usize) -> Self {
        self.max_projection_iterations = iterations;
        self
    }

    /// If set, every projected ring is collapsed to the outline of its largest face before containment analysis.
    pub fn unloop_rings(&self) -> bool {
        self.unloop_rings
    }

    /// Sets whether projected rings are collapsed to their largest face.
    pub fn with_unloop_rings(mut self, unloop: bool) -> Self {
        self.unloop_rings = unloop;
        self
    }

    /// If set, exact duplicate rings and polygons of a group are dropped.
    pub fn deduplicate(&self) -> bool {
        self.deduplicate
    }

    /// Sets whether exact duplicates are dropped.
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{ "unloop_rings": true, "flatness_tolerance": 0.5 }"#).unwrap();
        assert!(options.unloop_rings());
        assert_eq!(options.flatness_tolerance(), 0.5);
        assert_eq!(options.max_projection_iterations(), 100);
        assert!(options.deduplicate());
    }
}
