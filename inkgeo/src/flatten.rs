//! Approximation of cubic Bézier curves with polylines.

use inkgeo_types::cartesian::{CartesianPoint2d, Point2d};

/// Cubic Bézier curve with absolute control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    /// Start point.
    pub start: Point2d,
    /// First control point.
    pub c1: Point2d,
    /// Second control point.
    pub c2: Point2d,
    /// End point.
    pub end: Point2d,
}

impl CubicCurve {
    /// Creates a new curve.
    pub fn new(start: Point2d, c1: Point2d, c2: Point2d, end: Point2d) -> Self {
        Self { start, c1, c2, end }
    }

    /// Creates a curve continuing a previous one: the first control point is the reflection of the previous curve's
    /// second control point through `start`. Without a previous curve the first control point is `start` itself.
    pub fn smooth(start: Point2d, previous_c2: Option<Point2d>, c2: Point2d, end: Point2d) -> Self {
        let c1 = previous_c2.map_or(start, |prev| prev.reflect(&start));
        Self::new(start, c1, c2, end)
    }

    /// Flatness measure of the curve: squared maximum deviation of the control points from the chord, per axis,
    /// summed over the axes (scaled by 9).
    pub fn flatness(&self) -> f64 {
        let Self { start, c1, c2, end } = self;

        let ux = (3.0 * c1.x() - 2.0 * start.x() - end.x()).powi(2);
        let uy = (3.0 * c1.y() - 2.0 * start.y() - end.y()).powi(2);
        let vx = (3.0 * c2.x() - 2.0 * end.x() - start.x()).powi(2);
        let vy = (3.0 * c2.y() - 2.0 * end.y() - start.y()).powi(2);

        ux.max(vx) + uy.max(vy)
    }

    /// Returns true if all four points have finite coordinates.
    pub fn is_finite(&self) -> bool {
        [self.start, self.c1, self.c2, self.end]
            .iter()
            .all(|p| p.x().is_finite() && p.y().is_finite())
    }

    /// Splits the curve at `t = 0.5` (de Casteljau).
    pub fn split(&self) -> (CubicCurve, CubicCurve) {
        let mid1 = self.start.midpoint(&self.c1);
        let mid2 = self.c1.midpoint(&self.c2);
        let mid3 = self.c2.midpoint(&self.end);

        let mid12 = mid1.midpoint(&mid2);
        let mid23 = mid2.midpoint(&mid3);

        let mid123 = mid12.midpoint(&mid23);

        (
            CubicCurve::new(self.start, mid1, mid12, mid123),
            CubicCurve::new(mid123, mid23, mid3, self.end),
        )
    }
}

/// Recursive subdivision flattener.
#[derive(Debug, Clone, Copy)]
pub struct CurveFlattener {
    tolerance: f64,
    max_depth: u32,
}

impl CurveFlattener {
    /// Creates a flattener accepting sub-curves with [`CubicCurve::flatness`] not greater than `tolerance`. The
    /// recursion stops at `max_depth` even if the tolerance is not met.
    pub fn new(tolerance: f64, max_depth: u32) -> Self {
        Self {
            tolerance,
            max_depth,
        }
    }

    /// Returns the points approximating the curve, ending with `curve.end` and excluding `curve.start`.
    pub fn flatten(&self, curve: &CubicCurve) -> Vec<Point2d> {
        let mut points = vec![];
        self.subdivide(curve, 0, &mut points);
        log::debug!(
            "Flattened curve {:?} -> {:?} into {} points",
            curve.start,
            curve.end,
            points.len()
        );
        points
    }

    fn subdivide(&self, curve: &CubicCurve, depth: u32, out: &mut Vec<Point2d>) {
        // NaN is swallowed by `max` in `flatness`, so finiteness is checked on the points
        if !curve.is_finite() || curve.flatness() <= self.tolerance || depth >= self.max_depth {
            out.push(curve.end);
            return;
        }

        let (left, right) = curve.split();
        self.subdivide(&left, depth + 1, out);
        self.subdivide(&right, depth + 1, out);
    }
}
