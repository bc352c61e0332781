//! Conversion of path commands into closed rings.

use inkgeo_types::cartesian::Point2d;
use inkgeo_types::impls::Ring;

use crate::diagnostic::{Diagnostic, DiagnosticKind, Reported};
use crate::flatten::{CubicCurve, CurveFlattener};
use crate::options::ConversionOptions;
use crate::path::{to_absolute, AbsoluteCommand, PathCommand};

/// Builds rings from path commands, one ring per subpath.
#[derive(Debug, Clone, Copy)]
pub struct RingAssembler {
    flattener: CurveFlattener,
}

impl RingAssembler {
    /// Creates a new assembler using the given curve flattener.
    pub fn new(flattener: CurveFlattener) -> Self {
        Self { flattener }
    }

    /// Creates a new assembler configured by the options.
    pub fn from_options(options: &ConversionOptions) -> Self {
        Self::new(CurveFlattener::new(
            options.flatness_tolerance(),
            options.max_subdivision_depth(),
        ))
    }

    /// Converts path commands into rings.
    ///
    /// Every `MoveTo` starts a new subpath. Subpaths resolving to fewer than 2 points are dropped with a
    /// [`DiagnosticKind::DegenerateRing`] diagnostic.
    pub fn assemble(&self, commands: &[PathCommand]) -> Reported<Vec<Ring<Point2d>>> {
        let absolute = to_absolute(commands);
        let mut rings = vec![];
        let mut diagnostics = vec![];

        for subpath in split_subpaths(&absolute) {
            let points = self.approximate_subpath(subpath);
            match Ring::new(points) {
                Ok(ring) => rings.push(ring),
                Err(err) => diagnostics.push(Diagnostic::new(
                    DiagnosticKind::DegenerateRing,
                    None,
                    err.to_string(),
                )),
            }
        }

        Reported::new(rings, diagnostics)
    }

    /// Flattens one subpath into a point sequence (not closed yet).
    fn approximate_subpath(&self, subpath: &[AbsoluteCommand]) -> Vec<Point2d> {
        let mut start = Point2d::new(0.0, 0.0);
        let first_point = subpath
            .first()
            .and_then(AbsoluteCommand::end)
            .unwrap_or(start);
        let mut previous_c2 = None;
        let mut points = vec![];

        for command in subpath {
            match *command {
                AbsoluteCommand::CubicCurve { c1, c2, end } => {
                    let curve = match c1 {
                        Some(c1) => CubicCurve::new(start, c1, c2, end),
                        None => CubicCurve::smooth(start, previous_c2, c2, end),
                    };
                    points.extend(self.flattener.flatten(&curve));
                    previous_c2 = Some(c2);
                }
                AbsoluteCommand::ClosePath => {
                    points.push(first_point);
                    previous_c2 = None;
                }
                AbsoluteCommand::MoveTo(p) | AbsoluteCommand::LineTo(p) => {
                    points.push(p);
                    previous_c2 = None;
                }
            }

            start = command.end().unwrap_or(first_point);
        }

        points
    }
}

/// Splits commands into subpaths, each starting at a `MoveTo`. Commands before the first `MoveTo` form a subpath of
/// their own.
fn split_subpaths(commands: &[AbsoluteCommand]) -> impl Iterator<Item = &[AbsoluteCommand]> {
    let mut rest = commands;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let len = rest[1..]
            .iter()
            .position(|c| matches!(c, AbsoluteCommand::MoveTo(_)))
            .map_or(rest.len(), |i| i + 1);
        let (subpath, tail) = rest.split_at(len);
        rest = tail;
        Some(subpath)
    })
}

#[cfg(test)]
mod tests {
    use inkgeo_types::cartesian::CartesianPoint2d;
    use inkgeo_types::contour::CartesianContour;

    use super::*;
    use crate::path::{PathOp, PathPoint};

    fn assembler() -> RingAssembler {
        RingAssembler::from_options(&ConversionOptions::default())
    }

    fn p(x: f64, y: f64) -> Point2d {
        Point2d::new(x, y)
    }

    #[test]
    fn square_with_close_path() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(10.0, 0.0),
            PathCommand::line_to(10.0, 10.0),
            PathCommand::line_to(0.0, 10.0),
            PathCommand::close(),
        ];

        let reported = assembler().assemble(&commands);
        assert!(reported.is_clean());
        assert_eq!(reported.value.len(), 1);
        assert_eq!(
            reported.value[0].points(),
            &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn unclosed_subpath_is_closed() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(10.0, 0.0),
            PathCommand::line_to(10.0, 10.0),
        ];

        let ring = &assembler().assemble(&commands).value[0];
        assert_eq!(ring.points().first(), ring.points().last());
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn every_move_to_starts_a_ring() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(10.0, 0.0),
            PathCommand::line_to(10.0, 10.0),
            PathCommand::close(),
            PathCommand::move_to(2.0, 2.0),
            PathCommand::line_to(4.0, 0.0).relative(),
            PathCommand::line_to(0.0, 4.0).relative(),
            PathCommand::close(),
        ];

        let rings = assembler().assemble(&commands).value;
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[1].points()[1], p(6.0, 2.0));
        assert_eq!(rings[1].points()[2], p(6.0, 6.0));
    }

    #[test]
    fn lone_move_to_is_degenerate() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(10.0, 0.0),
            PathCommand::line_to(10.0, 10.0),
            PathCommand::move_to(50.0, 50.0),
        ];

        let reported = assembler().assemble(&commands);
        assert_eq!(reported.value.len(), 1);
        assert_eq!(reported.diagnostics.len(), 1);
        assert_eq!(
            reported.diagnostics[0].kind(),
            DiagnosticKind::DegenerateRing
        );
    }

    #[test]
    fn curves_are_flattened() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::cubic_to((0.0, -10.0), (10.0, -10.0), (10.0, 0.0)),
            PathCommand::smooth_cubic_to((0.0, 10.0), (0.0, 0.0)),
        ];

        let ring = &assembler().assemble(&commands).value[0];
        assert!(ring.len() > 10);
        assert_eq!(ring.points().last(), Some(&p(0.0, 0.0)));

        // the smooth curve mirrors (10, -10) through (10, 0), so the shape bulges on both sides of the x axis
        let envelope = ring.envelope().unwrap();
        assert!(envelope.y_min() < -5.0);
        assert!(envelope.y_max() > 5.0);
    }

    #[test]
    fn smooth_curve_after_line_starts_at_current_point() {
        let commands = [
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(10.0, 0.0),
            PathCommand::smooth_cubic_to((10.0, 10.0), (10.0, 10.0)),
        ];

        // c1 = start, c2 = end: the curve is a straight line
        let ring = &assembler().assemble(&commands).value[0];
        let points = ring.points();
        assert_eq!(points[1], p(10.0, 0.0));
        assert_eq!(points[points.len() - 2], p(10.0, 10.0));
        assert!(points[1..points.len() - 1].iter().all(|p| p.x() == 10.0));
    }

    #[test]
    fn horizontal_and_vertical_lines() {
        let commands = [
            PathCommand::move_to(1.0, 1.0),
            PathOp::LineTo(PathPoint::x(4.0)).into(),
            PathOp::LineTo(PathPoint::y(4.0)).into(),
            PathOp::LineTo(PathPoint::x(1.0)).into(),
            PathCommand::close(),
        ];

        let ring = &assembler().assemble(&commands).value[0];
        assert_eq!(ring.area_signed(), 9.0);
    }
}
