//! Drawing-space path commands.

use inkgeo_types::cartesian::{CartesianPoint2d, Point2d};
use serde::{Deserialize, Serialize};

/// Point of a path command. A missing axis continues the current point on that axis (e.g. horizontal and vertical
/// line commands give only one coordinate).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathPoint {
    /// X coordinate, if given.
    pub x: Option<f64>,
    /// Y coordinate, if given.
    pub y: Option<f64>,
}

impl PathPoint {
    /// Point with both coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Point with only the X coordinate.
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    /// Point with only the Y coordinate.
    pub fn y(y: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    /// Resolves the point against the current point. Missing axes take the current point's value, given axes are
    /// added to it if `relative` is set.
    pub fn resolve(&self, current: &Point2d, relative: bool) -> Point2d {
        let axis = |value: Option<f64>, current: f64| match value {
            None => current,
            Some(v) if relative => v + current,
            Some(v) => v,
        };

        Point2d::new(axis(self.x, current.x()), axis(self.y, current.y()))
    }
}

impl From<Point2d> for PathPoint {
    fn from(value: Point2d) -> Self {
        Self::new(value.x(), value.y())
    }
}

/// Path operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathOp {
    /// Starts a new subpath.
    MoveTo(PathPoint),
    /// Straight line to the point.
    LineTo(PathPoint),
    /// Cubic Bézier curve. Absent first control point means smooth continuation of the previous curve.
    CubicCurve {
        /// First control point.
        c1: Option<PathPoint>,
        /// Second control point.
        c2: PathPoint,
        /// End point.
        end: PathPoint,
    },
    /// Closes the current subpath.
    ClosePath,
}

/// Path command: an operation with coordinates that are either absolute or relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathCommand {
    /// Operation.
    pub op: PathOp,
    /// Coordinates are relative to the current point.
    pub relative: bool,
}

impl PathCommand {
    /// Absolute move.
    pub fn move_to(x: f64, y: f64) -> Self {
        PathOp::MoveTo(PathPoint::new(x, y)).into()
    }

    /// Absolute line.
    pub fn line_to(x: f64, y: f64) -> Self {
        PathOp::LineTo(PathPoint::new(x, y)).into()
    }

    /// Absolute curve with both control points.
    pub fn cubic_to(c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        PathOp::CubicCurve {
            c1: Some(PathPoint::new(c1.0, c1.1)),
            c2: PathPoint::new(c2.0, c2.1),
            end: PathPoint::new(end.0, end.1),
        }
        .into()
    }

    /// Absolute smooth curve continuing the previous one.
    pub fn smooth_cubic_to(c2: (f64, f64), end: (f64, f64)) -> Self {
        PathOp::CubicCurve {
            c1: None,
            c2: PathPoint::new(c2.0, c2.1),
            end: PathPoint::new(end.0, end.1),
        }
        .into()
    }

    /// Closes the subpath.
    pub fn close() -> Self {
        PathOp::ClosePath.into()
    }

    /// Marks the command coordinates as relative.
    pub fn relative(mut self) -> Self {
        self.relative = true;
        self
    }
}

impl From<PathOp> for PathCommand {
    fn from(op: PathOp) -> Self {
        Self {
            op,
            relative: false,
        }
    }
}

/// Path command with resolved absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbsoluteCommand {
    /// Starts a new subpath.
    MoveTo(Point2d),
    /// Straight line.
    LineTo(Point2d),
    /// Cubic curve. `c1` is `None` for smooth continuation.
    CubicCurve {
        /// First control point.
        c1: Option<Point2d>,
        /// Second control point.
        c2: Point2d,
        /// End point.
        end: Point2d,
    },
    /// Closes the subpath.
    ClosePath,
}

impl AbsoluteCommand {
    /// End point of the command. `None` for `ClosePath`, which ends at the subpath start.
    pub fn end(&self) -> Option<Point2d> {
        match self {
            AbsoluteCommand::MoveTo(p) | AbsoluteCommand::LineTo(p) => Some(*p),
            AbsoluteCommand::CubicCurve { end, .. } => Some(*end),
            AbsoluteCommand::ClosePath => None,
        }
    }
}

/// Resolves relative coordinates and missing axes of the commands to absolute points.
///
/// The current point starts at the origin and moves to the end of every command. `ClosePath` moves it back to the
/// start of the subpath.
pub fn to_absolute(commands: &[PathCommand]) -> Vec<AbsoluteCommand> {
    let mut current = Point2d::new(0.0, 0.0);
    let mut subpath_start = current;
    let mut result = Vec::with_capacity(commands.len());

    for command in commands {
        let relative = command.relative;
        let resolved = match command.op {
            PathOp::MoveTo(p) => {
                let p = p.resolve(&current, relative);
                subpath_start = p;
                AbsoluteCommand::MoveTo(p)
            }
            PathOp::LineTo(p) => AbsoluteCommand::LineTo(p.resolve(&current, relative)),
            PathOp::CubicCurve { c1, c2, end } => AbsoluteCommand::CubicCurve {
                c1: c1
                    .filter(|c| c.x.is_some() || c.y.is_some())
                    .map(|c| c.resolve(&current, relative)),
                c2: c2.resolve(&current, relative),
                end: end.resolve(&current, relative),
            },
            PathOp::ClosePath => AbsoluteCommand::ClosePath,
        };

        current = resolved.end().unwrap_or(subpath_start);
        result.push(resolved);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_and_missing_axes() {
        let commands = [
            PathCommand::move_to(10.0, 10.0),
            PathOp::LineTo(PathPoint::x(5.0)).into(),
            PathCommand::from(PathOp::LineTo(PathPoint::y(3.0))).relative(),
            PathCommand::line_to(-1.0, -1.0).relative(),
        ];

        let resolved = to_absolute(&commands);
        assert_eq!(
            resolved,
            vec![
                AbsoluteCommand::MoveTo(Point2d::new(10.0, 10.0)),
                AbsoluteCommand::LineTo(Point2d::new(5.0, 10.0)),
                AbsoluteCommand::LineTo(Point2d::new(5.0, 13.0)),
                AbsoluteCommand::LineTo(Point2d::new(4.0, 12.0)),
            ]
        );
    }

    #[test]
    fn relative_curve_control_points() {
        let commands = [
            PathCommand::move_to(10.0, 10.0),
            PathCommand::cubic_to((1.0, 1.0), (2.0, 2.0), (3.0, 0.0)).relative(),
            PathCommand::smooth_cubic_to((1.0, 1.0), (2.0, 0.0)).relative(),
        ];

        let resolved = to_absolute(&commands);
        assert_eq!(
            resolved[1],
            AbsoluteCommand::CubicCurve {
                c1: Some(Point2d::new(11.0, 11.0)),
                c2: Point2d::new(12.0, 12.0),
                end: Point2d::new(13.0, 10.0),
            }
        );
        assert_eq!(
            resolved[2],
            AbsoluteCommand::CubicCurve {
                c1: None,
                c2: Point2d::new(14.0, 11.0),
                end: Point2d::new(15.0, 10.0),
            }
        );
    }

    #[test]
    fn close_path_returns_to_subpath_start() {
        let commands = [
            PathCommand::move_to(1.0, 1.0),
            PathCommand::line_to(5.0, 1.0),
            PathCommand::close(),
            PathCommand::line_to(1.0, 2.0).relative(),
        ];

        let resolved = to_absolute(&commands);
        assert_eq!(resolved[3], AbsoluteCommand::LineTo(Point2d::new(2.0, 3.0)));
    }
}
