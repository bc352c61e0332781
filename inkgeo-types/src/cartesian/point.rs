use approx::AbsDiffEq;
use num_traits::{Float, One};
use serde::{Deserialize, Serialize};

/// Point in 2d cartesian coordinates. This trait is implemented for [`Point2`], for
/// [`GeoPoint2d`](crate::geo::GeoPoint2d) (with `x` being longitude and `y` latitude) and for
/// `geo_types::Coord`.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Float;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        self.sub(other).magnitude_sq()
    }

    /// Point halfway between `self` and `other`.
    fn midpoint(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Point2<Self::Num> {
        let two = Self::Num::one() + Self::Num::one();
        Point2::new((self.x() + other.x()) / two, (self.y() + other.y()) / two)
    }
}

/// Point type that can be constructed from its cartesian coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> + Sized {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;

    /// Creates a new point with the coordinates of `other`.
    fn from_point(other: &impl CartesianPoint2d<Num = Num>) -> Self {
        Self::new(other.x(), other.y())
    }
}

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

impl<Num: Float> Point2<Num> {
    /// Reflects `self` through `mirror`.
    ///
    /// The distance between the points is measured per axis and added to `mirror` on the side opposite to `self`,
    /// so a point that coincides with `mirror` on an axis stays on it.
    pub fn reflect(&self, mirror: &impl CartesianPoint2d<Num = Num>) -> Self {
        let reflect_axis = |value: Num, mirror: Num| {
            let distance = (mirror - value).abs();
            if mirror >= value {
                mirror + distance
            } else {
                mirror - distance
            }
        };

        Self::new(
            reflect_axis(self.x, mirror.x()),
            reflect_axis(self.y, mirror.y()),
        )
    }
}

impl<Num: Float> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: Float> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2 { x, y }
    }
}

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Z component of the cross product of two vectors lying in the XY plane.
    pub fn cross(&self, other: &Self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Dot product of two vectors.
    pub fn dot(&self, other: &Self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * other.dx + self.dy * other.dy
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num> std::ops::Add<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vector2<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vector2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

/// Shorthand for [`Point2`] with `f64` coordinates.
pub type Point2d = Point2<f64>;
