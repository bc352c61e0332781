use std::f64::consts::{FRAC_PI_2, PI};
use std::marker::PhantomData;

use crate::cartesian::{CartesianPoint2d, Envelope, NewCartesianPoint2d};
use crate::geo::point::NewGeoPoint;
use crate::geo::projection::Projection;

/// Canonical domain of the Winkel Tripel projection with standard parallel `acos(2/π)`.
pub const WINKEL_TRIPEL_ENVELOPE: Envelope = Envelope {
    x_min: -(PI + 2.0) / 2.0,
    x_max: (PI + 2.0) / 2.0,
    y_min: -FRAC_PI_2,
    y_max: FRAC_PI_2,
};

const COS_PHI1: f64 = 2.0 / PI;
const DEFAULT_EPSILON: f64 = 1e-12;
const DEFAULT_MAX_ITERATIONS: usize = 100;

/// How an inverse projection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionStatus {
    /// Residual of the forward projection fell within the tolerance.
    Converged {
        /// Number of Newton steps taken.
        iterations: usize,
    },
    /// The target is the origin of the projection domain. No iterations were made.
    Origin,
    /// `sin α` became zero, so the Jacobian could not be evaluated. The estimate is the last iterate.
    SingularJacobian {
        /// Number of Newton steps taken before the singularity.
        iterations: usize,
    },
    /// Iteration limit was exhausted. The estimate is the last iterate.
    NotConverged,
}

impl InversionStatus {
    /// Returns true if the result can be trusted to the configured tolerance.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Converged { .. } | Self::Origin)
    }
}

/// Result of [`WinkelTripel::solve`]: the best estimate and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inversion<P> {
    /// Geographic point. For inexact statuses this is the best estimate.
    pub point: P,
    /// Outcome of the solver.
    pub status: InversionStatus,
}

/// Winkel Tripel projection of a unit sphere.
///
/// Forward projection is closed-form. Inverse projection has no closed form and is found with Newton-Raphson
/// iterations on the forward equations, starting from the target coordinates themselves.
#[derive(Debug, Copy, Clone)]
pub struct WinkelTripel<In, Out> {
    epsilon: f64,
    max_iterations: usize,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Default for WinkelTripel<In, Out> {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS)
    }
}

impl<In, Out> WinkelTripel<In, Out> {
    /// Creates a projection with the given residual tolerance and iteration limit for the inverse solver.
    pub fn new(epsilon: f64, max_iterations: usize) -> Self {
        Self {
            epsilon,
            max_iterations,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }

    /// Residual tolerance of the inverse solver.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Iteration limit of the inverse solver.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Forward equations: `(λ, φ)` in radians to the projection domain.
    ///
    /// Returns `None` where `α = π` (the antipode of the projection center).
    pub fn forward(lambda: f64, phi: f64) -> Option<(f64, f64)> {
        let terms = Terms::new(lambda, phi);
        if terms.sin_alpha_sq == 0.0 {
            if terms.alpha != 0.0 {
                return None;
            }

            // α / sin α tends to 1 near the center
            return Some((
                0.5 * (2.0 * terms.cos_phi * terms.sin_half_lambda + lambda * COS_PHI1),
                0.5 * (terms.sin_phi + phi),
            ));
        }

        Some(terms.forward(lambda, phi))
    }
}

impl<In: NewGeoPoint<f64>, Out> WinkelTripel<In, Out> {
    /// Inverts the projection for a point in the projection domain.
    ///
    /// Always returns an estimate. The status tells if it satisfies the configured tolerance.
    pub fn solve(&self, target: &impl CartesianPoint2d<Num = f64>) -> Inversion<In> {
        let (x, y) = (target.x(), target.y());
        if x.abs() < self.epsilon && y.abs() < self.epsilon {
            return Inversion {
                point: In::latlon(0.0, 0.0),
                status: InversionStatus::Origin,
            };
        }

        let mut lambda = x;
        let mut phi = y;

        for iteration in 0..self.max_iterations {
            let terms = Terms::new(lambda, phi);
            if terms.sin_alpha_sq == 0.0 {
                return Inversion {
                    point: to_degrees(lambda, phi),
                    status: InversionStatus::SingularJacobian {
                        iterations: iteration,
                    },
                };
            }

            let (fx, fy) = terms.forward(lambda, phi);
            let dx = fx - x;
            let dy = fy - y;
            if dx.abs() < self.epsilon && dy.abs() < self.epsilon {
                return Inversion {
                    point: to_degrees(lambda, reflect_latitude(phi)),
                    status: InversionStatus::Converged {
                        iterations: iteration,
                    },
                };
            }

            let jacobian = terms.jacobian();
            let det = jacobian.dx_dphi * jacobian.dy_dlambda - jacobian.dy_dphi * jacobian.dx_dlambda;
            if det == 0.0 || !det.is_finite() {
                return Inversion {
                    point: to_degrees(lambda, phi),
                    status: InversionStatus::SingularJacobian {
                        iterations: iteration,
                    },
                };
            }

            let delta_lambda = (dy * jacobian.dx_dphi - dx * jacobian.dy_dphi) / det;
            let delta_phi = (dx * jacobian.dy_dlambda - dy * jacobian.dx_dlambda) / det;

            phi -= delta_phi;
            lambda -= delta_lambda;
        }

        Inversion {
            point: to_degrees(lambda, phi),
            status: InversionStatus::NotConverged,
        }
    }
}

impl<In, Out> Projection for WinkelTripel<In, Out>
where
    In: NewGeoPoint<f64>,
    Out: NewCartesianPoint2d<f64>,
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &In) -> Option<Out> {
        let (x, y) = Self::forward(input.lon_rad(), input.lat_rad())?;
        Some(Out::new(x, y))
    }

    fn unproject(&self, input: &Out) -> Option<In> {
        let inversion = self.solve(input);
        inversion.status.is_exact().then_some(inversion.point)
    }
}

/// Trigonometric terms shared by the forward equations and their derivatives.
#[derive(Clone, Copy)]
struct Terms {
    sin_half_lambda: f64,
    cos_half_lambda: f64,
    sin_phi: f64,
    cos_phi: f64,
    alpha: f64,
    sin_alpha: f64,
    sin_alpha_sq: f64,
}

struct Jacobian {
    dx_dlambda: f64,
    dx_dphi: f64,
    dy_dlambda: f64,
    dy_dphi: f64,
}

impl Terms {
    fn new(lambda: f64, phi: f64) -> Self {
        let (sin_half_lambda, cos_half_lambda) = (lambda * 0.5).sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let cos_alpha = cos_phi * cos_half_lambda;
        let sin_alpha_sq = 1.0 - cos_alpha * cos_alpha;

        Self {
            sin_half_lambda,
            cos_half_lambda,
            sin_phi,
            cos_phi,
            alpha: cos_alpha.acos(),
            sin_alpha: sin_alpha_sq.sqrt(),
            sin_alpha_sq,
        }
    }

    fn forward(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let x = 0.5
            * (2.0 * self.cos_phi * self.sin_half_lambda * self.alpha / self.sin_alpha
                + lambda * COS_PHI1);
        let y = 0.5 * (self.alpha * self.sin_phi / self.sin_alpha + phi);
        (x, y)
    }

    fn jacobian(&self) -> Jacobian {
        let Self {
            sin_half_lambda: shl,
            cos_half_lambda: chl,
            sin_phi,
            cos_phi,
            alpha,
            sin_alpha,
            sin_alpha_sq,
        } = *self;

        Jacobian {
            dx_dphi: (shl * chl * sin_phi * cos_phi - alpha * sin_phi * shl / sin_alpha)
                / sin_alpha_sq,
            dx_dlambda: 0.5
                * ((cos_phi * cos_phi * shl * shl
                    + alpha * cos_phi * chl * sin_phi * sin_phi / sin_alpha)
                    / sin_alpha_sq
                    + COS_PHI1),
            dy_dphi: 0.5
                * ((sin_phi * sin_phi * chl + alpha * shl * shl * cos_phi / sin_alpha)
                    / sin_alpha_sq
                    + 1.0),
            dy_dlambda: 0.25
                * (sin_phi * cos_phi * shl
                    - alpha * sin_phi * cos_phi * cos_phi * shl * chl / sin_alpha)
                / sin_alpha_sq,
        }
    }
}

/// Folds a latitude overshooting a pole back into `[-π/2, π/2]`.
fn reflect_latitude(phi: f64) -> f64 {
    if phi > FRAC_PI_2 {
        phi - 2.0 * (phi - FRAC_PI_2)
    } else if phi < -FRAC_PI_2 {
        phi - 2.0 * (phi + FRAC_PI_2)
    } else {
        phi
    }
}

fn to_degrees<P: NewGeoPoint<f64>>(lambda: f64, phi: f64) -> P {
    P::lonlat(lambda.to_degrees(), phi.to_degrees())
}
