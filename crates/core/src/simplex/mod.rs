//! Barycentric coordinates on the 2-simplex, and their projection into the
//! 2D drawing plane.
//!
//! ## Coordinate Systems
//!
//! A point on the simplex is a triple `(a, b, c)` of non-negative reals that
//! sum to a constant, usually 1. Each component is the "weight" of one corner
//! of the triangle. The projection used throughout this crate places the
//! corners like so:
//!
//! ```text
//!              (0, 0, 1)
//!                 /\
//!                /  \
//!               /    \
//!              /      \
//!   (1, 0, 0) +--------+ (0, 1, 0)
//! ```
//!
//! which in Cartesian terms is `x = b + c/2`, `y = c·√3/2`. The first
//! component never shows up in the formula; it's implied by the other two.
//!
//! Lattice points (see [simplex_points]) are integer triples summing to some
//! number of `steps`, and are projected the same way, so a lattice with `N`
//! steps spans a triangle with side length `N`.

mod lattice;

pub use self::lattice::*;

use crate::util::{unit::Point2, SUM_TOLERANCE};
use anyhow::bail;
use derive_more::Display;
use nalgebra::{Matrix2x3, Vector3};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// `√3 / 2`, the height of an equilateral triangle with side length 1
pub const SQRT3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// A point on the 2-simplex, in barycentric coordinates. The components
/// should be non-negative and sum to a constant (usually 1), but that isn't
/// enforced here because lattice points and partially-normalized data are
/// useful to project as well.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", a, b, c)]
pub struct Barycentric {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Barycentric {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Sum of all three components
    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Scale this point so its components sum to 1. A point whose components
    /// sum to 0 has no meaningful normalization, and will produce NaNs.
    pub fn normalized(self) -> Self {
        let sum = self.sum();
        Self::new(self.a / sum, self.b / sum, self.c / sum)
    }

    /// Do the components of this point sum to 1 (within float tolerance)?
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= SUM_TOLERANCE
    }

    /// Get the components as an array, in `[a, b, c]` order
    pub fn to_array(self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Project this point into the 2D drawing plane. See the module-level
    /// docs for a description of the projection.
    pub fn to_point2(self) -> Point2 {
        // The projection is linear, so it's just a matrix. Row 1 gives x,
        // row 2 gives y. The first component has no weight in either.
        let projection: Matrix2x3<f64> =
            Matrix2x3::new(0.0, 1.0, 0.5, 0.0, 0.0, SQRT3_OVER_2);
        (projection * Vector3::new(self.a, self.b, self.c)).into()
    }
}

impl From<[f64; 3]> for Barycentric {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl From<(f64, f64, f64)> for Barycentric {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self::new(a, b, c)
    }
}

impl From<(usize, usize, usize)> for Barycentric {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        Self::new(a as f64, b as f64, c as f64)
    }
}

// Raw numeric data has no guarantee on its length, so this is where arity
// gets checked
impl TryFrom<&[f64]> for Barycentric {
    type Error = anyhow::Error;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [a, b, c] => Ok(Self::new(*a, *b, *c)),
            _ => bail!(
                "Barycentric point must have exactly 3 components, \
                but got {}: {:?}",
                values.len(),
                values
            ),
        }
    }
}

/// Anything that can be projected from the simplex into the drawing plane.
/// A single point projects to a single [Point2]; a sequence of points
/// projects to two parallel coordinate sequences `(xs, ys)`, which is the
/// shape that line plotting wants.
pub trait Project {
    type Output;

    fn project(&self) -> Self::Output;
}

impl Project for Barycentric {
    type Output = Point2;

    fn project(&self) -> Self::Output {
        self.to_point2()
    }
}

impl<P: Copy + Into<Barycentric>> Project for [P] {
    type Output = (Vec<f64>, Vec<f64>);

    fn project(&self) -> Self::Output {
        self.iter()
            .map(|point| {
                let point2 = project_point(*point);
                (point2.x, point2.y)
            })
            .unzip()
    }
}

impl<P: Copy + Into<Barycentric>> Project for Vec<P> {
    type Output = (Vec<f64>, Vec<f64>);

    fn project(&self) -> Self::Output {
        self.as_slice().project()
    }
}

/// Project a single point, or a sequence of points, into the drawing plane.
/// See [Project] for the shape of the output.
///
/// ```
/// use ternary::{project, Barycentric};
///
/// let corner = project(&Barycentric::new(0.0, 1.0, 0.0));
/// assert_eq!((corner.x, corner.y), (1.0, 0.0));
///
/// let (xs, ys) = project(&[(1.0, 0.0, 0.0), (0.0, 1.0, 0.0)][..]);
/// assert_eq!(xs, vec![0.0, 1.0]);
/// assert_eq!(ys, vec![0.0, 0.0]);
/// ```
pub fn project<P: Project + ?Sized>(points: &P) -> P::Output {
    points.project()
}

/// Project a single point into the drawing plane.
pub fn project_point(point: impl Into<Barycentric>) -> Point2 {
    point.into().to_point2()
}

/// Project a point given as raw numeric data. Returns an error if the data
/// doesn't have exactly 3 components.
pub fn project_slice(values: &[f64]) -> anyhow::Result<Point2> {
    Barycentric::try_from(values).map(Barycentric::to_point2)
}

/// Scale a sequence of values so that they sum to 1. A sequence that sums to
/// 0 will produce NaNs.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let sum: f64 = values.iter().sum();
    values.iter().map(|value| value / sum).collect()
}
