//! Geometry for the cells that tile a heatmap. Each lattice point `(i, j)`
//! (with implied `k = steps - i - j`) owns a polygon in the drawing plane.
//! There are two tessellations:
//!
//! - **Hexagonal**: each point gets a hexagon centered on it. Points on the
//!   edges of the triangle get a truncated pentagon, and the three corners get
//!   a quadrilateral, so the cells exactly fill the triangle.
//! - **Triangular**: each point gets the upward triangle whose lower-left
//!   vertex is the point, and optionally the downward ("alternate") triangle
//!   nestled to its upper right.
//!
//! Unlike the projection in [crate::simplex], the lattice index `i` here is
//! the **vertical** axis: `(i, j)` sits at `(i/2 + j, i·√3/2)`.

use crate::{
    simplex::SQRT3_OVER_2,
    util::unit::{Point2, Vector2},
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// `1 / √3`, the distance from the center of a unit hexagon cell to its top
/// vertex
const FRAC_1_SQRT_3: f64 = 0.577_350_269_189_625_8;
/// `1 / (2√3)`
const FRAC_1_2_SQRT_3: f64 = 0.288_675_134_594_812_9;
/// `√3 / 4`
const SQRT3_OVER_4: f64 = 0.433_012_701_892_219_3;

/// Convert a lattice index to its position in the drawing plane.
pub fn ij_to_xy(i: usize, j: usize) -> Point2 {
    let (i, j) = (i as f64, j as f64);
    Point2::new(i / 2.0 + j, i * SQRT3_OVER_2)
}

/// Get the ordered vertices of the triangle for lattice cell `(i, j)`.
///
/// The standard triangle has its base parallel to the bottom axis on the
/// lower end, i.e. it points up. The alternate triangle is the downward one
/// sitting in the gap between two neighboring standard triangles, so it
/// covers the area between points `(i, j)`, `(i, j+1)` and `(i+1, j)`.
pub fn triangle_coordinates(i: usize, j: usize, alt: bool) -> [Point2; 3] {
    let (i, j) = (i as f64, j as f64);
    let x = i / 2.0 + j;
    let bottom = i * SQRT3_OVER_2;
    let top = (i + 1.0) * SQRT3_OVER_2;
    if alt {
        [
            Point2::new(x + 1.0, bottom),
            Point2::new(x + 1.5, top),
            Point2::new(x + 0.5, top),
        ]
    } else {
        [
            Point2::new(x, bottom),
            Point2::new(x + 1.0, bottom),
            Point2::new(x + 0.5, top),
        ]
    }
}

/// Get the ordered vertices of the hex cell for lattice point `(i, j)` on a
/// lattice with the given number of steps. Interior points get 6 vertices,
/// non-corner edge points get 5, and corners get 4. See [HexCellKind] for
/// the exact shapes.
pub fn hex_coordinates(i: usize, j: usize, steps: usize) -> Vec<Point2> {
    let center = ij_to_xy(i, j);
    HexCellKind::classify(i, j, steps)
        .offsets()
        .iter()
        .map(|offset| center + offset.to_vector())
        .collect()
}

/// The position of a lattice point relative to the triangle boundary, which
/// determines the shape of its hex cell. Cells on an edge are cut off at that
/// edge, and corner cells are cut off on two sides.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexCellKind {
    /// Not on any edge. Full hexagon.
    Interior,
    /// `i == 0`, along the bottom of the triangle
    BottomEdge,
    /// `j == 0`, along the left side of the triangle
    LeftEdge,
    /// `i + j == steps`, along the right side of the triangle
    RightEdge,
    /// `(0, 0)`, the bottom-left corner
    CornerOrigin,
    /// `(steps, 0)`, the top corner
    CornerI,
    /// `(0, steps)`, the bottom-right corner
    CornerJ,
}

impl HexCellKind {
    /// Figure out which kind of cell a lattice point gets. Corners take
    /// precedence over edges. When corners coincide (a lattice with 0 steps),
    /// [Self::CornerJ] wins, then [Self::CornerOrigin].
    pub fn classify(i: usize, j: usize, steps: usize) -> Self {
        if i == 0 && j == steps {
            Self::CornerJ
        } else if i == 0 && j == 0 {
            Self::CornerOrigin
        } else if i == steps && j == 0 {
            Self::CornerI
        } else if i == 0 {
            Self::BottomEdge
        } else if j == 0 {
            Self::LeftEdge
        } else if i.checked_add(j) == Some(steps) {
            Self::RightEdge
        } else {
            Self::Interior
        }
    }

    /// Get the offsets from the cell center to each of the cell's vertices,
    /// in drawing order.
    pub fn offsets(self) -> &'static [CellOffset] {
        use CellOffset::*;
        match self {
            Self::Interior => &[
                Alpha,
                DeltaUp,
                DeltaDown,
                NegAlpha,
                NegDeltaUp,
                NegDeltaDown,
            ],
            Self::BottomEdge => {
                &[NegDeltaX, NegDeltaDown, Alpha, DeltaUp, DeltaX]
            }
            Self::LeftEdge => {
                &[HalfI, DeltaUp, DeltaDown, NegAlpha, NegHalfI]
            }
            Self::RightEdge => &[
                HalfIDown,
                NegAlpha,
                NegDeltaUp,
                NegDeltaDown,
                NegHalfIDown,
            ],
            Self::CornerOrigin => &[Center, HalfI, DeltaUp, DeltaX],
            Self::CornerI => &[Center, HalfIDown, NegAlpha, NegHalfI],
            Self::CornerJ => &[Center, NegDeltaX, NegDeltaDown, NegHalfIDown],
        }
    }
}

/// One of the fixed offsets from the center of a hex cell to a vertex of that
/// cell. Full hexagons only use the `Alpha`/`DeltaUp`/`DeltaDown` family
/// (the six true hexagon vertices). Truncated cells also use the midpoints of
/// lattice edges (`HalfI`, `HalfIDown`, `DeltaX`) and the center itself.
#[derive(
    Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CellOffset {
    Center,
    /// Straight up
    Alpha,
    NegAlpha,
    /// Up and to the right
    DeltaUp,
    NegDeltaUp,
    /// Down and to the right
    DeltaDown,
    NegDeltaDown,
    /// Halfway to the next point along `i`
    HalfI,
    NegHalfI,
    /// Halfway to the next point along `i`, mirrored downward
    HalfIDown,
    NegHalfIDown,
    /// Halfway to the next point along `j`
    DeltaX,
    NegDeltaX,
}

impl CellOffset {
    /// Get the offset as a vector in the drawing plane
    pub fn to_vector(self) -> Vector2 {
        match self {
            Self::Center => Vector2::ZERO,
            Self::Alpha => Vector2::new(0.0, FRAC_1_SQRT_3),
            Self::NegAlpha => Vector2::new(0.0, -FRAC_1_SQRT_3),
            Self::DeltaUp => Vector2::new(0.5, FRAC_1_2_SQRT_3),
            Self::NegDeltaUp => Vector2::new(-0.5, -FRAC_1_2_SQRT_3),
            Self::DeltaDown => Vector2::new(0.5, -FRAC_1_2_SQRT_3),
            Self::NegDeltaDown => Vector2::new(-0.5, FRAC_1_2_SQRT_3),
            Self::HalfI => Vector2::new(0.25, SQRT3_OVER_4),
            Self::NegHalfI => Vector2::new(-0.25, -SQRT3_OVER_4),
            Self::HalfIDown => Vector2::new(0.25, -SQRT3_OVER_4),
            Self::NegHalfIDown => Vector2::new(-0.25, SQRT3_OVER_4),
            Self::DeltaX => Vector2::new(0.5, 0.0),
            Self::NegDeltaX => Vector2::new(-0.5, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::simplex_points;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    fn assert_points_eq(actual: &[Point2], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "{:?}", actual);
        for (point, (x, y)) in actual.iter().zip(expected) {
            assert_approx_eq!(point.x, *x);
            assert_approx_eq!(point.y, *y);
        }
    }

    #[test]
    fn test_offsets_are_paired() {
        // Every non-center offset has a negation that is also an offset
        let vectors: Vec<Vector2> =
            CellOffset::iter().map(CellOffset::to_vector).collect();
        for vector in &vectors {
            assert!(vectors.contains(&-*vector), "{} has no opposite", vector);
        }
    }

    #[test]
    fn test_hex_vertices_on_circle() {
        // True hexagon vertices are all 1/√3 from the center
        for offset in HexCellKind::Interior.offsets() {
            let v = offset.to_vector();
            assert_approx_eq!((v.x * v.x + v.y * v.y).sqrt(), FRAC_1_SQRT_3);
        }
    }

    #[test]
    fn test_classify() {
        let steps = 5;
        assert_eq!(HexCellKind::classify(0, 0, steps), HexCellKind::CornerOrigin);
        assert_eq!(HexCellKind::classify(5, 0, steps), HexCellKind::CornerI);
        assert_eq!(HexCellKind::classify(0, 5, steps), HexCellKind::CornerJ);
        assert_eq!(HexCellKind::classify(0, 2, steps), HexCellKind::BottomEdge);
        assert_eq!(HexCellKind::classify(3, 0, steps), HexCellKind::LeftEdge);
        assert_eq!(HexCellKind::classify(2, 3, steps), HexCellKind::RightEdge);
        assert_eq!(HexCellKind::classify(1, 1, steps), HexCellKind::Interior);

        // All three corners are the same point
        assert_eq!(HexCellKind::classify(0, 0, 0), HexCellKind::CornerJ);
    }

    #[test]
    fn test_classify_huge_index() {
        let steps = 5;
        assert_eq!(
            HexCellKind::classify(usize::MAX, 1, steps),
            HexCellKind::Interior
        );
        assert_eq!(
            HexCellKind::classify(1, usize::MAX, usize::MAX),
            HexCellKind::Interior
        );
        assert_eq!(
            HexCellKind::classify(2, usize::MAX - 2, usize::MAX),
            HexCellKind::RightEdge
        );
        assert_eq!(hex_coordinates(usize::MAX, 1, steps).len(), 6);
    }

    #[test]
    fn test_vertex_counts() {
        let steps = 6;
        assert_eq!(hex_coordinates(0, 0, steps).len(), 4);
        assert_eq!(hex_coordinates(steps, 0, steps).len(), 4);
        assert_eq!(hex_coordinates(0, steps, steps).len(), 4);

        for (i, j, k) in simplex_points(steps, true) {
            let len = hex_coordinates(i, j, steps).len();
            let zeros = [i, j, k].iter().filter(|c| **c == 0).count();
            let expected = match zeros {
                0 => 6,
                1 => 5,
                _ => 4,
            };
            assert_eq!(len, expected, "({}, {}, {})", i, j, k);
        }
    }

    #[test]
    fn test_hex_interior() {
        let s = FRAC_1_2_SQRT_3;
        let (cx, cy) = (2.5, SQRT3_OVER_2);
        assert_points_eq(
            &hex_coordinates(1, 2, 5),
            &[
                (cx, cy + 2.0 * s),
                (cx + 0.5, cy + s),
                (cx + 0.5, cy - s),
                (cx, cy - 2.0 * s),
                (cx - 0.5, cy - s),
                (cx - 0.5, cy + s),
            ],
        );
    }

    #[test]
    fn test_hex_edges() {
        let s = FRAC_1_2_SQRT_3;
        let h = SQRT3_OVER_4;

        // Bottom edge, centered at (2, 0). Cut off flat at y = 0
        assert_points_eq(
            &hex_coordinates(0, 2, 4),
            &[(1.5, 0.0), (1.5, s), (2.0, 2.0 * s), (2.5, s), (2.5, 0.0)],
        );

        // Left edge, centered at (0.5, √3/2)
        let (cx, cy) = (0.5, SQRT3_OVER_2);
        assert_points_eq(
            &hex_coordinates(1, 0, 4),
            &[
                (cx + 0.25, cy + h),
                (cx + 0.5, cy + s),
                (cx + 0.5, cy - s),
                (cx, cy - 2.0 * s),
                (cx - 0.25, cy - h),
            ],
        );

        // Right edge, centered at (3.5, √3/2)
        let (cx, cy) = (3.5, SQRT3_OVER_2);
        assert_points_eq(
            &hex_coordinates(1, 3, 4),
            &[
                (cx + 0.25, cy - h),
                (cx, cy - 2.0 * s),
                (cx - 0.5, cy - s),
                (cx - 0.5, cy + s),
                (cx - 0.25, cy + h),
            ],
        );
    }

    #[test]
    fn test_hex_corners() {
        let s = FRAC_1_2_SQRT_3;
        let h = SQRT3_OVER_4;

        assert_points_eq(
            &hex_coordinates(0, 0, 3),
            &[(0.0, 0.0), (0.25, h), (0.5, s), (0.5, 0.0)],
        );

        let (cx, cy) = (1.5, 3.0 * SQRT3_OVER_2);
        assert_points_eq(
            &hex_coordinates(3, 0, 3),
            &[
                (cx, cy),
                (cx + 0.25, cy - h),
                (cx, cy - 2.0 * s),
                (cx - 0.25, cy - h),
            ],
        );

        assert_points_eq(
            &hex_coordinates(0, 3, 3),
            &[(3.0, 0.0), (2.5, 0.0), (2.5, s), (2.75, h)],
        );
    }

    #[test]
    fn test_triangle_coordinates() {
        assert_points_eq(
            &triangle_coordinates(0, 0, false),
            &[(0.0, 0.0), (1.0, 0.0), (0.5, SQRT3_OVER_2)],
        );
        assert_points_eq(
            &triangle_coordinates(0, 0, true),
            &[(1.0, 0.0), (1.5, SQRT3_OVER_2), (0.5, SQRT3_OVER_2)],
        );

        let top = 3.0 * SQRT3_OVER_2;
        let bottom = 2.0 * SQRT3_OVER_2;
        assert_points_eq(
            &triangle_coordinates(2, 1, false),
            &[(2.0, bottom), (3.0, bottom), (2.5, top)],
        );
        assert_points_eq(
            &triangle_coordinates(2, 1, true),
            &[(3.0, bottom), (3.5, top), (2.5, top)],
        );
    }

    #[test]
    fn test_triangles_share_edges() {
        // The alternate triangle at (i, j) fits between the standard
        // triangles at (i, j), (i, j+1) and (i+1, j), sharing one full edge
        // with each
        let (i, j) = (1, 2);
        let alt = triangle_coordinates(i, j, true);
        let shares_edge = |other: [Point2; 3]| {
            alt.iter()
                .filter(|vertex| {
                    other.iter().any(|v| {
                        (v.x - vertex.x).abs() < 1e-9
                            && (v.y - vertex.y).abs() < 1e-9
                    })
                })
                .count()
                == 2
        };
        assert!(shares_edge(triangle_coordinates(i, j, false)));
        assert!(shares_edge(triangle_coordinates(i, j + 1, false)));
        assert!(shares_edge(triangle_coordinates(i + 1, j, false)));
    }
}
