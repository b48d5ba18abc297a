//! Heatmap data and cell construction. The renderer turns a [HeatmapData]
//! into a list of colored polygons here, then hands them to a canvas.

use crate::{
    cell::{hex_coordinates, triangle_coordinates},
    simplex::{simplex_points, Barycentric},
    util::{range::NumRange, unit::Point2},
    Colormap,
};
use anyhow::{anyhow, bail};
use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Heatmap values, keyed by lattice index `(i, j)`. The third index is
/// implied by the step count of the heatmap: `k = steps - i - j`. Cells are
/// drawn in insertion order.
pub type HeatmapData = IndexMap<(usize, usize), f64>;

/// The shape of the cells that a heatmap is tiled with. See [crate::cell]
/// for the geometry.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HeatmapStyle {
    /// One hex cell per lattice point, truncated along the boundary so the
    /// mosaic exactly covers the triangle
    Hexagonal,
    /// Each entry `(i, j)` colors the upward triangle spanning points
    /// `(i, j)`, `(i, j+1)` and `(i+1, j)`. The downward triangles in between
    /// are colored with the mean of those three values. Entries with
    /// `i + j >= steps` have no triangle inside the grid, and are skipped.
    Triangular,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self::Hexagonal
    }
}

/// Per-heatmap drawing options. Anything not set here falls back to the
/// renderer's [RenderConfig](crate::RenderConfig).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapOptions {
    /// Color gradient. Defaults to [RenderConfig::colormap](crate::RenderConfig::colormap)
    pub cmap: Option<Colormap>,
    /// Label color bar ticks in scientific notation
    pub scientific: bool,
    /// Explicit `(min, max)` for the color scale. If not given, the min and
    /// max of the data are used. A reversed pair (min above max) reverses
    /// the gradient.
    pub min_max_scale: Option<(f64, f64)>,
    /// Shape of the cells
    pub style: HeatmapStyle,
}

/// One filled polygon of a heatmap, before coloring
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapCell {
    pub vertices: Vec<Point2>,
    pub value: f64,
}

/// Determine the color scale domain for some heatmap data. An explicit
/// override always wins. Otherwise the domain is the min and max of all
/// finite values, which fails if there aren't any.
pub fn heatmap_domain(
    data: &HeatmapData,
    min_max_scale: Option<(f64, f64)>,
) -> anyhow::Result<NumRange<f64>> {
    match min_max_scale {
        Some((min, max)) => {
            if !min.is_finite() || !max.is_finite() {
                bail!(
                    "Heatmap scale bounds must be finite, but got ({}, {})",
                    min,
                    max
                );
            }
            Ok(NumRange::new(min, max))
        }
        None => NumRange::from_values(
            data.values().copied().filter(|value| value.is_finite()),
        )
        .ok_or_else(|| {
            anyhow!(
                "Cannot determine the color scale of a heatmap with no \
                finite values ({} entries); set min_max_scale explicitly",
                data.len()
            )
        }),
    }
}

/// Build the polygon for every cell of a heatmap, in drawing order.
pub fn heatmap_cells(
    data: &HeatmapData,
    steps: usize,
    style: HeatmapStyle,
) -> Vec<HeatmapCell> {
    match style {
        HeatmapStyle::Hexagonal => data
            .iter()
            .map(|(&(i, j), &value)| {
                trace!("Hex cell ({}, {}) = {}", i, j, value);
                HeatmapCell {
                    vertices: hex_coordinates(i, j, steps),
                    value,
                }
            })
            .collect(),
        HeatmapStyle::Triangular => {
            let mut cells = Vec::with_capacity(data.len() * 2);
            for (&(i, j), &value) in data {
                let sum = match i.checked_add(j) {
                    Some(sum) if sum < steps => sum,
                    _ => {
                        trace!("Skipping ({}, {}), outside the grid", i, j);
                        continue;
                    }
                };
                cells.push(HeatmapCell {
                    vertices: triangle_coordinates(i, j, false).to_vec(),
                    value,
                });

                // The downward neighbor needs both adjacent entries, and
                // must itself fit inside the grid
                if sum + 1 < steps {
                    if let (Some(right), Some(up)) =
                        (data.get(&(i, j + 1)), data.get(&(i + 1, j)))
                    {
                        cells.push(HeatmapCell {
                            vertices: triangle_coordinates(i, j, true)
                                .to_vec(),
                            value: (value + right + up) / 3.0,
                        });
                    }
                }
            }
            cells
        }
    }
}

/// Evaluate a function over every point of a simplex lattice. Each lattice
/// triple is normalized to sum to 1 before being passed to the function,
/// and the result is keyed by the first two indices of the triple.
///
/// A lattice with 0 steps contains only `(0, 0, 0)`, which can't be
/// normalized, so the result is empty.
///
/// ```
/// use ternary::sample_function;
///
/// let data = sample_function(|point| point.a, 4, true);
/// assert_eq!(data.len(), 15);
/// assert_eq!(data[&(4, 0)], 1.0);
/// assert_eq!(data[&(0, 2)], 0.0);
/// ```
pub fn sample_function(
    mut f: impl FnMut(Barycentric) -> f64,
    steps: usize,
    boundary: bool,
) -> HeatmapData {
    simplex_points(steps, boundary)
        .filter(|&(x1, x2, x3)| x1 + x2 + x3 > 0)
        .map(|(x1, x2, x3)| {
            let point = Barycentric::from((x1, x2, x3)).normalized();
            ((x1, x2), f(point))
        })
        .collect()
}
