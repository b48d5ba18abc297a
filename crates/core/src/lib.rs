//! Ternary is a library for drawing ternary plots: trajectories and heatmaps
//! on the 2-simplex, i.e. over points `(a, b, c)` that sum to 1. This crate
//! contains all the geometry (projection, lattice enumeration and heatmap
//! cells) plus color scales. Drawing goes through the [Canvas] trait, and an
//! SVG canvas is included.
//!
//! ```
//! use ternary::{HeatmapOptions, RenderConfig, TernaryRenderer};
//!
//! let renderer = TernaryRenderer::new(RenderConfig::default()).unwrap();
//! let svg = renderer
//!     .render_function_svg(
//!         |point| point.a * point.b * point.c,
//!         Some(20),
//!         true,
//!         &HeatmapOptions::default(),
//!     )
//!     .unwrap();
//! // From here you can save/display the SVG however you like.
//! assert!(svg.contains("<polygon"));
//! ```
//!
//! See [RenderConfig] for details on how drawing can be customized.

mod canvas;
pub mod cell;
mod color;
mod render;
pub mod simplex;
mod util;

#[cfg(feature = "svg")]
pub use crate::render::SvgCanvas;
pub use crate::{
    canvas::{Canvas, ColorBar, DrawCommand, LineStyle, RecordingCanvas},
    cell::{hex_coordinates, ij_to_xy, triangle_coordinates, HexCellKind},
    color::{colormapper, Colormap},
    render::{
        config::RenderConfig, heatmap_cells, heatmap_domain, sample_function,
        HeatmapCell, HeatmapData, HeatmapOptions, HeatmapStyle,
        TernaryRenderer,
    },
    simplex::{
        lattice_len, normalize, project, project_point, project_slice,
        simplex_points, Barycentric, Project, SimplexPoints,
    },
    util::{
        range::{NumRange, Rangeable},
        unit::{Color4, Point2, Vector2},
    },
};
