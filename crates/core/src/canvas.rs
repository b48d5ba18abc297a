//! The drawing surface that plots are rendered onto. Everything in this crate
//! draws through the [Canvas] trait, so the geometry is independent of the
//! output format. Two canvases are provided:
//!
//! - [RecordingCanvas] keeps every command in memory, which is handy for
//!   testing or for handing the geometry to another plotting stack
//! - [SvgCanvas](crate::SvgCanvas) renders to an SVG document (requires the
//!   `svg` feature)

use crate::{
    color::Colormap,
    util::{range::NumRange, unit::Point2},
};
use serde::{Deserialize, Serialize};

/// A surface that can draw the primitives a ternary plot is made of. All
/// coordinates are in the drawing plane (see [Point2]).
pub trait Canvas {
    /// Draw a connected line through the given points. `xs` and `ys` are
    /// parallel sequences and must have the same length.
    fn plot_line(&mut self, xs: &[f64], ys: &[f64], style: &LineStyle);

    /// Draw a closed, filled polygon with the given fill and edge colors.
    /// Colors are anything the output format understands, e.g. `#rrggbb` or
    /// `black`.
    fn fill_polygon(&mut self, vertices: &[Point2], fill: &str, edge: &str);

    /// Set the visible range of the drawing plane along each axis.
    fn set_limits(&mut self, x: NumRange<f64>, y: NumRange<f64>);

    /// Attach a color bar legend to the canvas.
    fn attach_colorbar(&mut self, colorbar: ColorBar);
}

/// How to draw a line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color. If `None`, the canvas picks one (typically by cycling
    /// through a palette, so that several unstyled lines can be told apart).
    pub color: Option<String>,
    /// Line width, in points
    pub linewidth: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: None,
            linewidth: 1.0,
        }
    }
}

/// A color bar legend, which shows the mapping from values to colors for a
/// heatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBar {
    /// The gradient to display
    pub cmap: Colormap,
    /// The range of values that the gradient spans
    pub domain: NumRange<f64>,
    /// Number of evenly spaced ticks along the bar, including both ends
    pub ticks: usize,
    /// Label ticks in scientific notation, with a shared power of ten
    pub scientific: bool,
}

impl ColorBar {
    /// Number of decimal places for tick labels in plain notation
    const PLAIN_PRECISION: usize = 4;
    /// Number of decimal places for the mantissa in scientific notation
    const SCIENTIFIC_PRECISION: usize = 2;

    /// Get the value at each tick, from the bottom of the bar to the top.
    pub fn tick_values(&self) -> Vec<f64> {
        self.domain.linspace(self.ticks)
    }

    /// The power of ten shared by all tick labels in scientific notation.
    /// Always 0 in plain notation.
    pub fn exponent(&self) -> i32 {
        let magnitude = self.domain.min.abs().max(self.domain.max.abs());
        if !self.scientific || magnitude == 0.0 || !magnitude.is_finite() {
            0
        } else {
            magnitude.log10().floor() as i32
        }
    }

    /// Text to display alongside the bar for the shared exponent, e.g.
    /// `×10^3`. `None` if there is nothing to display.
    pub fn offset_label(&self) -> Option<String> {
        match self.exponent() {
            0 => None,
            exponent => Some(format!("×10^{}", exponent)),
        }
    }

    /// Format a tick value as a label. In scientific notation the shared
    /// exponent is factored out; see [Self::offset_label].
    pub fn format_tick(&self, value: f64) -> String {
        if self.scientific {
            let mantissa = value / 10f64.powi(self.exponent());
            format!("{:.*}", Self::SCIENTIFIC_PRECISION, mantissa)
        } else {
            format!("{:.*}", Self::PLAIN_PRECISION, value)
        }
    }
}

/// A single command issued to a [RecordingCanvas].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        xs: Vec<f64>,
        ys: Vec<f64>,
        style: LineStyle,
    },
    Polygon {
        vertices: Vec<Point2>,
        fill: String,
        edge: String,
    },
    Limits {
        x: NumRange<f64>,
        y: NumRange<f64>,
    },
    ColorBar(ColorBar),
}

/// A canvas that doesn't draw anything, just remembers what it was asked to
/// draw, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received, in the order received
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All lines drawn, in order, as `(xs, ys, style)`
    pub fn lines(&self) -> impl Iterator<Item = (&[f64], &[f64], &LineStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { xs, ys, style } => {
                Some((xs.as_slice(), ys.as_slice(), style))
            }
            _ => None,
        })
    }

    /// All polygons drawn, in order, as `(vertices, fill, edge)`
    pub fn polygons(
        &self,
    ) -> impl Iterator<Item = (&[Point2], &str, &str)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polygon {
                vertices,
                fill,
                edge,
            } => Some((vertices.as_slice(), fill.as_str(), edge.as_str())),
            _ => None,
        })
    }

    /// The most recently set axis limits, as `(x, y)`
    pub fn limits(&self) -> Option<(NumRange<f64>, NumRange<f64>)> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::Limits { x, y } => Some((*x, *y)),
            _ => None,
        })
    }

    /// The most recently attached color bar
    pub fn colorbar(&self) -> Option<&ColorBar> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::ColorBar(colorbar) => Some(colorbar),
            _ => None,
        })
    }

    /// The smallest `(x, y)` ranges containing every line and polygon point
    /// drawn so far. `None` if nothing has been drawn.
    pub fn data_bounds(&self) -> Option<(NumRange<f64>, NumRange<f64>)> {
        let points: Vec<Point2> = self
            .commands
            .iter()
            .flat_map(|command| -> Vec<Point2> {
                match command {
                    DrawCommand::Line { xs, ys, .. } => xs
                        .iter()
                        .zip(ys)
                        .map(|(x, y)| Point2::new(*x, *y))
                        .collect(),
                    DrawCommand::Polygon { vertices, .. } => vertices.clone(),
                    _ => Vec::new(),
                }
            })
            .collect();
        let x = NumRange::from_values(points.iter().map(|p| p.x))?;
        let y = NumRange::from_values(points.iter().map(|p| p.y))?;
        Some((x, y))
    }
}

impl Canvas for RecordingCanvas {
    fn plot_line(&mut self, xs: &[f64], ys: &[f64], style: &LineStyle) {
        self.commands.push(DrawCommand::Line {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            style: style.clone(),
        });
    }

    fn fill_polygon(&mut self, vertices: &[Point2], fill: &str, edge: &str) {
        self.commands.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            fill: fill.into(),
            edge: edge.into(),
        });
    }

    fn set_limits(&mut self, x: NumRange<f64>, y: NumRange<f64>) {
        self.commands.push(DrawCommand::Limits { x, y });
    }

    fn attach_colorbar(&mut self, colorbar: ColorBar) {
        self.commands.push(DrawCommand::ColorBar(colorbar));
    }
}
