use crate::{
    canvas::{Canvas, ColorBar, DrawCommand, LineStyle, RecordingCanvas},
    util::{range::NumRange, unit::Point2},
};
use std::fmt::{self, Display};
use svg::{
    node::{
        self,
        element::{Group, Line, Polygon, Polyline, Rectangle, Text},
    },
    Document,
};

/// Colors handed out to lines that don't specify their own, in order (the
/// "tab10" palette)
const LINE_COLOR_CYCLE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
    "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Empty space around the plot area, in pixels
const MARGIN: f64 = 10.0;
/// Gap between the plot area and the color bar
const COLORBAR_GAP: f64 = 20.0;
const COLORBAR_WIDTH: f64 = 20.0;
/// Room to the right of the color bar for tick labels
const COLORBAR_LABEL_WIDTH: f64 = 70.0;
/// Number of solid bands the color bar gradient is drawn with
const COLORBAR_BANDS: usize = 64;
const TICK_LENGTH: f64 = 4.0;
const FONT_SIZE: f64 = 10.0;

/// A [Canvas] that renders to an SVG document. Commands are collected as
/// they're issued, and the document is built all at once by
/// [Self::to_document], since the pixel mapping depends on the final axis
/// limits.
///
/// The y axis is flipped on output, so the simplex apex points up. If no
/// limits are ever set, the plot area is fitted to everything drawn.
///
/// ```
/// use ternary::{RenderConfig, SvgCanvas, TernaryRenderer};
///
/// let renderer = TernaryRenderer::new(RenderConfig::default()).unwrap();
/// let mut canvas = SvgCanvas::new();
/// renderer.draw_boundary(&mut canvas);
/// let svg = canvas.to_string();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    recording: RecordingCanvas,
    /// Width of the plot area, in pixels. The height follows from the
    /// aspect ratio of the axis limits.
    width: f64,
}

impl SvgCanvas {
    /// Plot area width used by [Self::new]
    pub const DEFAULT_WIDTH: f64 = 500.0;

    pub fn new() -> Self {
        Self::with_width(Self::DEFAULT_WIDTH)
    }

    /// Create a canvas whose plot area is the given number of pixels wide
    pub fn with_width(width: f64) -> Self {
        Self {
            recording: RecordingCanvas::new(),
            width,
        }
    }

    /// Every command drawn onto this canvas so far
    pub fn recording(&self) -> &RecordingCanvas {
        &self.recording
    }

    /// Build the SVG document for everything drawn so far
    pub fn to_document(&self) -> Document {
        let transform = PixelTransform::new(&self.recording, self.width);
        let colorbar = self.recording.colorbar();

        let mut total_width = transform.width + MARGIN * 2.0;
        if colorbar.is_some() {
            total_width += COLORBAR_GAP + COLORBAR_WIDTH + COLORBAR_LABEL_WIDTH;
        }
        let total_height = transform.height + MARGIN * 2.0;

        let mut plot = Group::new()
            .set("transform", format!("translate({} {})", MARGIN, MARGIN));
        let mut color_cycle = LINE_COLOR_CYCLE.iter().cycle();
        for command in self.recording.commands() {
            match command {
                DrawCommand::Line { xs, ys, style } => {
                    // Unstyled lines each take the next color in the cycle
                    let color = match &style.color {
                        Some(color) => color.as_str(),
                        None => color_cycle.next().copied().unwrap_or("black"),
                    };
                    plot = plot.add(draw_line(&transform, xs, ys, style, color));
                }
                DrawCommand::Polygon {
                    vertices,
                    fill,
                    edge,
                } => {
                    plot = plot.add(
                        Polygon::new()
                            .set(
                                "points",
                                transform.to_pixels(vertices.iter().copied()),
                            )
                            .set("fill", fill.as_str())
                            .set("stroke", edge.as_str())
                            .set("stroke-width", 0.5),
                    );
                }
                DrawCommand::Limits { .. } | DrawCommand::ColorBar(_) => {}
            }
        }

        let mut document = Document::new()
            .set("viewBox", format!("0 0 {} {}", total_width, total_height))
            .set("width", total_width)
            .set("height", total_height)
            .add(plot);
        if let Some(colorbar) = colorbar {
            document = document.add(
                draw_colorbar(colorbar, transform.height).set(
                    "transform",
                    format!(
                        "translate({} {})",
                        MARGIN + transform.width + COLORBAR_GAP,
                        MARGIN
                    ),
                ),
            );
        }
        document
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SvgCanvas {
    fn plot_line(&mut self, xs: &[f64], ys: &[f64], style: &LineStyle) {
        self.recording.plot_line(xs, ys, style);
    }

    fn fill_polygon(&mut self, vertices: &[Point2], fill: &str, edge: &str) {
        self.recording.fill_polygon(vertices, fill, edge);
    }

    fn set_limits(&mut self, x: NumRange<f64>, y: NumRange<f64>) {
        self.recording.set_limits(x, y);
    }

    fn attach_colorbar(&mut self, colorbar: ColorBar) {
        self.recording.attach_colorbar(colorbar);
    }
}

impl Display for SvgCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_document())
    }
}

/// Mapping from the drawing plane to pixels within the plot area. Pixel y
/// grows downward, so it's flipped relative to the drawing plane.
struct PixelTransform {
    x: NumRange<f64>,
    y: NumRange<f64>,
    /// Pixels per drawing unit, the same on both axes
    pixels_per_unit: f64,
    width: f64,
    height: f64,
}

impl PixelTransform {
    fn new(recording: &RecordingCanvas, width: f64) -> Self {
        let (x, y) = recording
            .limits()
            .or_else(|| recording.data_bounds())
            .unwrap_or_else(|| {
                (NumRange::normal_range(), NumRange::normal_range())
            });
        let (x, y) = (Self::widen(x), Self::widen(y));
        let pixels_per_unit = width / x.span().abs();
        Self {
            x,
            y,
            pixels_per_unit,
            width,
            height: y.span().abs() * pixels_per_unit,
        }
    }

    /// A zero-width range can't be mapped onto pixels, so give it some room
    fn widen(range: NumRange<f64>) -> NumRange<f64> {
        if range.is_degenerate() {
            NumRange::new(range.min - 0.5, range.max + 0.5)
        } else {
            range
        }
    }

    fn to_pixel(&self, point: Point2) -> (f64, f64) {
        (
            (point.x - self.x.min) * self.pixels_per_unit,
            (self.y.max - point.y) * self.pixels_per_unit,
        )
    }

    /// Format points as an SVG `points` attribute, e.g. `0,100 100,0`
    fn to_pixels(&self, points: impl IntoIterator<Item = Point2>) -> String {
        points
            .into_iter()
            .map(|point| {
                let (x, y) = self.to_pixel(point);
                format!("{},{}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn draw_line(
    transform: &PixelTransform,
    xs: &[f64],
    ys: &[f64],
    style: &LineStyle,
    color: &str,
) -> Polyline {
    let points = xs.iter().zip(ys).map(|(x, y)| Point2::new(*x, *y));
    Polyline::new()
        .set("points", transform.to_pixels(points))
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", style.linewidth)
        .set("stroke-linejoin", "round")
}

/// Draw a vertical color bar of the given height, with its top-left corner
/// at the origin. The top of the bar is the max of the domain.
fn draw_colorbar(colorbar: &ColorBar, height: f64) -> Group {
    let band_height = height / COLORBAR_BANDS as f64;
    let mut group = Group::new();

    // Solid bands approximate the gradient, bottom (t = 0) to top (t = 1)
    for band in 0..COLORBAR_BANDS {
        let t = (band as f64 + 0.5) / COLORBAR_BANDS as f64;
        let color = colorbar.cmap.sample(t).to_html();
        group = group.add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", height - (band + 1) as f64 * band_height)
                .set("width", COLORBAR_WIDTH)
                // Overlap slightly so no seams show between bands
                .set("height", band_height + 0.5)
                .set("fill", color),
        );
    }
    group = group.add(
        Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", COLORBAR_WIDTH)
            .set("height", height)
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", 0.5),
    );

    for value in colorbar.tick_values() {
        let y = height * (1.0 - colorbar.domain.normalize(value));
        group = group
            .add(
                Line::new()
                    .set("x1", COLORBAR_WIDTH)
                    .set("y1", y)
                    .set("x2", COLORBAR_WIDTH + TICK_LENGTH)
                    .set("y2", y)
                    .set("stroke", "black")
                    .set("stroke-width", 0.5),
            )
            .add(label(
                COLORBAR_WIDTH + TICK_LENGTH * 1.5,
                y + FONT_SIZE / 3.0,
                colorbar.format_tick(value),
            ));
    }

    // Scientific notation puts the shared exponent above the bar
    if let Some(offset) = colorbar.offset_label() {
        group = group.add(label(0.0, -FONT_SIZE / 2.0, offset));
    }

    group
}

fn label(x: f64, y: f64, content: String) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("font-size", FONT_SIZE)
        .set("font-family", "sans-serif")
        .add(node::Text::new(content))
}
