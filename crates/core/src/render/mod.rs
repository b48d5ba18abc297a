pub mod config;
mod heatmap;
#[cfg(feature = "svg")]
mod svg;

pub use self::heatmap::{
    heatmap_cells, heatmap_domain, sample_function, HeatmapCell, HeatmapData,
    HeatmapOptions, HeatmapStyle,
};
#[cfg(feature = "svg")]
pub use self::svg::SvgCanvas;

use crate::{
    canvas::{Canvas, ColorBar, LineStyle},
    render::config::RenderConfig,
    simplex::{project, Barycentric},
    timed,
    util::{range::NumRange, unit::Point2},
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A ternary renderer draws the pieces of a ternary plot (the simplex
/// boundary, trajectories and heatmaps) onto a [Canvas]. A renderer is created
/// using a particular [RenderConfig], and from there can be used to draw any
/// number of plots onto any number of canvases.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new renderer.
///
/// ```
/// use ternary::{RecordingCanvas, RenderConfig, TernaryRenderer};
///
/// let renderer = TernaryRenderer::new(RenderConfig::default()).unwrap();
/// let mut canvas = RecordingCanvas::new();
/// renderer.plot_multiple(
///     &mut canvas,
///     &[vec![(1.0, 0.0, 0.0), (0.2, 0.3, 0.5)]],
/// );
/// // One trajectory, plus the boundary
/// assert_eq!(canvas.lines().count(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TernaryRenderer {
    /// Config that determines how drawing is done
    render_config: RenderConfig,
}

impl TernaryRenderer {
    /// Fraction of the scale left as padding around the boundary when setting
    /// axis limits
    const AXIS_PADDING: f64 = 0.05;
    /// Top of the y axis limits, as a fraction of the scale. The apex is at
    /// about 0.866, so this leaves a little room above it.
    const AXIS_Y_MAX: f64 = 0.90;

    /// Initialize a new renderer with the given options. Returns an error if
    /// the render config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        render_config.validate()?;
        Ok(Self { render_config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Get the corners of the simplex boundary at the configured scale, in
    /// drawing order: origin, right, apex, and back to the origin.
    pub fn boundary_vertices(&self) -> [Point2; 4] {
        let scale = self.render_config.scale;
        // Calculating the apex height this way avoids visible round-off on
        // the top corner
        let apex_y = (scale * scale * 3.0).sqrt() / 2.0;
        [
            Point2::ORIGIN,
            Point2::new(scale, 0.0),
            Point2::new(scale / 2.0, apex_y),
            Point2::ORIGIN,
        ]
    }

    /// Get the axis limits `(x, y)` that frame the boundary at the configured
    /// scale
    pub fn axis_limits(&self) -> (NumRange<f64>, NumRange<f64>) {
        let scale = self.render_config.scale;
        (
            NumRange::new(
                -Self::AXIS_PADDING * scale,
                (1.0 + Self::AXIS_PADDING) * scale,
            ),
            NumRange::new(-Self::AXIS_PADDING * scale, Self::AXIS_Y_MAX * scale),
        )
    }

    /// Draw the triangular outline of the simplex, then set the axis limits
    /// of the canvas to frame it.
    pub fn draw_boundary(&self, canvas: &mut dyn Canvas) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = self
            .boundary_vertices()
            .iter()
            .map(|vertex| (vertex.x, vertex.y))
            .unzip();
        canvas.plot_line(
            &xs,
            &ys,
            &LineStyle {
                color: Some(self.render_config.boundary_color.clone()),
                linewidth: self.render_config.boundary_linewidth,
            },
        );
        let (x_limits, y_limits) = self.axis_limits();
        canvas.set_limits(x_limits, y_limits);
    }

    /// Plot a trajectory of barycentric points as a connected line. Each
    /// point should sum to 1; points that don't are still plotted, but log a
    /// warning. If no color is given, the canvas picks one.
    pub fn plot<P: Copy + Into<Barycentric>>(
        &self,
        canvas: &mut dyn Canvas,
        trajectory: &[P],
        color: Option<&str>,
    ) {
        self.plot_with_width(
            canvas,
            trajectory,
            color,
            self.render_config.trajectory_linewidth,
        );
    }

    fn plot_with_width<P: Copy + Into<Barycentric>>(
        &self,
        canvas: &mut dyn Canvas,
        trajectory: &[P],
        color: Option<&str>,
        linewidth: f64,
    ) {
        let unnormalized = trajectory
            .iter()
            .map(|point| -> Barycentric { (*point).into() })
            .filter(|point| !point.is_normalized())
            .count();
        if unnormalized > 0 {
            warn!(
                "{} of {} trajectory points don't sum to 1",
                unnormalized,
                trajectory.len()
            );
        }

        let (xs, ys) = project(trajectory);
        canvas.plot_line(
            &xs,
            &ys,
            &LineStyle {
                color: color.map(String::from),
                linewidth,
            },
        );
    }

    /// Plot several trajectories onto the same canvas, each in the canvas's
    /// next default color, then draw the boundary over them. Lines are drawn
    /// with [RenderConfig::multiple_linewidth].
    pub fn plot_multiple<P, T>(&self, canvas: &mut dyn Canvas, trajectories: &[T])
    where
        P: Copy + Into<Barycentric>,
        T: AsRef<[P]>,
    {
        debug!("Plotting {} trajectories", trajectories.len());
        for trajectory in trajectories {
            self.plot_with_width(
                canvas,
                trajectory.as_ref(),
                None,
                self.render_config.multiple_linewidth,
            );
        }
        self.draw_boundary(canvas);
    }

    /// Draw a heatmap: one filled cell per entry, colored by its value, plus
    /// a color bar legend. Entries are keyed by lattice index `(i, j)` on a
    /// lattice with the given number of steps, so the heatmap spans a
    /// triangle with side length `steps`.
    ///
    /// The color scale spans [HeatmapOptions::min_max_scale] if given, and
    /// the min and max of the data otherwise. Returns an error if there's no
    /// explicit scale and no finite data to derive one from.
    pub fn heatmap(
        &self,
        canvas: &mut dyn Canvas,
        data: &HeatmapData,
        steps: usize,
        options: &HeatmapOptions,
    ) -> anyhow::Result<()> {
        let domain = heatmap_domain(data, options.min_max_scale)?;
        if domain.is_degenerate() {
            warn!(
                "Heatmap scale {} is a single value, every cell gets the same color",
                domain
            );
        }
        let cmap = options.cmap.unwrap_or(self.render_config.colormap);
        debug!(
            "Drawing {} {} heatmap over {} steps, scale {}, colormap {}",
            data.len(),
            options.style,
            steps,
            domain,
            cmap
        );

        timed!("Heatmap rendering", {
            for cell in heatmap_cells(data, steps, options.style) {
                // Same fill and edge, so the cells form a seamless mosaic
                let color = cmap.color_for(cell.value, domain).to_html();
                canvas.fill_polygon(&cell.vertices, &color, &color);
            }
        });

        canvas.attach_colorbar(ColorBar {
            cmap,
            domain,
            ticks: self.render_config.colorbar_ticks,
            scientific: options.scientific,
        });
        Ok(())
    }

    /// Evaluate a function over the simplex lattice (see [sample_function])
    /// and draw the result as a heatmap.
    pub fn plot_heatmap(
        &self,
        canvas: &mut dyn Canvas,
        f: impl FnMut(Barycentric) -> f64,
        steps: usize,
        boundary: bool,
        options: &HeatmapOptions,
    ) -> anyhow::Result<()> {
        let data = timed!("Heatmap sampling", sample_function(f, steps, boundary));
        self.heatmap(canvas, &data, steps, options)
    }
}

// SVG convenience API
#[cfg(feature = "svg")]
impl TernaryRenderer {
    /// Default number of lattice steps for [Self::render_function_svg]
    pub const DEFAULT_HEATMAP_STEPS: usize = 40;

    /// Render just the simplex boundary as an SVG. Returns the SVG in a
    /// string.
    pub fn render_boundary_svg(&self) -> String {
        let mut canvas = SvgCanvas::new();
        self.draw_boundary(&mut canvas);
        canvas.to_string()
    }

    /// Render several trajectories and the boundary as an SVG. See
    /// [Self::plot_multiple].
    pub fn render_trajectories_svg<P, T>(&self, trajectories: &[T]) -> String
    where
        P: Copy + Into<Barycentric>,
        T: AsRef<[P]>,
    {
        let mut canvas = SvgCanvas::new();
        self.plot_multiple(&mut canvas, trajectories);
        canvas.to_string()
    }

    /// Render a heatmap as an SVG. See [Self::heatmap].
    pub fn render_heatmap_svg(
        &self,
        data: &HeatmapData,
        steps: usize,
        options: &HeatmapOptions,
    ) -> anyhow::Result<String> {
        let mut canvas = SvgCanvas::new();
        self.heatmap(&mut canvas, data, steps, options)?;
        Ok(canvas.to_string())
    }

    /// Sample a function over the simplex and render it as a heatmap SVG.
    /// Uses [Self::DEFAULT_HEATMAP_STEPS] if `steps` is `None`. See
    /// [Self::plot_heatmap].
    pub fn render_function_svg(
        &self,
        f: impl FnMut(Barycentric) -> f64,
        steps: Option<usize>,
        boundary: bool,
        options: &HeatmapOptions,
    ) -> anyhow::Result<String> {
        let mut canvas = SvgCanvas::new();
        self.plot_heatmap(
            &mut canvas,
            f,
            steps.unwrap_or(Self::DEFAULT_HEATMAP_STEPS),
            boundary,
            options,
        )?;
        Ok(canvas.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{canvas::RecordingCanvas, Colormap};
    use assert_approx_eq::assert_approx_eq;

    fn renderer() -> TernaryRenderer {
        TernaryRenderer::new(RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_boundary() {
        let renderer = TernaryRenderer::new(RenderConfig {
            scale: 10.0,
            boundary_linewidth: 3.0,
            boundary_color: "gray".into(),
            ..RenderConfig::default()
        })
        .unwrap();
        let mut canvas = RecordingCanvas::new();
        renderer.draw_boundary(&mut canvas);

        let (xs, ys, style) = canvas.lines().next().unwrap();
        assert_eq!(xs, &[0.0, 10.0, 5.0, 0.0]);
        assert_eq!(ys[..2], [0.0, 0.0]);
        assert_approx_eq!(ys[2], 10.0 * 3.0_f64.sqrt() / 2.0);
        assert_eq!(ys[3], 0.0);
        assert_eq!(style.color.as_deref(), Some("gray"));
        assert_approx_eq!(style.linewidth, 3.0);

        let (x, y) = canvas.limits().unwrap();
        assert_approx_eq!(x.min, -0.5);
        assert_approx_eq!(x.max, 10.5);
        assert_approx_eq!(y.min, -0.5);
        assert_approx_eq!(y.max, 9.0);
    }

    #[test]
    fn test_plot() {
        let mut canvas = RecordingCanvas::new();
        renderer().plot(
            &mut canvas,
            &[[1.0, 0.0, 0.0], [0.0, 0.5, 0.5]],
            Some("#00ff00"),
        );
        let (xs, ys, style) = canvas.lines().next().unwrap();
        assert_approx_eq!(xs[1], 0.75);
        assert_approx_eq!(ys[1], 3.0_f64.sqrt() / 4.0);
        assert_eq!(style.color.as_deref(), Some("#00ff00"));
        assert_approx_eq!(style.linewidth, 1.0);
        // Plotting a trajectory doesn't touch the limits
        assert!(canvas.limits().is_none());
    }

    #[test]
    fn test_plot_multiple() {
        let mut canvas = RecordingCanvas::new();
        let trajectories = vec![
            vec![(1.0, 0.0, 0.0), (0.0, 1.0, 0.0)],
            vec![(0.0, 0.0, 1.0), (0.5, 0.5, 0.0)],
        ];
        renderer().plot_multiple(&mut canvas, &trajectories);
        let styles: Vec<&LineStyle> =
            canvas.lines().map(|(_, _, style)| style).collect();
        assert_eq!(styles.len(), 3);
        // Trajectories use default colors, the boundary comes last
        assert_eq!(styles[0].color, None);
        assert_eq!(styles[1].color, None);
        assert_eq!(styles[2].color.as_deref(), Some("black"));
        assert!(canvas.limits().is_some());
    }

    #[test]
    fn test_plot_multiple_linewidth() {
        let trajectories = vec![vec![(1.0, 0.0, 0.0), (0.0, 1.0, 0.0)]];
        let mut canvas = RecordingCanvas::new();
        renderer().plot_multiple(&mut canvas, &trajectories);
        let (_, _, style) = canvas.lines().next().unwrap();
        assert_approx_eq!(style.linewidth, 2.0);

        // A single plot keeps the thinner trajectory width
        let mut canvas = RecordingCanvas::new();
        renderer().plot(&mut canvas, &trajectories[0], None);
        let (_, _, style) = canvas.lines().next().unwrap();
        assert_approx_eq!(style.linewidth, 1.0);

        let renderer = TernaryRenderer::new(RenderConfig {
            multiple_linewidth: 0.5,
            ..RenderConfig::default()
        })
        .unwrap();
        let mut canvas = RecordingCanvas::new();
        renderer.plot_multiple(&mut canvas, &trajectories);
        let (_, _, style) = canvas.lines().next().unwrap();
        assert_approx_eq!(style.linewidth, 0.5);
    }

    #[test]
    fn test_heatmap() {
        let data: HeatmapData =
            vec![((0, 0), 1.0), ((0, 1), 2.0), ((1, 0), 3.0)]
                .into_iter()
                .collect();
        let mut canvas = RecordingCanvas::new();
        let options = HeatmapOptions {
            cmap: Some(Colormap::Greys),
            ..HeatmapOptions::default()
        };
        renderer().heatmap(&mut canvas, &data, 1, &options).unwrap();

        let polygons: Vec<_> = canvas.polygons().collect();
        assert_eq!(polygons.len(), 3);
        for (_, fill, edge) in &polygons {
            assert_eq!(fill, edge);
        }
        assert_eq!(polygons[0].1, "#ffffff");
        assert_eq!(polygons[2].1, "#000000");

        let colorbar = canvas.colorbar().unwrap();
        assert_eq!(colorbar.cmap, Colormap::Greys);
        assert_approx_eq!(colorbar.domain.min, 1.0);
        assert_approx_eq!(colorbar.domain.max, 3.0);
        assert_eq!(colorbar.ticks, 7);
        assert!(!colorbar.scientific);
    }

    #[test]
    fn test_heatmap_reversed_scale() {
        let data: HeatmapData = vec![((0, 0), 0.0), ((0, 1), 1.0)]
            .into_iter()
            .collect();
        let mut canvas = RecordingCanvas::new();
        let options = HeatmapOptions {
            cmap: Some(Colormap::Greys),
            min_max_scale: Some((1.0, 0.0)),
            ..HeatmapOptions::default()
        };
        renderer().heatmap(&mut canvas, &data, 1, &options).unwrap();
        let fills: Vec<&str> =
            canvas.polygons().map(|(_, fill, _)| fill).collect();
        assert_eq!(fills, vec!["#000000", "#ffffff"]);
    }

    #[test]
    fn test_heatmap_empty() {
        let mut canvas = RecordingCanvas::new();
        let result = renderer().heatmap(
            &mut canvas,
            &HeatmapData::new(),
            10,
            &HeatmapOptions::default(),
        );
        assert!(result.is_err());
        // Nothing gets drawn on failure
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_plot_heatmap_uses_config_colormap() {
        let renderer = TernaryRenderer::new(RenderConfig {
            colormap: Colormap::Magma,
            colorbar_ticks: 3,
            ..RenderConfig::default()
        })
        .unwrap();
        let mut canvas = RecordingCanvas::new();
        renderer
            .plot_heatmap(
                &mut canvas,
                |point| point.a,
                4,
                true,
                &HeatmapOptions::default(),
            )
            .unwrap();
        assert_eq!(canvas.polygons().count(), 15);
        let colorbar = canvas.colorbar().unwrap();
        assert_eq!(colorbar.cmap, Colormap::Magma);
        assert_eq!(colorbar.ticks, 3);
    }
}
