use crate::Colormap;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for how plots are drawn. These options control the
/// presentation only: the geometry of the simplex, the lattice and the cells
/// is the same no matter what's in here.
///
/// All fields have defaults, so a config can be deserialized from a partial
/// definition:
///
/// ```
/// use ternary::RenderConfig;
///
/// let config: RenderConfig =
///     serde_json::from_str(r#"{"scale": 40.0}"#).unwrap();
/// assert_eq!(config.scale, 40.0);
/// assert_eq!(config.colorbar_ticks, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// Side length of the simplex boundary, in drawing units. Trajectories
    /// are plotted in normalized coordinates, so they line up with the
    /// boundary at a scale of 1. A heatmap over `N` steps lines up with a
    /// boundary at a scale of `N`.
    #[validate(range(min = 0.001))]
    pub scale: f64,

    /// Width of the boundary outline
    #[validate(range(min = 0.0))]
    pub boundary_linewidth: f64,

    /// Color of the boundary outline. Any color the output format accepts.
    pub boundary_color: String,

    /// Width of trajectory lines
    #[validate(range(min = 0.0))]
    pub trajectory_linewidth: f64,

    /// Width of trajectory lines when several are plotted together
    #[validate(range(min = 0.0))]
    pub multiple_linewidth: f64,

    /// Number of ticks on a heatmap's color bar, including both ends
    #[validate(range(min = 2))]
    pub colorbar_ticks: usize,

    /// Color gradient used for heatmaps that don't specify their own
    pub colormap: Colormap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            boundary_linewidth: 2.0,
            boundary_color: "black".into(),
            trajectory_linewidth: 1.0,
            multiple_linewidth: 2.0,
            colorbar_ticks: 7,
            colormap: Colormap::default(),
        }
    }
}
