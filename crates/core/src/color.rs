//! Color scales for heatmaps. A [Colormap] is a continuous function from
//! `[0, 1]` to a color; [colormapper] handles normalizing a raw value against
//! a domain before the lookup.

use crate::util::{range::NumRange, unit::Color4};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{f64::consts::PI, str::FromStr};
use strum::{Display, EnumIter, EnumString};

/// A named, continuous color gradient. Parse one from its snake case name
/// with [FromStr] or [Colormap::by_name]:
///
/// ```
/// use ternary::Colormap;
///
/// let cmap: Colormap = "viridis".parse().unwrap();
/// assert_eq!(cmap, Colormap::Viridis);
/// assert!("not_a_colormap".parse::<Colormap>().is_err());
/// ```
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Colormap {
    /// Perceptually ordered light-to-dark purple helix. This is the default,
    /// and goes from a pale pink at 0 to a deep purple at 1.
    Cubehelix,
    /// Dark purple through teal to yellow
    Viridis,
    /// Black through magenta to pale yellow
    Magma,
    /// White to black
    Greys,
    /// Pale to dark blue
    Blues,
    /// Diverging: blue through light gray to red
    Coolwarm,
}

impl Default for Colormap {
    fn default() -> Self {
        Self::Cubehelix
    }
}

/// Parameters for the cubehelix color function: start 0, 0.4 rotations,
/// gamma 1, hue 0.8, walking from lightness 0.85 down to 0.15.
struct Cubehelix {
    start: f64,
    rotations: f64,
    gamma: f64,
    hue: f64,
    light: f64,
    dark: f64,
}

const CUBEHELIX: Cubehelix = Cubehelix {
    start: 0.0,
    rotations: 0.4,
    gamma: 1.0,
    hue: 0.8,
    light: 0.85,
    dark: 0.15,
};

impl Cubehelix {
    fn sample(&self, t: f64) -> Color4 {
        // Walk from light to dark, so low values are pale
        let x = self.light + (self.dark - self.light) * t;
        let xg = x.powf(self.gamma);
        let amplitude = self.hue * xg * (1.0 - xg) / 2.0;
        let phi = 2.0 * PI * (self.start / 3.0 + self.rotations * x);
        let (sin, cos) = phi.sin_cos();
        let channel = |p0: f64, p1: f64| xg + amplitude * (p0 * cos + p1 * sin);
        Color4::new_clamped(
            channel(-0.14861, 1.78277),
            channel(-0.29227, -0.90649),
            channel(1.97294, 0.0),
        )
    }
}

// Evenly spaced color stops for the interpolated gradients
const VIRIDIS: &[Color4] = &[
    Color4::new_int(68, 1, 84),
    Color4::new_int(59, 82, 139),
    Color4::new_int(33, 145, 140),
    Color4::new_int(94, 201, 98),
    Color4::new_int(253, 231, 37),
];
const MAGMA: &[Color4] = &[
    Color4::new_int(0, 0, 4),
    Color4::new_int(81, 18, 124),
    Color4::new_int(183, 55, 121),
    Color4::new_int(252, 137, 97),
    Color4::new_int(252, 253, 191),
];
const GREYS: &[Color4] = &[Color4::WHITE, Color4::BLACK];
const BLUES: &[Color4] = &[
    Color4::new_int(247, 251, 255),
    Color4::new_int(107, 174, 214),
    Color4::new_int(8, 48, 107),
];
const COOLWARM: &[Color4] = &[
    Color4::new_int(59, 76, 192),
    Color4::new_int(221, 221, 221),
    Color4::new_int(180, 4, 38),
];

/// Sample a piecewise-linear gradient through evenly spaced stops
fn interpolate(stops: &[Color4], t: f64) -> Color4 {
    let last = stops.len() - 1;
    let position = t * last as f64;
    let index = (position.floor() as usize).min(last);
    if index == last {
        stops[last]
    } else {
        stops[index].lerp(stops[index + 1], (position - index as f64) as f32)
    }
}

impl Colormap {
    /// Look up a colormap by its name. Names are snake case, e.g.
    /// `"cubehelix"` or `"coolwarm"`.
    pub fn by_name(name: &str) -> anyhow::Result<Self> {
        Self::from_str(name)
            .map_err(|_| anyhow!("Unknown colormap name: {:?}", name))
    }

    /// Get the color at position `t` along the gradient. Values outside
    /// `[0, 1]` are clamped, so they get the color of the nearest end.
    pub fn sample(self, t: f64) -> Color4 {
        let unit: NumRange<f64> = NumRange::normal_range();
        let t = unit.clamp(t);
        match self {
            Self::Cubehelix => CUBEHELIX.sample(t),
            Self::Viridis => interpolate(VIRIDIS, t),
            Self::Magma => interpolate(MAGMA, t),
            Self::Greys => interpolate(GREYS, t),
            Self::Blues => interpolate(BLUES, t),
            Self::Coolwarm => interpolate(COOLWARM, t),
        }
    }

    /// Get the color for a raw value, given the domain that values fall in.
    /// The domain's min maps to 0 and its max to 1. A degenerate domain (min
    /// equal to max) maps everything to 0.
    pub fn color_for(self, value: f64, domain: NumRange<f64>) -> Color4 {
        self.sample(domain.normalize(value))
    }
}

/// Map a value in the domain `[a, b]` to a hex-encoded color string. If no
/// colormap is given, the default ([Colormap::Cubehelix]) is used.
///
/// ```
/// use ternary::{colormapper, Colormap};
///
/// let low = colormapper(0.0, 0.0, 10.0, Some(Colormap::Greys));
/// let high = colormapper(10.0, 0.0, 10.0, Some(Colormap::Greys));
/// assert_eq!(low, "#ffffff");
/// assert_eq!(high, "#000000");
/// ```
pub fn colormapper(x: f64, a: f64, b: f64, cmap: Option<Colormap>) -> String {
    cmap.unwrap_or_default()
        .color_for(x, NumRange::new(a, b))
        .to_html()
}
