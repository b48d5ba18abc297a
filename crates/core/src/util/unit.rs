use crate::NumRange;
use anyhow::anyhow;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};
use std::ops;

/// A point in the 2D drawing plane. Barycentric points are projected into this
/// space before being handed to a [Canvas](crate::Canvas).
///
/// ## 2D Coordinates
///
/// The simplex is laid out with the origin at its bottom-left corner. Right is
/// positive x, **up** is positive y. With a scale of 1, the three corners of
/// the simplex land on `(0, 0)`, `(1, 0)` and `(0.5, √3/2)`. Renderers that
/// use a downward y axis (e.g. SVG) are responsible for flipping.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

/// A vector in 2D space. Like [Point2], but represents an offset rather than
/// a position, e.g. from the center of a heatmap cell to one of its vertices.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ops::Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Vector2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// An RGBA color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color4 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color4 {
    /// The valid range of values for each component in RGBA
    const COMPONENT_RANGE: NumRange<f32> = NumRange::new(0.0, 1.0);

    pub const BLACK: Self = Self::new_int(0, 0, 0);
    pub const WHITE: Self = Self::new_int(255, 255, 255);

    /// Create a new RGBA color. Returns an error if any of the components are
    /// out of the range [0.0, 1.0].
    pub fn new(
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
    ) -> anyhow::Result<Self> {
        fn check_component(
            component_name: &str,
            value: f32,
        ) -> anyhow::Result<f32> {
            if Color4::COMPONENT_RANGE.contains(value) {
                Ok(value)
            } else {
                Err(anyhow!(
                    "Color component {} must be in {}, but was {}",
                    component_name,
                    Color4::COMPONENT_RANGE,
                    value
                ))
            }
        }

        Ok(Self {
            red: check_component("red", red)?,
            green: check_component("green", green)?,
            blue: check_component("blue", blue)?,
            alpha: check_component("alpha", alpha)?,
        })
    }

    /// Create a new opaque color, forcing each component into [0.0, 1.0].
    /// Useful for color functions that can overshoot slightly (cubehelix).
    pub fn new_clamped(red: f64, green: f64, blue: f64) -> Self {
        let range: NumRange<f64> = NumRange::normal_range();
        Self {
            red: range.clamp(red) as f32,
            green: range.clamp(green) as f32,
            blue: range.clamp(blue) as f32,
            alpha: 1.0,
        }
    }

    /// Create a new opaque color from integer components in the [0,255] range.
    pub const fn new_int(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Linearly interpolate between this color and another. `t = 0` gives
    /// this color, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = Self::COMPONENT_RANGE.clamp(t);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
            alpha: mix(self.alpha, other.alpha),
        }
    }

    /// Convert this color to a set of 4 bytes: `(red, green, blue, alpha)`.
    /// Components are rounded to the nearest byte.
    pub fn to_ints(self) -> (u8, u8, u8, u8) {
        let to_byte = |value: f32| (value * 255.0).round() as u8;
        (
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            to_byte(self.alpha),
        )
    }

    /// Convert this color to an HTML color code. Opaque colors are encoded as
    /// `#rrggbb`, anything with transparency as `#rrggbbaa`.
    pub fn to_html(self) -> String {
        let (r, g, b, a) = self.to_ints();
        if a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}
