use derive_more::Display;
use std::{
    fmt::{Debug, Display},
    ops,
};

/// A float type that ranges can be built over. Implemented for `f32` (color
/// components) and `f64` (everything else).
pub trait Rangeable:
    Copy
    + Debug
    + Display
    + PartialOrd
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

impl Rangeable for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Rangeable for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

/// A range between two numeric values, inclusive on both ends. This is what
/// color scales use as their domain: a value is normalized against the range
/// before being looked up in a gradient. Nothing forces `min <= max`; a
/// reversed range maps values in the opposite direction.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable> {
    pub min: T,
    pub max: T,
}

impl<T: Rangeable> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Get a [0,1] range for this type.
    pub const fn normal_range() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// Get the smallest range that contains every given value. Returns `None`
    /// if there are no values, since an empty collection has no min or max.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Option<Self> {
        let mut values = values.into_iter();
        let first = values.next()?;
        Some(values.fold(Self::new(first, first), |range, value| {
            let min = if value < range.min { value } else { range.min };
            let max = if value > range.max { value } else { range.max };
            Self::new(min, max)
        }))
    }

    /// Max minus min
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Is the span of this range zero? A degenerate range contains exactly
    /// one value.
    pub fn is_degenerate(&self) -> bool {
        self.span() == T::ZERO
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Map a value from this range to the target range. A degenerate range
    /// has nowhere to place the value on the target, so it always maps to
    /// the target's **minimum**.
    pub fn map_to(&self, dest_range: &Self, value: T) -> T {
        if self.is_degenerate() {
            dest_range.min
        } else {
            let normalized = (value - self.min) / self.span();
            dest_range.min + normalized * dest_range.span()
        }
    }

    /// Map a value from this range to the range [0, 1]
    pub fn normalize(&self, value: T) -> T {
        self.map_to(&Self::normal_range(), value)
    }

    /// Force a value into this range, snapping it to the nearer bound if it
    /// falls outside.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

impl NumRange<f64> {
    /// Get `n` evenly spaced values covering this range, including both
    /// bounds. `n = 1` yields just the min, `n = 0` yields nothing.
    pub fn linspace(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = self.span() / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        // Pin the last value so round-off can't drift past max
                        if i == n - 1 {
                            self.max
                        } else {
                            self.min + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_normal_range() {
        let range: NumRange<f64> = NumRange::normal_range();
        assert_approx_eq!(range.min, 0.0);
        assert_approx_eq!(range.max, 1.0);
    }

    #[test]
    fn test_from_values() {
        let range: NumRange<f64> =
            NumRange::from_values(vec![3.0, -1.0, 2.5, 7.0]).unwrap();
        assert_approx_eq!(range.min, -1.0);
        assert_approx_eq!(range.max, 7.0);

        let range: NumRange<f64> = NumRange::from_values(vec![4.0]).unwrap();
        assert_approx_eq!(range.min, 4.0);
        assert_approx_eq!(range.max, 4.0);
        assert!(range.is_degenerate());

        let empty: Option<NumRange<f64>> = NumRange::from_values(Vec::new());
        assert!(empty.is_none());
    }

    #[test]
    fn test_contains() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert!(!range.contains(0.9));
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(3.1));

        // Test a zero-length span, it should contain exactly one value
        let range: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert!(!range.contains(0.9));
        assert!(range.contains(1.0));
        assert!(!range.contains(1.1));
    }

    #[test]
    fn test_map_to() {
        let input_range: NumRange<f64> = NumRange::new(1.0, 3.0);
        let output_range: NumRange<f64> = NumRange::new(20.0, 40.0);
        assert_approx_eq!(input_range.map_to(&output_range, 0.0), 10.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 2.0), 30.0);
        assert_approx_eq!(input_range.map_to(&output_range, 3.0), 40.0);
        assert_approx_eq!(input_range.map_to(&output_range, 6.0), 70.0);

        // Test a zero-length span, it should always map to the min of the
        // output range
        let input_range: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert_approx_eq!(input_range.map_to(&output_range, 0.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.5), 20.0);
    }

    #[test]
    fn test_normalize() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.normalize(0.0), -0.5);
        assert_approx_eq!(range.normalize(1.0), 0.0);
        assert_approx_eq!(range.normalize(2.0), 0.5);
        assert_approx_eq!(range.normalize(3.0), 1.0);
        assert_approx_eq!(range.normalize(6.0), 2.5);

        // Reversed ranges still map linearly
        let range: NumRange<f64> = NumRange::new(3.0, 1.0);
        assert_approx_eq!(range.normalize(3.0), 0.0);
        assert_approx_eq!(range.normalize(1.0), 1.0);

        // Test a zero-length span, it should always map to zero
        let range: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert_approx_eq!(range.normalize(0.0), 0.0);
        assert_approx_eq!(range.normalize(1.0), 0.0);
        assert_approx_eq!(range.normalize(1.5), 0.0);
    }

    #[test]
    fn test_clamp() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.clamp(0.0), 1.0);
        assert_approx_eq!(range.clamp(2.0), 2.0);
        assert_approx_eq!(range.clamp(6.0), 3.0);
        assert_approx_eq!(range.normalize(range.clamp(6.0)), 1.0);

        let unit: NumRange<f32> = NumRange::normal_range();
        assert_eq!(unit.clamp(-0.5), 0.0);
        assert_eq!(unit.clamp(1.5), 1.0);
    }

    #[test]
    fn test_linspace() {
        let range: NumRange<f64> = NumRange::new(0.0, 1.5);
        assert_eq!(range.linspace(0), Vec::<f64>::new());
        assert_eq!(range.linspace(1), vec![0.0]);
        assert_eq!(range.linspace(4), vec![0.0, 0.5, 1.0, 1.5]);

        let range: NumRange<f64> = NumRange::new(-1.0, 2.0);
        let ticks = range.linspace(7);
        assert_eq!(ticks.len(), 7);
        assert_approx_eq!(ticks[0], -1.0);
        assert_approx_eq!(ticks[3], 0.5);
        assert_eq!(ticks[6], 2.0);
    }
}
