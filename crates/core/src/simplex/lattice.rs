use std::iter::FusedIterator;

/// Calculate the number of lattice points on a simplex subdivided into
/// `steps` parts per side. With the boundary, that's the triangular number
/// `(N+1)(N+2)/2`. Without it, only points with all three components
/// positive count, which is `(N-1)(N-2)/2` (and nothing at all for `N < 2`).
/// Saturates at `usize::MAX` for lattices too large to count.
pub fn lattice_len(steps: usize, boundary: bool) -> usize {
    let (low, high) = if boundary {
        (steps.saturating_add(1), steps.saturating_add(2))
    } else if steps >= 2 {
        (steps - 2, steps - 1)
    } else {
        return 0;
    };
    // One of two consecutive numbers is even, so halve that one first
    if low % 2 == 0 {
        (low / 2).saturating_mul(high)
    } else {
        low.saturating_mul(high / 2)
    }
}

/// Systematically iterate through a lattice of points on the 2-simplex. Every
/// generated triple `(x1, x2, x3)` satisfies `x1 + x2 + x3 == steps`. If
/// `boundary` is false, triples with any zero component are skipped.
///
/// Iteration order is fixed: `x1` ascending in the outer loop, `x2` ascending
/// in the inner loop, with `x3` derived.
///
/// ```
/// use ternary::simplex_points;
///
/// let points: Vec<_> = simplex_points(2, true).collect();
/// assert_eq!(
///     points,
///     vec![
///         (0, 0, 2), (0, 1, 1), (0, 2, 0),
///         (1, 0, 1), (1, 1, 0),
///         (2, 0, 0),
///     ]
/// );
/// ```
pub fn simplex_points(steps: usize, boundary: bool) -> SimplexPoints {
    let start = if boundary { 0 } else { 1 };
    SimplexPoints {
        steps,
        start,
        x1: start,
        x2: start,
        remaining: lattice_len(steps, boundary),
    }
}

/// Lazy iterator over lattice points. See [simplex_points].
#[derive(Clone, Debug)]
pub struct SimplexPoints {
    steps: usize,
    /// Lowest value any component can take. 0 with the boundary, 1 without
    start: usize,
    x1: usize,
    x2: usize,
    remaining: usize,
}

impl Iterator for SimplexPoints {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        // The count is exact, so once it's exhausted there's nothing left to
        // check. This also keeps the bound math below from underflowing.
        if self.remaining == 0 {
            return None;
        }

        loop {
            // x3 = steps - x1 - x2 must be at least `start`
            let x2_max = self
                .steps
                .checked_sub(self.x1.checked_add(self.start)?)?;
            if self.x2 <= x2_max {
                let point = (self.x1, self.x2, self.steps - self.x1 - self.x2);
                self.x2 += 1;
                self.remaining -= 1;
                return Some(point);
            }
            // This row is done, move up to the next one
            self.x1 += 1;
            self.x2 = self.start;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SimplexPoints {}

impl FusedIterator for SimplexPoints {}
