pub mod range;
pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, evaluates to the value of that expression, and logs the
/// elapsed time at the given level (debug by default).
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Tolerance used when checking that barycentric coordinates sum to their
/// expected total
pub const SUM_TOLERANCE: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use log::Level;

    #[test]
    fn test_timed_passes_value_through() {
        let value = timed!("Addition", 2 + 2);
        assert_eq!(value, 4);
        let value = timed!("Subtraction", Level::Trace, 2 - 2);
        assert_eq!(value, 0);
    }
}
