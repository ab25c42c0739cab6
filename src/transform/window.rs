//! Trailing-window rates over a cumulative series.
//!
//! Rows are 1-based in the description below. For a window of `span` days:
//!
//! - rows `1..=span` have no usable history and yield `0`
//! - row `span + 1` yields the *scaled cumulative total* at that row
//! - rows after that yield `(cum[i] - cum[i - span]) * scale`
//!
//! The `span + 1` row is a first-window approximation carried over from the
//! published figures this tool reproduces; it is not a true difference.

/// Persons per normalized rate unit.
pub const PER_CAPITA_BASE: f64 = 100_000.0;

/// 7-day window span.
pub const SHORT_SPAN: usize = 7;

/// 14-day window span.
pub const LONG_SPAN: usize = 14;

/// Multiplier converting an absolute case count to a per-100k rate.
///
/// Callers guarantee `population > 0`.
pub fn per_capita_scale(population: i64) -> f64 {
    PER_CAPITA_BASE / population as f64
}

/// Window rate for the row at 0-based position `idx`.
///
/// Differences are taken in floating point so a decreasing cumulative count
/// produces a negative rate rather than wrapping.
pub fn window_rate(cumulative: &[u64], idx: usize, span: usize, scale: f64) -> f64 {
    let row = idx + 1;
    if row <= span {
        0.0
    } else if row == span + 1 {
        cumulative[idx] as f64 * scale
    } else {
        (cumulative[idx] as f64 - cumulative[idx - span] as f64) * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rows_inside_the_span_are_zero() {
        let cum: Vec<u64> = (1..=20).map(|i| i * 10).collect();
        for idx in 0..SHORT_SPAN {
            assert_eq!(window_rate(&cum, idx, SHORT_SPAN, 1.0), 0.0);
        }
        for idx in 0..LONG_SPAN {
            assert_eq!(window_rate(&cum, idx, LONG_SPAN, 1.0), 0.0);
        }
    }

    #[test]
    fn first_full_row_uses_scaled_cumulative() {
        let cum: Vec<u64> = (1..=20).map(|i| i * 10).collect();
        // Row 8 (idx 7) for the 7-day window, row 15 (idx 14) for the 14-day window.
        assert!(approx(window_rate(&cum, 7, SHORT_SPAN, 0.5), 80.0 * 0.5));
        assert!(approx(window_rate(&cum, 14, LONG_SPAN, 0.5), 150.0 * 0.5));
    }

    #[test]
    fn later_rows_use_true_differences() {
        let cum: Vec<u64> = (1..=20).map(|i| i * i).collect();
        // Row 9: cum[9] - cum[2] = 81 - 4.
        assert!(approx(window_rate(&cum, 8, SHORT_SPAN, 1.0), 77.0));
        // Row 16: cum[16] - cum[2] = 256 - 4.
        assert!(approx(window_rate(&cum, 15, LONG_SPAN, 1.0), 252.0));
    }

    #[test]
    fn decreasing_counts_give_negative_rates() {
        let mut cum = vec![100u64; 9];
        cum[8] = 40;
        assert!(approx(window_rate(&cum, 8, SHORT_SPAN, 1.0), -60.0));
    }

    #[test]
    fn scale_is_per_hundred_thousand() {
        assert!(approx(per_capita_scale(1_000_000), 0.1));
        assert!(approx(per_capita_scale(100_000), 1.0));
    }
}
