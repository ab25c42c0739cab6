//! Fixed-width text bars.

/// Total bar capacity in units (characters).
pub const BAR_WIDTH: usize = 40;

const FILLED: char = '█';
const EMPTY: char = ' ';

/// Filled units for `value` against `ceiling`, clamped to `0..=BAR_WIDTH`.
///
/// Callers guarantee `ceiling > 0`. Negative values render empty, values
/// above the ceiling render full.
pub fn bar_units(value: f64, ceiling: f64) -> usize {
    let units = (value / ceiling * BAR_WIDTH as f64).round();
    if units.is_nan() || units <= 0.0 {
        0
    } else if units >= BAR_WIDTH as f64 {
        BAR_WIDTH
    } else {
        units as usize
    }
}

/// Render `units` filled cells padded to exactly `BAR_WIDTH` characters.
pub fn render_bar(units: usize) -> String {
    let units = units.min(BAR_WIDTH);
    let mut out = String::with_capacity(BAR_WIDTH * FILLED.len_utf8());
    out.extend(std::iter::repeat_n(FILLED, units));
    out.extend(std::iter::repeat_n(EMPTY, BAR_WIDTH - units));
    out
}
