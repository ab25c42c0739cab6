//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - 7-day rate: `-` line (drawn first, wins on overlap)
//! - 14-day rate: `.` line
//!
//! The y axis runs from 0 to the display maximum; larger values pin to the
//! top row and negative ones to the bottom row.

use chrono::NaiveDate;

use crate::domain::DerivedRecord;

const SHORT_GLYPH: char = '-';
const LONG_GLYPH: char = '.';

/// Render the 7-day and 14-day rates against a date axis.
///
/// The x axis spans `start_date` (or the first row) to the last row.
pub fn render_rate_plot(
    rows: &[DerivedRecord],
    start_date: Option<NaiveDate>,
    y_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let visible: Vec<&DerivedRecord> = rows
        .iter()
        .filter(|r| start_date.is_none_or(|start| r.date >= start))
        .collect();

    let (Some(first), Some(last)) = (visible.first(), visible.last()) else {
        return "Plot: no rows to display\n".to_string();
    };
    let (d_min, d_max) = (first.date, last.date);
    let y_max = if y_max.is_finite() && y_max > 0.0 { y_max } else { 1.0 };

    let t_max = (d_max - d_min).num_days() as f64;
    let day = |d: NaiveDate| (d - d_min).num_days() as f64;

    let short: Vec<(f64, f64)> = visible.iter().map(|r| (day(r.date), r.window7_rate)).collect();
    let long: Vec<(f64, f64)> = visible.iter().map(|r| (day(r.date), r.window14_rate)).collect();

    let mut grid = vec![vec![' '; width]; height];
    draw_curve(&mut grid, &short, t_max, y_max, SHORT_GLYPH);
    draw_curve(&mut grid, &long, t_max, y_max, LONG_GLYPH);

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {d_min} .. {d_max} | y=[0.00, {y_max:.2}] per 100k | '{SHORT_GLYPH}' 7d, '{LONG_GLYPH}' 14d\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn map_x(t: f64, t_max: f64, width: usize) -> usize {
    if t_max <= 0.0 {
        return 0;
    }
    let width = width.max(2);
    let u = (t / t_max).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = (y / y_max).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], t_max: f64, y_max: f64, ch: char) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, y) in curve {
        let x = map_x(t, t_max, width);
        let yy = map_y(y, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, x, yy, ch),
            None if grid[yy][x] == ' ' => grid[yy][x] = ch,
            None => {}
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish). Only paints empty cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DailyRecord;
    use crate::transform::derive_records;

    fn rows(values: &[u64]) -> Vec<DerivedRecord> {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let series: Vec<DailyRecord> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| DailyRecord::new(start + chrono::Duration::days(i as i64), v))
            .collect();
        derive_records(&series, 1_000_000, 100.0).unwrap()
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let rows = rows(&[100, 150, 200, 250, 300, 350, 400, 500, 560]);
        let txt = render_rate_plot(&rows, None, 100.0, 10, 5);
        let expected = concat!(
            "Plot: 2020-03-01 .. 2020-03-09 | y=[0.00, 100.00] per 100k | '-' 7d, '.' 14d\n",
            "          \n",
            "          \n",
            "        --\n",
            "        - \n",
            "--------..\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn values_above_the_ceiling_pin_to_the_top_row() {
        let rows = rows(&[100, 150, 200, 250, 300, 350, 400, 500, 560]);
        let txt = render_rate_plot(&rows, None, 10.0, 20, 6);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 1 + 6);
        assert!(lines[1].contains('-'));
        assert!(lines.iter().skip(1).all(|l| l.chars().count() == 20));
    }

    #[test]
    fn start_date_trims_the_axis() {
        let rows = rows(&[100, 150, 200, 250, 300, 350, 400, 500, 560]);
        let start = NaiveDate::from_ymd_opt(2020, 3, 8);
        let txt = render_rate_plot(&rows, start, 100.0, 10, 5);
        assert!(txt.starts_with("Plot: 2020-03-08 .. 2020-03-09"));

        let late = NaiveDate::from_ymd_opt(2021, 1, 1);
        assert_eq!(render_rate_plot(&rows, late, 100.0, 10, 5), "Plot: no rows to display\n");
    }

    #[test]
    fn single_row_plots_at_origin() {
        let rows = rows(&[5]);
        let txt = render_rate_plot(&rows, None, 100.0, 10, 5);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[5], "-         ");
    }
}
