use crate::config::AxisRange;
use ndarray::{Array2, ArrayView2, Zip};

/// Round a coordinate and clip it into `range`.
///
/// Rounding is `f64::round`: half-way values go away from zero (`2.5 -> 3`, `-2.5 -> -3`).
/// NaN maps to `range.min`.
#[inline]
pub fn clamp_coordinate(value: f64, range: AxisRange) -> i64 {
    let rounded = value.round();
    if rounded.is_nan() || rounded <= range.min as f64 {
        range.min
    } else if rounded >= range.max as f64 {
        range.max
    } else {
        rounded as i64
    }
}

/// Round and clip raw `(n, 2)` points into integer coordinates.
///
/// Column 0 is clipped into `x_range`, column 1 into `y_range`; the axes never interact.
pub fn clamp_points(raw: &ArrayView2<f64>, x_range: AxisRange, y_range: AxisRange) -> Array2<i64> {
    let mut clamped = Array2::zeros(raw.raw_dim());

    Zip::from(clamped.column_mut(0))
        .and(raw.column(0))
        .for_each(|out, &x| *out = clamp_coordinate(x, x_range));
    Zip::from(clamped.column_mut(1))
        .and(raw.column(1))
        .for_each(|out, &y| *out = clamp_coordinate(y, y_range));

    clamped
}
