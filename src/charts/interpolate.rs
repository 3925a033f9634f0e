/// One-dimensional linear interpolation of `ys` over `xs` at `x`.
///
/// Sample points are ordered by `xs` first, so `xs` need not be monotonic.
/// Returns `None` when `x` lies outside `[min xs, max xs]` or the inputs are
/// empty or of different lengths.
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    if xs.len() != ys.len() || xs.is_empty() || x.is_nan() {
        return None;
    }

    let mut points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (first, last) = (points[0], points[points.len() - 1]);
    if x < first.0 || x > last.0 {
        return None;
    }
    if points.len() == 1 {
        return Some(first.1);
    }

    points.windows(2).find_map(|w| {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        if x < x0 || x > x1 {
            return None;
        }
        if x1 == x0 {
            return Some(y0);
        }
        Some(y0 + (x - x0) * (y1 - y0) / (x1 - x0))
    })
}
