use crate::line::Line;

/// Sums needed for a closed-form least-squares fit.
///
/// Deviations are taken about `center`, which is the sample mean when an
/// intercept is fitted and the origin otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Moments {
    pub(crate) n: usize,
    pub(crate) mean_x: f64,
    pub(crate) mean_y: f64,
    pub(crate) center: (f64, f64),
    pub(crate) sxx: f64,
    pub(crate) sxy: f64,
}

impl Moments {
    /// Computes the sums in two passes: means first, then deviations.
    ///
    /// `points` must be non-empty.
    pub(crate) fn new(points: &[(f64, f64)], centered: bool) -> Self {
        debug_assert!(!points.is_empty(), "moments need at least one point");

        let n = points.len();
        #[allow(clippy::cast_precision_loss)]
        let count = n as f64;

        let (sum_x, sum_y) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        let mean_x = sum_x / count;
        let mean_y = sum_y / count;

        let center = if centered { (mean_x, mean_y) } else { (0.0, 0.0) };
        let (cx, cy) = center;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for &(x, y) in points {
            let dx = x - cx;
            sxx += dx * dx;
            sxy += dx * (y - cy);
        }

        Self {
            n,
            mean_x,
            mean_y,
            center,
            sxx,
            sxy,
        }
    }
}

/// Coefficient of determination of `line` over `points`.
///
/// When `y` is constant the ratio is undefined; a perfect fit then scores
/// 1.0 and anything else 0.0.
pub(crate) fn r_squared(line: &Line, points: &[(f64, f64)]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / points.len() as f64;

    let (ss_res, ss_tot) = points.iter().fold((0.0, 0.0), |(res, tot), &(x, y)| {
        let err = y - line.at(x);
        let dev = y - mean_y;
        (res + err * err, tot + dev * dev)
    });

    #[allow(clippy::float_cmp)]
    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }

    1.0 - ss_res / ss_tot
}
