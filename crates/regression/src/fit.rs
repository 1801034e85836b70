use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::Error,
    line::Line,
    stats::{Moments, r_squared},
};

/// Describes the training set a line was fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Number of training points.
    pub n_points: usize,
    /// Mean of the training x values.
    pub mean_x: f64,
    /// Mean of the training y values.
    pub mean_y: f64,
    /// Coefficient of determination on the training set.
    pub r_squared: f64,
}

/// The result of a least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// The fitted line.
    pub line: Line,
    /// Statistics of the training set.
    pub summary: Summary,
}

/// Fits a line to `points` by ordinary least squares.
///
/// With an intercept, `slope = Sxy / Sxx` and
/// `intercept = mean(y) - slope * mean(x)`, where `Sxx` and `Sxy` are taken
/// about the means. Without one, they are taken about the origin and the
/// intercept is zero.
///
/// # Errors
///
/// Returns an error if `points` is empty, contains a non-finite value,
/// or has no spread in x.
pub fn fit(points: &[(f64, f64)], config: &Config) -> Result<Fit, Error> {
    validate_points(points)?;

    let moments = Moments::new(points, config.fit_intercept());

    if !x_spreads(points, config.fit_intercept()) || moments.sxx <= config.sxx_tol() {
        warn!(
            "cannot fit line: x has no spread across {} points",
            moments.n
        );
        return Err(Error::DegenerateInput {
            points: moments.n,
            sxx: moments.sxx,
        });
    }

    let slope = moments.sxy / moments.sxx;
    let (cx, cy) = moments.center;
    let intercept = cy - slope * cx;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(Error::NonFiniteFit { slope, intercept });
    }

    let line = Line::new(slope, intercept);
    let summary = Summary {
        n_points: moments.n,
        mean_x: moments.mean_x,
        mean_y: moments.mean_y,
        r_squared: r_squared(&line, points),
    };

    debug!(
        "fitted line over {} points: slope = {slope}, intercept = {intercept}, r2 = {}",
        summary.n_points, summary.r_squared
    );

    Ok(Fit { line, summary })
}

/// Pairs two columns into points.
///
/// # Errors
///
/// Returns an error if the columns have different lengths.
pub fn zip_columns(xs: &[f64], ys: &[f64]) -> Result<Vec<(f64, f64)>, Error> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    Ok(xs.iter().copied().zip(ys.iter().copied()).collect())
}

/// Returns whether the x values have any spread about the fit's center.
///
/// With an intercept, some x must differ from the others; through the origin,
/// some x must be non-zero. Inputs are compared exactly, so repeated values
/// are caught even when rounding leaves their computed mean slightly off.
#[allow(clippy::float_cmp)]
fn x_spreads(points: &[(f64, f64)], centered: bool) -> bool {
    let pivot = if centered { points[0].0 } else { 0.0 };
    points.iter().any(|&(x, _)| x != pivot)
}

/// Checks that `points` is non-empty and entirely finite.
pub(crate) fn validate_points(points: &[(f64, f64)]) -> Result<(), Error> {
    if points.is_empty() {
        return Err(Error::Empty);
    }

    match points
        .iter()
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        Some(index) => {
            let (x, y) = points[index];
            Err(Error::NonFiniteInput { index, x, y })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn on_line(slope: f64, intercept: f64, xs: &[f64]) -> Vec<(f64, f64)> {
        xs.iter().map(|&x| (x, slope * x + intercept)).collect()
    }

    #[test]
    fn recovers_doubling_line() {
        let points = on_line(2.0, 0.0, &[1.0, 2.0, 3.0, 4.0, 5.0]);

        let fit = fit(&points, &Config::default()).expect("should fit");

        assert_relative_eq!(fit.line.slope(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.line.intercept(), 0.0, epsilon = 1e-9);
        assert_eq!(fit.summary.n_points, 5);
        assert_relative_eq!(fit.summary.mean_x, 3.0);
        assert_relative_eq!(fit.summary.mean_y, 6.0);
        assert_relative_eq!(fit.summary.r_squared, 1.0);
    }

    #[test]
    fn recovers_exact_lines() {
        let xs = [-3.5, -1.0, 0.25, 2.0, 7.0, 11.5];
        for (m, b) in [(1.5, -4.0), (-0.75, 12.0), (0.0, 3.0), (1e3, 1e-3)] {
            let fit = fit(&on_line(m, b, &xs), &Config::default()).expect("should fit");

            assert_relative_eq!(fit.line.slope(), m, epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(fit.line.intercept(), b, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn fits_noisy_points() {
        // Least-squares solution computed by hand: Sxx = 2, Sxy = 3.
        let points = [(0.0, 1.0), (1.0, 2.0), (2.0, 4.0)];

        let fit = fit(&points, &Config::default()).expect("should fit");

        assert_relative_eq!(fit.line.slope(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(fit.line.intercept(), 2.333_333_333_333_333 - 1.5, epsilon = 1e-12);
        assert!(fit.summary.r_squared < 1.0);
        assert!(fit.summary.r_squared > 0.9);
    }

    #[test]
    fn fits_through_origin() {
        let points = on_line(3.0, 0.0, &[1.0, 2.0, 4.0]);
        let config = Config::default().with_intercept(false);

        let fit = fit(&points, &config).expect("should fit");

        assert_relative_eq!(fit.line.slope(), 3.0, epsilon = 1e-12);
        assert_eq!(fit.line.intercept(), 0.0);
    }

    #[test]
    fn through_origin_ignores_offset() {
        // Best slope through the origin for y = x + 1 on {1, 2}: (2 + 6) / 5.
        let points = [(1.0, 2.0), (2.0, 3.0)];
        let config = Config::default().with_intercept(false);

        let fit = fit(&points, &config).expect("should fit");

        assert_relative_eq!(fit.line.slope(), 1.6, epsilon = 1e-12);
        assert_eq!(fit.line.intercept(), 0.0);
    }

    #[test]
    fn errors_on_identical_x() {
        let points = [(0.1, 1.0), (0.1, 2.0), (0.1, 5.0)];

        let result = fit(&points, &Config::default());

        assert!(matches!(
            result,
            Err(Error::DegenerateInput { points: 3, .. })
        ));
    }

    #[test]
    fn fits_x_offset_far_from_zero() {
        // Unix timestamps: large mean, unit spacing.
        let points: Vec<(f64, f64)> = (0..10)
            .map(|i| (1.7e9 + f64::from(i), 2.0 * f64::from(i) + 1.0))
            .collect();

        let fit = fit(&points, &Config::default()).expect("should fit");

        assert_relative_eq!(fit.line.slope(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.line.intercept(), 1.0 - 3.4e9, max_relative = 1e-12);
        assert_relative_eq!(fit.line.at(1.7e9 + 20.0), 41.0, epsilon = 1e-6);
    }

    #[test]
    fn fits_small_spread_around_a_million() {
        let points = [(1e6, 1e6), (1e6 + 1.0, 1e6 + 1.0), (1e6 + 2.0, 1e6 + 2.0)];

        let fit = fit(&points, &Config::default()).expect("should fit");

        assert_relative_eq!(fit.line.slope(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.line.intercept(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn sxx_tol_rejects_narrow_spread() {
        let points = [(0.0, 1.0), (1.0, 2.0)];
        let config = Config::new(true, 1.0).unwrap();

        let result = fit(&points, &config);

        assert!(matches!(
            result,
            Err(Error::DegenerateInput { points: 2, sxx }) if sxx == 0.5
        ));
    }

    #[test]
    fn sxx_tol_is_shift_invariant() {
        let config = Config::new(true, 0.25).unwrap();

        for offset in [0.0, 1e6, -2.5e9] {
            let points = [(offset, 1.0), (offset + 1.0, 2.0)];
            let fit = fit(&points, &config).expect("should fit");
            assert_relative_eq!(fit.line.slope(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn errors_on_single_point() {
        let result = fit(&[(4.0, 8.0)], &Config::default());
        assert!(matches!(result, Err(Error::DegenerateInput { points: 1, .. })));
    }

    #[test]
    fn single_point_fits_through_origin() {
        let config = Config::default().with_intercept(false);
        let fit = fit(&[(4.0, 8.0)], &config).expect("should fit");
        assert_relative_eq!(fit.line.slope(), 2.0);
    }

    #[test]
    fn errors_on_all_zero_x_through_origin() {
        let config = Config::default().with_intercept(false);
        let result = fit(&[(0.0, 1.0), (0.0, 2.0)], &config);
        assert!(matches!(result, Err(Error::DegenerateInput { .. })));
    }

    #[test]
    fn errors_on_empty() {
        assert_eq!(fit(&[], &Config::default()), Err(Error::Empty));
    }

    #[test]
    fn errors_on_non_finite_point() {
        let points = [(1.0, 1.0), (2.0, f64::NAN), (f64::INFINITY, 3.0)];

        let result = fit(&points, &Config::default());

        assert!(matches!(
            result,
            Err(Error::NonFiniteInput { index: 1, .. })
        ));
    }

    #[test]
    fn zips_columns() {
        let points = zip_columns(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(points, vec![(1.0, 3.0), (2.0, 4.0)]);
    }

    #[test]
    fn errors_on_mismatched_columns() {
        assert_eq!(
            zip_columns(&[1.0, 2.0, 3.0], &[1.0]),
            Err(Error::LengthMismatch { xs: 3, ys: 1 })
        );
    }
}
