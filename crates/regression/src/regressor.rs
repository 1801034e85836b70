use linfit_core::evaluate;

use crate::{
    config::Config,
    error::Error,
    fit::{Fit, Summary, fit, validate_points, zip_columns},
    line::Line,
    stats::r_squared,
};

/// A simple linear regressor.
///
/// Starts unfitted. [`Regressor::fit`] stores a fitted line that later calls
/// use for prediction and scoring; fitting again replaces it. A failed fit
/// leaves the regressor as it was.
///
/// # Example
///
/// ```rust
/// use linfit_regression::Regressor;
///
/// let points = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0), (5.0, 10.0)];
///
/// let mut model = Regressor::default();
/// model.fit(&points).unwrap();
///
/// assert_eq!(model.predict(&[6.0, 7.0]).unwrap(), vec![12.0, 14.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Regressor {
    config: Config,
    fitted: Option<Fit>,
}

impl Regressor {
    /// Creates an unfitted regressor.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// Returns the fitting configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether a line has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Fits a line to `points` and stores it.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty, contains a non-finite value,
    /// or has no spread in x. The previously fitted line, if any, is kept.
    pub fn fit(&mut self, points: &[(f64, f64)]) -> Result<&Line, Error> {
        let result = fit(points, &self.config)?;
        Ok(&self.fitted.insert(result).line)
    }

    /// Fits a line to paired `xs` and `ys` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns differ in length, or for any reason
    /// [`Regressor::fit`] does.
    pub fn fit_columns(&mut self, xs: &[f64], ys: &[f64]) -> Result<&Line, Error> {
        let points = zip_columns(xs, ys)?;
        self.fit(&points)
    }

    /// Returns the fitted line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFitted`] before a successful fit.
    pub fn line(&self) -> Result<&Line, Error> {
        self.fitted
            .as_ref()
            .map(|fit| &fit.line)
            .ok_or(Error::NotFitted)
    }

    /// Returns the fitted slope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFitted`] before a successful fit.
    pub fn slope(&self) -> Result<f64, Error> {
        self.line().map(Line::slope)
    }

    /// Returns the fitted intercept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFitted`] before a successful fit.
    pub fn intercept(&self) -> Result<f64, Error> {
        self.line().map(Line::intercept)
    }

    /// Returns statistics of the training set from the last fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFitted`] before a successful fit.
    pub fn summary(&self) -> Result<&Summary, Error> {
        self.fitted
            .as_ref()
            .map(|fit| &fit.summary)
            .ok_or(Error::NotFitted)
    }

    /// Predicts `y` for each of `xs`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFitted`] before a successful fit.
    pub fn predict(&self, xs: &[f64]) -> Result<Vec<f64>, Error> {
        let line = self.line()?;
        let samples = evaluate(line, xs.iter().copied()).unwrap_or_else(|never| match never {});
        Ok(samples.into_iter().map(|s| s.output).collect())
    }

    /// Returns the coefficient of determination of the fitted line on `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if the regressor is unfitted, or if `points` is empty
    /// or contains a non-finite value.
    pub fn score(&self, points: &[(f64, f64)]) -> Result<f64, Error> {
        let line = self.line()?;
        validate_points(points)?;
        Ok(r_squared(line, points))
    }

    /// Returns `y - prediction` for each point, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the regressor is unfitted, or if `points` is empty
    /// or contains a non-finite value.
    pub fn residuals(&self, points: &[(f64, f64)]) -> Result<Vec<f64>, Error> {
        let line = self.line()?;
        validate_points(points)?;
        Ok(points.iter().map(|&(x, y)| y - line.at(x)).collect())
    }
}
