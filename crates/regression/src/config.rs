use thiserror::Error;

/// Configuration for least-squares line fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    fit_intercept: bool,
    sxx_tol: f64,
}

/// Errors that can occur when validating a fitting config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sxx_tol must be finite and non-negative")]
    SxxTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fit_intercept: true,
            sxx_tol: 0.0,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// Fitting is always rejected when every x is the same. With a non-zero
    /// `sxx_tol`, it is also rejected when the sum of squared x deviations is
    /// at most `sxx_tol`. Deviations are taken about the mean, so the check
    /// does not change when every x is shifted by a constant.
    ///
    /// # Errors
    ///
    /// Returns an error if `sxx_tol` is negative or non-finite.
    pub fn new(fit_intercept: bool, sxx_tol: f64) -> Result<Self, ConfigError> {
        if !sxx_tol.is_finite() || sxx_tol < 0.0 {
            return Err(ConfigError::SxxTol);
        }

        Ok(Self {
            fit_intercept,
            sxx_tol,
        })
    }

    /// Returns a copy of this config with intercept fitting toggled.
    ///
    /// When disabled, the line is forced through the origin.
    #[must_use]
    pub fn with_intercept(self, fit_intercept: bool) -> Self {
        Self {
            fit_intercept,
            ..self
        }
    }

    /// Returns whether an intercept is fitted.
    #[must_use]
    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// Returns the smallest spread in x, as a sum of squared deviations,
    /// that is still treated as zero.
    #[must_use]
    pub fn sxx_tol(&self) -> f64 {
        self.sxx_tol
    }
}
