use std::convert::Infallible;

use linfit_core::Model;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    slope: f64,
    intercept: f64,
}

impl Line {
    /// Creates a line from its slope and intercept.
    #[must_use]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Returns the slope.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the intercept, the value of the line at `x = 0`.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the value of the line at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl Model for Line {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn apply(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(self.at(*input))
    }
}
