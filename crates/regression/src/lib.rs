//! Ordinary least-squares fitting of a straight line to scalar data.
//!
//! # Algorithm
//!
//! For training points `(x, y)`, the best-fit line minimizing the sum of
//! squared errors has the closed form
//!
//! ```text
//! slope     = Sxy / Sxx
//! intercept = mean(y) - slope * mean(x)
//! ```
//!
//! where `Sxx` and `Sxy` are the sums of squared x deviations and of x·y cross
//! deviations about the means. The slope is undefined when every x is the
//! same; that case is reported as [`Error::DegenerateInput`] rather than
//! producing a non-finite or misleading line.
//!
//! # Usage
//!
//! Use [`fit`] for a one-shot fit, or [`Regressor`] to hold a fitted line and
//! predict with it. A fitted [`Line`] is also a [`linfit_core::Model`].
//!
//! # Logging
//!
//! Successful fits are logged at `debug` and degenerate inputs at `warn`
//! through the [`log`] facade.

mod config;
mod error;
mod fit;
mod line;
mod regressor;
mod stats;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use fit::{Fit, Summary, fit, zip_columns};
pub use line::Line;
pub use regressor::Regressor;
