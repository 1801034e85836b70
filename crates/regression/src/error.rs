use thiserror::Error;

/// Errors that can occur while fitting or using a line.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("no points to fit")]
    Empty,

    #[error("column lengths differ: {xs} x values and {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("non-finite point at index {index}: ({x}, {y})")]
    NonFiniteInput { index: usize, x: f64, y: f64 },

    #[error("slope is undefined: x has no spread across {points} points (sxx = {sxx})")]
    DegenerateInput { points: usize, sxx: f64 },

    #[error("fit overflowed: slope = {slope}, intercept = {intercept}")]
    NonFiniteFit { slope: f64, intercept: f64 },

    #[error("model has not been fitted")]
    NotFitted,
}
