//! Core traits and types for linfit.
//!
//! - [`Model`]: a fitted relationship applied to one typed input at a time
//! - [`Sample`]: an input paired with the output a model produced for it
//! - [`evaluate`]: applies a model across many inputs
//!
//! Fitted regressors expose their result as a [`Model`], so anything written
//! against the trait can evaluate a fitted line the same way it would any
//! other callable.

mod model;

pub use model::{Model, Sample, evaluate};
