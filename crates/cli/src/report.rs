use std::io::Write;

use linfit_regression::{Line, Summary};
use serde::Serialize;

/// Everything the CLI prints about one fit.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    #[serde(flatten)]
    pub(crate) line: Line,
    pub(crate) r_squared: f64,
    pub(crate) inputs: Vec<f64>,
    pub(crate) predictions: Vec<f64>,
}

impl Report {
    pub(crate) fn new(
        line: Line,
        summary: &Summary,
        inputs: Vec<f64>,
        predictions: Vec<f64>,
    ) -> Self {
        Self {
            line,
            r_squared: summary.r_squared,
            inputs,
            predictions,
        }
    }

    /// Writes the slope, intercept, and predictions on three lines.
    pub(crate) fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Slope: {:?}", self.line.slope())?;
        writeln!(out, "Intercept: {:?}", self.line.intercept())?;
        writeln!(
            out,
            "Predictions for {:?}: {:?}",
            self.inputs, self.predictions
        )
    }

    /// Writes the report as a single JSON object.
    pub(crate) fn write_json(&self, out: &mut impl Write) -> anyhow::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
