/// A fitted relationship that produces an output for each input.
///
/// Implemented by anything that can be applied point by point after fitting,
/// such as a regression line. Models that cannot fail use
/// [`std::convert::Infallible`] as their error.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies the model to one input.
    ///
    /// # Errors
    ///
    /// Returns an error if the model has no output for `input`.
    fn apply(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// One input together with the output a model produced for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Sample<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Splits the sample into its `(input, output)` pair.
    pub fn into_pair(self) -> (I, O) {
        (self.input, self.output)
    }
}

/// Applies the model to each input in order, pairing inputs with outputs.
///
/// Stops at the first failing call.
///
/// # Errors
///
/// Returns the model's error for the first input it rejects.
pub fn evaluate<M>(
    model: &M,
    inputs: impl IntoIterator<Item = M::Input>,
) -> Result<Vec<Sample<M::Input, M::Output>>, M::Error>
where
    M: Model,
{
    inputs
        .into_iter()
        .map(|input| {
            let output = model.apply(&input)?;
            Ok(Sample::new(input, output))
        })
        .collect()
}
