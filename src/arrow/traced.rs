//! Opt-in stage instrumentation with `tracing`.

use tracing::{trace, trace_span};

/// Runs `function` inside an `arrow_stage` span labelled with `stage`.
///
/// A `trace!` event is emitted after the stage returns. The output is returned
/// as is; a panic unwinds through the span without being recorded or caught.
///
/// # Examples
///
/// ```rust
/// use arrowline::arrow::{compose, traced};
///
/// let parse = traced("parse", |text: &str| text.parse::<i32>().unwrap_or_default());
/// let pipeline = compose(parse, traced("double", |value: i32| value * 2));
/// assert_eq!(pipeline("21"), 42);
/// ```
#[inline]
pub fn traced<I, O, F>(stage: &'static str, function: F) -> impl Fn(I) -> O
where
    F: Fn(I) -> O,
{
    move |input| {
        let output = trace_span!("arrow_stage", stage).in_scope(|| function(input));
        trace!(stage, "stage completed");
        output
    }
}

impl<F> super::Arrow<F> {
    /// Instruments the whole arrow as one named stage. See [`traced`].
    #[inline]
    pub fn traced<I, O>(self, stage: &'static str) -> super::Arrow<impl Fn(I) -> O>
    where
        F: Fn(I) -> O,
    {
        super::Arrow::new(traced(stage, self.into_inner()))
    }
}
