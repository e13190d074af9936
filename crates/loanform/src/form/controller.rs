use tracing::{info, warn};

use crate::client::{PredictionError, ScoringService};

use super::encode::EncodeError;
use super::field::Field;
use super::state::{ApplicantInput, Outcome};

/// Owns the form's editable record and the result of its latest submission.
///
/// All state lives here and nowhere else; callers drive it with discrete
/// events (a field edit, a submission, a resolution) so the lifecycle can be
/// exercised without any rendering harness.
#[derive(Debug, Default)]
pub struct FormController {
    input: ApplicantInput,
    outcome: Outcome,
}

impl FormController {
    /// Fresh controller: every field empty, no outcome yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ApplicantInput {
        &self.input
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Replace a single field with the raw value from the originating
    /// control. Any string is accepted, including empty; validation happens
    /// at encode time, never here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
    }

    /// Encode the current record into the wire-order feature vector.
    ///
    /// Exposed separately from [`submit`](Self::submit) so a caller can
    /// stage a request, await its exchange however it likes, and feed the
    /// result back through [`resolve`](Self::resolve).
    pub fn feature_vector(&self) -> Result<Vec<f64>, EncodeError> {
        self.input.feature_vector()
    }

    /// Project a finished exchange into the display outcome, replacing
    /// whatever was there. With overlapping submissions the last resolution
    /// wins; there is no in-flight guard and no stale-response discard.
    pub fn resolve(&mut self, result: Result<f64, PredictionError>) {
        self.outcome = match result {
            Ok(rate) => {
                info!(rate, "prediction received");
                Outcome::Success { rate }
            }
            Err(err) => {
                warn!(error = %err, "prediction request failed");
                Outcome::failure()
            }
        };
    }

    /// Full submission lifecycle: encode, exchange, resolve.
    ///
    /// A validation failure is returned to the caller and leaves the
    /// outcome untouched; wire failures of any kind become the static
    /// failure outcome. No retry, no timeout, no cancellation.
    pub async fn submit<S>(&mut self, service: &S) -> Result<&Outcome, EncodeError>
    where
        S: ScoringService + ?Sized,
    {
        let features = self.feature_vector()?;
        let result = service.predict(&features).await;
        self.resolve(result);
        Ok(&self.outcome)
    }
}
