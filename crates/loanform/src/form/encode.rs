use super::field::Field;
use super::state::ApplicantInput;

/// Raised when a form value cannot be projected into the feature vector.
///
/// The original form shipped unparseable values to the endpoint as NaN;
/// here conversion is checked before a request is built, and a failure is
/// reported as a validation error rather than a submission outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("field {field} is empty")]
    Empty { field: Field },
    #[error("field {field} holds '{value}', which is not a number")]
    NotNumeric { field: Field, value: String },
}

impl ApplicantInput {
    /// Project the record into the fixed-order numeric vector sent on the
    /// wire. Element order is exactly [`Field::ordered`].
    pub fn feature_vector(&self) -> Result<Vec<f64>, EncodeError> {
        Field::ordered()
            .into_iter()
            .map(|field| {
                let raw = self.get(field);
                if raw.is_empty() {
                    return Err(EncodeError::Empty { field });
                }
                raw.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| EncodeError::NotNumeric {
                        field,
                        value: raw.to_string(),
                    })
            })
            .collect()
    }
}
