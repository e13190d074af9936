//! End-to-end specifications for the form submission lifecycle, driven
//! through the public controller facade with a scripted scoring service.

mod common {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use loanform::client::{PredictionError, ScoringService};
    use loanform::form::{Field, FormController};

    /// Scoring fake that replays scripted results and records every feature
    /// vector it was handed.
    #[derive(Default)]
    pub(crate) struct ScriptedScoring {
        responses: Mutex<VecDeque<Result<f64, PredictionError>>>,
        pub(crate) submitted: Mutex<Vec<Vec<f64>>>,
    }

    impl ScriptedScoring {
        pub(crate) fn respond_with(
            results: impl IntoIterator<Item = Result<f64, PredictionError>>,
        ) -> Self {
            Self {
                responses: Mutex::new(results.into_iter().collect()),
                submitted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ScoringService for ScriptedScoring {
        async fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
            self.submitted
                .lock()
                .expect("submission log poisoned")
                .push(features.to_vec());
            self.responses
                .lock()
                .expect("response script poisoned")
                .pop_front()
                .unwrap_or(Err(PredictionError::Status { status: 500 }))
        }
    }

    /// The worked example from the wire contract: a secured 60-month $20k
    /// loan for a 30-year-old citizen consolidating debt.
    pub(crate) fn filled_controller() -> FormController {
        let mut controller = FormController::new();
        for (field, value) in [
            (Field::ProductType, "1"),
            (Field::LoanTerm, "60"),
            (Field::LoanAmount, "20000"),
            (Field::Secured, "1"),
            (Field::CoApplicant, "0"),
            (Field::CreditScore, "750"),
            (Field::Residency, "0"),
            (Field::CitizenshipStatus, "1"),
            (Field::VisaSubclass, "75"),
            (Field::VisaTimeLeft, "12"),
            (Field::Age, "30"),
            (Field::LoanPurpose, "4"),
            (Field::RepaymentFrequency, "2"),
        ] {
            controller.update_field(field, value);
        }
        controller
    }
}

use common::{filled_controller, ScriptedScoring};
use loanform::client::{PredictionError, PredictionRequest, ScoringService};
use loanform::form::{EncodeError, Field, FormController, Outcome, FAILURE_MESSAGE};
use serde_json::json;

#[tokio::test]
async fn submit_sends_the_documented_feature_vector() {
    let service = ScriptedScoring::respond_with([Ok(7.25)]);
    let mut controller = filled_controller();

    controller.submit(&service).await.expect("complete form submits");

    let submitted = service.submitted.lock().expect("submission log poisoned");
    assert_eq!(
        submitted.as_slice(),
        &[vec![1.0, 60.0, 20000.0, 1.0, 0.0, 750.0, 0.0, 1.0, 75.0, 12.0, 30.0, 4.0, 2.0]]
    );

    let body = serde_json::to_value(PredictionRequest {
        features: &submitted[0],
    })
    .expect("request serializes");
    assert_eq!(
        body,
        json!({
            "features": [1.0, 60.0, 20000.0, 1.0, 0.0, 750.0, 0.0, 1.0, 75.0, 12.0, 30.0, 4.0, 2.0]
        })
    );
}

#[tokio::test]
async fn success_sets_the_rate_and_clears_a_prior_failure() {
    let service = ScriptedScoring::respond_with([
        Err(PredictionError::Network {
            message: "connection reset".to_string(),
        }),
        Ok(7.25),
    ]);
    let mut controller = filled_controller();

    controller.submit(&service).await.expect("first submission encodes");
    assert!(matches!(controller.outcome(), Outcome::Failure { .. }));

    controller.submit(&service).await.expect("second submission encodes");
    assert_eq!(controller.outcome(), &Outcome::Success { rate: 7.25 });
}

#[tokio::test]
async fn failure_sets_the_static_message_and_clears_a_prior_success() {
    let service = ScriptedScoring::respond_with([
        Ok(4.5),
        Err(PredictionError::Status { status: 503 }),
    ]);
    let mut controller = filled_controller();

    controller.submit(&service).await.expect("first submission encodes");
    assert_eq!(controller.outcome(), &Outcome::Success { rate: 4.5 });

    controller.submit(&service).await.expect("second submission encodes");
    assert_eq!(
        controller.outcome(),
        &Outcome::Failure {
            message: FAILURE_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn incomplete_form_never_reaches_the_service() {
    let service = ScriptedScoring::respond_with([Ok(7.25)]);
    let mut controller = FormController::new();
    controller.update_field(Field::Age, "30");

    let err = controller
        .submit(&service)
        .await
        .expect_err("incomplete form is a validation error");
    assert_eq!(
        err,
        EncodeError::Empty {
            field: Field::ProductType
        }
    );
    assert_eq!(controller.outcome(), &Outcome::Pending);
    assert!(service.submitted.lock().expect("submission log poisoned").is_empty());
}

#[tokio::test]
async fn non_numeric_value_never_reaches_the_service() {
    let service = ScriptedScoring::respond_with([Ok(7.25)]);
    let mut controller = filled_controller();
    controller.update_field(Field::LoanTerm, "five years");

    let err = controller
        .submit(&service)
        .await
        .expect_err("unparseable value is a validation error");
    assert!(matches!(err, EncodeError::NotNumeric { field: Field::LoanTerm, .. }));
    assert_eq!(controller.outcome(), &Outcome::Pending);
}

#[tokio::test]
async fn overlapping_submissions_resolve_last_wins() {
    // Two requests staged from the same record; the second submission's
    // response arrives first, the first submission's response arrives last
    // and determines the outcome.
    let service = ScriptedScoring::respond_with([Ok(9.9), Ok(6.1)]);
    let mut controller = filled_controller();

    let features = controller.feature_vector().expect("complete form encodes");
    let first = service.predict(&features).await;
    let second = service.predict(&features).await;

    controller.resolve(second);
    controller.resolve(first);

    assert_eq!(controller.outcome(), &Outcome::Success { rate: 9.9 });
}

#[tokio::test]
async fn editing_while_a_request_is_outstanding_is_allowed() {
    let service = ScriptedScoring::respond_with([Ok(7.25)]);
    let mut controller = filled_controller();

    let features = controller.feature_vector().expect("complete form encodes");
    controller.update_field(Field::LoanAmount, "35000");
    let result = service.predict(&features).await;
    controller.resolve(result);

    // The in-flight vector kept the staged value; the record has the edit.
    assert_eq!(service.submitted.lock().expect("submission log poisoned")[0][2], 20000.0);
    assert_eq!(controller.input().get(Field::LoanAmount), "35000");
    assert_eq!(controller.outcome(), &Outcome::Success { rate: 7.25 });
}
