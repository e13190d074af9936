use serde::{Deserialize, Serialize};

use super::field::Field;

/// The one user-facing failure line. Network failures, non-2xx statuses, and
/// unparseable bodies all collapse to this message.
pub const FAILURE_MESSAGE: &str = "Error fetching prediction. Please try again.";

/// Raw form values exactly as entered, one string per applicant field.
///
/// Categorical fields hold the numeric wire code as a string; numeric fields
/// hold whatever the applicant typed. Conversion happens at encode time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantInput {
    pub product_type: String,
    pub loan_term: String,
    pub loan_amount: String,
    pub secured: String,
    pub co_applicant: String,
    pub credit_score: String,
    pub residency: String,
    pub citizenship_status: String,
    pub visa_subclass: String,
    pub visa_time_left: String,
    pub age: String,
    pub loan_purpose: String,
    pub repayment_frequency: String,
}

impl ApplicantInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ProductType => &self.product_type,
            Field::LoanTerm => &self.loan_term,
            Field::LoanAmount => &self.loan_amount,
            Field::Secured => &self.secured,
            Field::CoApplicant => &self.co_applicant,
            Field::CreditScore => &self.credit_score,
            Field::Residency => &self.residency,
            Field::CitizenshipStatus => &self.citizenship_status,
            Field::VisaSubclass => &self.visa_subclass,
            Field::VisaTimeLeft => &self.visa_time_left,
            Field::Age => &self.age,
            Field::LoanPurpose => &self.loan_purpose,
            Field::RepaymentFrequency => &self.repayment_frequency,
        }
    }

    /// Replace exactly one field, leaving the other twelve untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ProductType => &mut self.product_type,
            Field::LoanTerm => &mut self.loan_term,
            Field::LoanAmount => &mut self.loan_amount,
            Field::Secured => &mut self.secured,
            Field::CoApplicant => &mut self.co_applicant,
            Field::CreditScore => &mut self.credit_score,
            Field::Residency => &mut self.residency,
            Field::CitizenshipStatus => &mut self.citizenship_status,
            Field::VisaSubclass => &mut self.visa_subclass,
            Field::VisaTimeLeft => &mut self.visa_time_left,
            Field::Age => &mut self.age,
            Field::LoanPurpose => &mut self.loan_purpose,
            Field::RepaymentFrequency => &mut self.repayment_frequency,
        };
        *slot = value.into();
    }

    /// All thirteen fields hold a non-empty value.
    pub fn is_complete(&self) -> bool {
        Field::ordered().iter().all(|field| !self.get(*field).is_empty())
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ordered()
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// Tri-state result of the most recent submission attempt. Each resolution
/// fully replaces the previous outcome; no history is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Pending,
    Success { rate: f64 },
    Failure { message: String },
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Pending
    }
}

impl Outcome {
    pub fn failure() -> Self {
        Self::Failure {
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}
