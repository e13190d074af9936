use serde::{Deserialize, Serialize};
use std::fmt;

/// One applicant attribute collected by the form.
///
/// Variant order is the wire order the scoring endpoint expects;
/// [`Field::ordered`] is the canonical source of that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ProductType,
    LoanTerm,
    LoanAmount,
    Secured,
    CoApplicant,
    CreditScore,
    Residency,
    CitizenshipStatus,
    VisaSubclass,
    VisaTimeLeft,
    Age,
    LoanPurpose,
    RepaymentFrequency,
}

/// One selectable option of a categorical field: the numeric wire code and
/// the label shown to the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeOption {
    pub code: u8,
    pub label: &'static str,
}

/// Input affordance for a field: a closed option set or a hinted range.
///
/// Numeric ranges are hints only; nothing rejects an out-of-range value
/// before submission.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Categorical { options: &'static [CodeOption] },
    Numeric { min: u32, max: u32 },
}

const PRODUCT_TYPE_OPTIONS: &[CodeOption] = &[
    CodeOption { code: 0, label: "Unsecured" },
    CodeOption { code: 1, label: "Secured" },
];

const YES_NO_OPTIONS: &[CodeOption] = &[
    CodeOption { code: 0, label: "No" },
    CodeOption { code: 1, label: "Yes" },
];

const RESIDENCY_OPTIONS: &[CodeOption] = &[
    CodeOption { code: 0, label: "Resident" },
    CodeOption { code: 1, label: "Non-Resident" },
    CodeOption { code: 2, label: "Permanent Resident" },
];

const CITIZENSHIP_OPTIONS: &[CodeOption] = &[
    CodeOption { code: 0, label: "Non-Citizen" },
    CodeOption { code: 1, label: "Citizen" },
];

const LOAN_PURPOSE_OPTIONS: &[CodeOption] = &[
    CodeOption { code: 0, label: "Personal" },
    CodeOption { code: 1, label: "Business" },
    CodeOption { code: 2, label: "Car" },
    CodeOption { code: 3, label: "Home Renovation" },
    CodeOption { code: 4, label: "Debt Consolidation" },
    CodeOption { code: 5, label: "Education" },
    CodeOption { code: 6, label: "Other" },
];

const REPAYMENT_FREQUENCY_OPTIONS: &[CodeOption] = &[
    CodeOption { code: 0, label: "Weekly" },
    CodeOption { code: 1, label: "Fortnightly" },
    CodeOption { code: 2, label: "Monthly" },
];

impl Field {
    pub const COUNT: usize = 13;

    /// Fields in the order their values appear in the feature vector.
    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::ProductType,
            Self::LoanTerm,
            Self::LoanAmount,
            Self::Secured,
            Self::CoApplicant,
            Self::CreditScore,
            Self::Residency,
            Self::CitizenshipStatus,
            Self::VisaSubclass,
            Self::VisaTimeLeft,
            Self::Age,
            Self::LoanPurpose,
            Self::RepaymentFrequency,
        ]
    }

    /// Stable field identifier, as used by the original form controls.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ProductType => "productType",
            Self::LoanTerm => "loanTerm",
            Self::LoanAmount => "loanAmount",
            Self::Secured => "secured",
            Self::CoApplicant => "coApplicant",
            Self::CreditScore => "creditScore",
            Self::Residency => "residency",
            Self::CitizenshipStatus => "citizenshipStatus",
            Self::VisaSubclass => "visaSubclass",
            Self::VisaTimeLeft => "visaTimeLeft",
            Self::Age => "age",
            Self::LoanPurpose => "loanPurpose",
            Self::RepaymentFrequency => "repaymentFrequency",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductType => "Product Type",
            Self::LoanTerm => "Loan Term (Months)",
            Self::LoanAmount => "Loan Amount ($)",
            Self::Secured => "Secured",
            Self::CoApplicant => "Co-Applicant",
            Self::CreditScore => "Credit Score",
            Self::Residency => "Residency",
            Self::CitizenshipStatus => "Citizenship Status",
            Self::VisaSubclass => "Visa Subclass",
            Self::VisaTimeLeft => "Visa Time Left (Months)",
            Self::Age => "Age",
            Self::LoanPurpose => "Loan Purpose",
            Self::RepaymentFrequency => "Repayment Frequency",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::ProductType => FieldKind::Categorical {
                options: PRODUCT_TYPE_OPTIONS,
            },
            Self::LoanTerm => FieldKind::Numeric { min: 12, max: 84 },
            Self::LoanAmount => FieldKind::Numeric {
                min: 1000,
                max: 500_000,
            },
            Self::Secured | Self::CoApplicant => FieldKind::Categorical {
                options: YES_NO_OPTIONS,
            },
            Self::CreditScore => FieldKind::Numeric { min: 300, max: 850 },
            Self::Residency => FieldKind::Categorical {
                options: RESIDENCY_OPTIONS,
            },
            Self::CitizenshipStatus => FieldKind::Categorical {
                options: CITIZENSHIP_OPTIONS,
            },
            Self::VisaSubclass => FieldKind::Numeric { min: 0, max: 100 },
            Self::VisaTimeLeft => FieldKind::Numeric { min: 0, max: 36 },
            Self::Age => FieldKind::Numeric { min: 18, max: 75 },
            Self::LoanPurpose => FieldKind::Categorical {
                options: LOAN_PURPOSE_OPTIONS,
            },
            Self::RepaymentFrequency => FieldKind::Categorical {
                options: REPAYMENT_FREQUENCY_OPTIONS,
            },
        }
    }

    /// Option table for categorical fields, `None` for numeric ones.
    pub const fn options(self) -> Option<&'static [CodeOption]> {
        match self.kind() {
            FieldKind::Categorical { options } => Some(options),
            FieldKind::Numeric { .. } => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|field| field.key() == key)
    }

    /// Resolve a raw choice for a categorical field to its code table entry.
    ///
    /// Accepts either the wire code ("1") or the label ("Secured",
    /// case-insensitive). The label path is the explicit label-to-code
    /// lookup that keeps display text decoupled from the wire encoding.
    pub fn resolve_choice(self, raw: &str) -> Result<&'static CodeOption, ChoiceError> {
        let options = match self.kind() {
            FieldKind::Categorical { options } => options,
            FieldKind::Numeric { .. } => {
                return Err(ChoiceError {
                    field: self,
                    value: raw.to_string(),
                })
            }
        };

        let trimmed = raw.trim();
        options
            .iter()
            .find(|option| {
                option.label.eq_ignore_ascii_case(trimmed)
                    || trimmed.parse::<u8>() == Ok(option.code)
            })
            .ok_or_else(|| ChoiceError {
                field: self,
                value: raw.to_string(),
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raised when a raw value does not match any option of a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid choice for {field}")]
pub struct ChoiceError {
    pub field: Field,
    pub value: String,
}
