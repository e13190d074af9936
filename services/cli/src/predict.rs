use clap::Args;
use loanform::client::PredictionClient;
use loanform::config::{AppConfig, ScoringConfig};
use loanform::error::AppError;
use loanform::form::{Field, FieldKind, FormController, Outcome};
use loanform::telemetry;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Product type: unsecured or secured (or the numeric code)
    #[arg(long)]
    pub(crate) product_type: String,
    /// Loan term in months (12-84)
    #[arg(long)]
    pub(crate) loan_term: String,
    /// Loan amount in dollars (1000-500000)
    #[arg(long)]
    pub(crate) loan_amount: String,
    /// Secured: yes or no
    #[arg(long)]
    pub(crate) secured: String,
    /// Co-applicant: yes or no
    #[arg(long)]
    pub(crate) co_applicant: String,
    /// Credit score (300-850)
    #[arg(long)]
    pub(crate) credit_score: String,
    /// Residency: resident, non-resident, or permanent resident
    #[arg(long)]
    pub(crate) residency: String,
    /// Citizenship status: citizen or non-citizen
    #[arg(long)]
    pub(crate) citizenship_status: String,
    /// Visa subclass (0-100)
    #[arg(long)]
    pub(crate) visa_subclass: String,
    /// Visa time left in months (0-36)
    #[arg(long)]
    pub(crate) visa_time_left: String,
    /// Applicant age (18-75)
    #[arg(long)]
    pub(crate) age: String,
    /// Loan purpose: personal, business, car, home renovation,
    /// debt consolidation, education, or other
    #[arg(long)]
    pub(crate) loan_purpose: String,
    /// Repayment frequency: weekly, fortnightly, or monthly
    #[arg(long)]
    pub(crate) repayment_frequency: String,
    /// Override the configured scoring endpoint
    #[arg(long)]
    pub(crate) endpoint: Option<String>,
    /// Emit the outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl PredictArgs {
    fn raw_values(&self) -> [(Field, &str); Field::COUNT] {
        [
            (Field::ProductType, self.product_type.as_str()),
            (Field::LoanTerm, self.loan_term.as_str()),
            (Field::LoanAmount, self.loan_amount.as_str()),
            (Field::Secured, self.secured.as_str()),
            (Field::CoApplicant, self.co_applicant.as_str()),
            (Field::CreditScore, self.credit_score.as_str()),
            (Field::Residency, self.residency.as_str()),
            (Field::CitizenshipStatus, self.citizenship_status.as_str()),
            (Field::VisaSubclass, self.visa_subclass.as_str()),
            (Field::VisaTimeLeft, self.visa_time_left.as_str()),
            (Field::Age, self.age.as_str()),
            (Field::LoanPurpose, self.loan_purpose.as_str()),
            (Field::RepaymentFrequency, self.repayment_frequency.as_str()),
        ]
    }
}

/// Resolve a raw flag or prompt value to what the form stores: the wire code
/// for categorical fields, the trimmed text for numeric ones.
pub(crate) fn staged_value(field: Field, raw: &str) -> Result<String, AppError> {
    match field.kind() {
        FieldKind::Categorical { .. } => {
            let option = field.resolve_choice(raw)?;
            Ok(option.code.to_string())
        }
        FieldKind::Numeric { .. } => Ok(raw.trim().to_string()),
    }
}

pub(crate) fn scoring_config(
    config: &AppConfig,
    endpoint_override: Option<&str>,
) -> Result<ScoringConfig, AppError> {
    match endpoint_override {
        Some(raw) => Ok(ScoringConfig::from_raw(raw)?),
        None => Ok(config.scoring.clone()),
    }
}

pub(crate) fn render_outcome(outcome: &Outcome, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    match outcome {
        Outcome::Success { rate } => println!("Predicted interest rate: {rate}%"),
        Outcome::Failure { message } => println!("{message}"),
        Outcome::Pending => println!("No submission yet."),
    }
    Ok(())
}

pub(crate) async fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let scoring = scoring_config(&config, args.endpoint.as_deref())?;
    let client = PredictionClient::new(&scoring);
    info!(endpoint = %scoring.endpoint, "submitting applicant details");

    let mut controller = FormController::new();
    for (field, raw) in args.raw_values() {
        controller.update_field(field, staged_value(field, raw)?);
    }

    controller.submit(&client).await?;
    render_outcome(controller.outcome(), args.json)
}
