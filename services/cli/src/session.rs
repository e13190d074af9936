use std::io::{self, BufRead, Write};

use clap::Args;
use loanform::client::PredictionClient;
use loanform::config::AppConfig;
use loanform::error::AppError;
use loanform::form::{Field, FieldKind, FormController, Outcome};
use loanform::telemetry;
use tracing::info;

use crate::predict::{render_outcome, scoring_config, staged_value};

#[derive(Args, Debug, Default)]
pub(crate) struct FormArgs {
    /// Override the configured scoring endpoint
    #[arg(long)]
    pub(crate) endpoint: Option<String>,
    /// Emit the outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

/// Interactive session: prompt every field in order, submit, render the
/// outcome, and offer a resubmission after a failed exchange.
pub(crate) async fn run_form(args: FormArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let scoring = scoring_config(&config, args.endpoint.as_deref())?;
    let client = PredictionClient::new(&scoring);
    info!(endpoint = %scoring.endpoint, "interactive form session started");

    println!("Loan Interest Prediction");
    println!("Fill in every field; selections accept the label or the code.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    let mut controller = FormController::new();
    for field in Field::ordered() {
        let value = prompt_field(field, &mut lines)?;
        controller.update_field(field, value);
    }

    loop {
        // Submission is gated on a complete record; every prompt above
        // refused to continue on an empty answer, so this cannot trip.
        controller.submit(&client).await?;
        render_outcome(controller.outcome(), args.json)?;

        if !matches!(controller.outcome(), Outcome::Failure { .. }) {
            return Ok(());
        }
        if !confirm_retry(&mut lines)? {
            return Ok(());
        }
    }
}

fn prompt_hint(field: Field) -> String {
    match field.kind() {
        FieldKind::Categorical { options } => {
            let choices: Vec<String> = options
                .iter()
                .map(|option| format!("{} = {}", option.code, option.label))
                .collect();
            choices.join(", ")
        }
        FieldKind::Numeric { min, max } => format!("{min}-{max}"),
    }
}

/// Keep asking until the answer is non-empty and, for categorical fields,
/// matches the code table. Returns the value the form stores.
fn prompt_field(field: Field, input: &mut dyn BufRead) -> Result<String, AppError> {
    loop {
        print!("{} [{}]: ", field.label(), prompt_hint(field));
        io::stdout().flush()?;

        let raw = read_answer(input)?;
        if raw.is_empty() {
            println!("{} is required.", field.label());
            continue;
        }

        match staged_value(field, &raw) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{err}"),
        }
    }
}

fn confirm_retry(input: &mut dyn BufRead) -> Result<bool, AppError> {
    print!("Try again with the same details? [y/N]: ");
    io::stdout().flush()?;
    let answer = read_answer(input)?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn read_answer(input: &mut dyn BufRead) -> Result<String, AppError> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the form was complete",
        )));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_repeats_until_populated() {
        let mut input = Cursor::new("\n\n750\n");
        let value = prompt_field(Field::CreditScore, &mut input).expect("third answer accepted");
        assert_eq!(value, "750");
    }

    #[test]
    fn prompt_resolves_labels_and_rejects_unknown_choices() {
        let mut input = Cursor::new("quarterly\nfortnightly\n");
        let value =
            prompt_field(Field::RepaymentFrequency, &mut input).expect("second answer accepted");
        assert_eq!(value, "1");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let err = prompt_field(Field::Age, &mut input).expect_err("EOF surfaces");
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn retry_only_on_explicit_yes() {
        let mut input = Cursor::new("y\n");
        assert!(confirm_retry(&mut input).expect("answer read"));

        let mut input = Cursor::new("\n");
        assert!(!confirm_retry(&mut input).expect("answer read"));
    }
}
