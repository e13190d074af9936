use crate::fields::run_fields;
use crate::predict::{run_predict, PredictArgs};
use crate::session::{run_form, FormArgs};
use clap::{Parser, Subcommand};
use loanform::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Rate Predictor",
    about = "Estimate a loan interest rate from applicant details",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a full set of applicant fields and print the predicted rate
    Predict(PredictArgs),
    /// List every applicant field with its options or accepted range
    Fields,
    /// Fill in the form interactively (default command)
    Form(FormArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Form(FormArgs::default()));

    match command {
        Command::Predict(args) => run_predict(args).await,
        Command::Fields => {
            run_fields();
            Ok(())
        }
        Command::Form(args) => run_form(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_parses_a_full_flag_set() {
        let cli = Cli::try_parse_from([
            "loanform-cli",
            "predict",
            "--product-type",
            "secured",
            "--loan-term",
            "60",
            "--loan-amount",
            "20000",
            "--secured",
            "yes",
            "--co-applicant",
            "no",
            "--credit-score",
            "750",
            "--residency",
            "resident",
            "--citizenship-status",
            "citizen",
            "--visa-subclass",
            "75",
            "--visa-time-left",
            "12",
            "--age",
            "30",
            "--loan-purpose",
            "debt consolidation",
            "--repayment-frequency",
            "monthly",
        ])
        .expect("full flag set parses");

        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.loan_term, "60");
                assert_eq!(args.loan_purpose, "debt consolidation");
            }
            other => panic!("expected predict command, got {other:?}"),
        }
    }

    #[test]
    fn predict_requires_every_field() {
        Cli::try_parse_from(["loanform-cli", "predict", "--age", "30"])
            .expect_err("partial flag set rejected");
    }

    #[test]
    fn missing_subcommand_defaults_to_form() {
        let cli = Cli::try_parse_from(["loanform-cli"]).expect("bare invocation parses");
        assert!(cli.command.is_none());
    }
}
