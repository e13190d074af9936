use loanform::form::{Field, FieldKind};

/// Print every applicant field with its accepted codes or numeric range.
pub(crate) fn run_fields() {
    println!("Applicant fields (in wire order)");
    for field in Field::ordered() {
        match field.kind() {
            FieldKind::Categorical { options } => {
                let choices: Vec<String> = options
                    .iter()
                    .map(|option| format!("{} = {}", option.code, option.label))
                    .collect();
                println!("- {} ({}): {}", field.label(), field.key(), choices.join(", "));
            }
            FieldKind::Numeric { min, max } => {
                println!("- {} ({}): {}-{}", field.label(), field.key(), min, max);
            }
        }
    }
}
