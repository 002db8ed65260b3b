//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use wayfinder_sdk::{MatterInput, Wayfinder};

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, engine: &Wayfinder, formatter: &Formatter) -> Result<()> {
    let input = matter_input(&args.text, args.domain, args.jurisdiction, args.amount)?;
    let classification = engine.classifier().classify(&input);

    println!("{}", formatter.format_classification(&classification)?);
    Ok(())
}

/// Build intake data from command-line values.
pub(crate) fn matter_input(
    text: &str,
    domain: Option<String>,
    jurisdiction: Option<String>,
    amount: Option<f64>,
) -> Result<MatterInput> {
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Description must not be empty".to_string()));
    }

    let mut input = MatterInput::new(text.trim());
    input.domain_hint = domain;
    input.jurisdiction_hint = jurisdiction;
    if let Some(amount) = amount {
        input = input.with_amount(validate_amount(amount)?);
    }
    Ok(input)
}

/// Reject negative and non-finite amounts.
pub(crate) fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CliError::InvalidInput(format!(
            "Amount must be a non-negative number, got {}",
            amount
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matter_input_trims_and_keeps_hints() {
        let input = matter_input("  tenant issue ", Some("tenant".into()), None, Some(500.0)).unwrap();
        assert_eq!(input.description, "tenant issue");
        assert_eq!(input.domain_hint.as_deref(), Some("tenant"));
        assert_eq!(input.dispute_amount, Some(500.0));
    }

    #[test]
    fn test_empty_description_rejected() {
        assert!(matches!(
            matter_input("   ", None, None, None),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_amount_validation() {
        assert_eq!(validate_amount(0.0).unwrap(), 0.0);
        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }
}
