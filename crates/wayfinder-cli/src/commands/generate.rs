//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::commands::classify::matter_input;
use crate::error::Result;
use crate::output::Formatter;
use wayfinder_domain::Provenance;
use wayfinder_sdk::Wayfinder;

/// Execute the generate command.
///
/// Classifies the description, indexes each evidence file as an original
/// and prints the package the matching domain module produces.
pub fn execute_generate(args: GenerateArgs, engine: &Wayfinder, formatter: &Formatter) -> Result<()> {
    let input = matter_input(&args.text, args.domain, None, args.amount)?;
    let mut matter = engine.open_matter(input);

    for path in &args.evidence {
        matter.add_evidence_file(path, Provenance::Original)?;
    }

    let output = matter.generate_documents()?;
    println!("{}", formatter.format_documents(&output)?);
    Ok(())
}
