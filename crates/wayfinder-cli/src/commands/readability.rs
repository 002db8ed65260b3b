//! Readability command implementation.

use crate::cli::ReadabilityArgs;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use std::path::Path;
use wayfinder_evidence::ReadabilityScorer;

/// Execute the readability command.
pub fn execute_readability(args: ReadabilityArgs, formatter: &Formatter) -> Result<()> {
    let text = resolve_text(&args.input)?;
    let report = ReadabilityScorer::new().score(&text);

    println!("{}", formatter.format_readability(&report)?);
    Ok(())
}

/// Read `input` as a file when one exists at that path, else score it as text.
pub(crate) fn resolve_text(input: &str) -> Result<String> {
    let path = Path::new(input);
    if path.is_file() {
        Ok(fs::read_to_string(path)?)
    } else {
        Ok(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Pay the rent. Keep receipts.").unwrap();

        let text = resolve_text(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "Pay the rent. Keep receipts.");
    }

    #[test]
    fn test_resolve_text_literal() {
        assert_eq!(resolve_text("Just some words.").unwrap(), "Just some words.");
    }
}
