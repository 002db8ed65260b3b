//! Evidence command implementation.

use crate::cli::EvidenceArgs;
use crate::error::Result;
use crate::output::Formatter;
use wayfinder_domain::Provenance;
use wayfinder_evidence::EvidenceIndexer;

/// Execute the evidence command.
pub fn execute_evidence(args: EvidenceArgs, formatter: &Formatter) -> Result<()> {
    let provenance = Provenance::from(args.provenance);
    let mut indexer = EvidenceIndexer::new();

    for path in &args.files {
        let item = indexer.add_file(path, provenance)?;
        if indexer.find_by_hash(item.hash()).len() > 1 {
            eprintln!(
                "{}",
                formatter.warning(&format!("{} duplicates an earlier file", item.filename()))
            );
        }
    }

    println!("{}", formatter.format_evidence(indexer.items())?);
    Ok(())
}
