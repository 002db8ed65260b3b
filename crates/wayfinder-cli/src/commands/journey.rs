//! Journey command implementation.

use crate::cli::JourneyArgs;
use crate::error::Result;
use crate::output::Formatter;
use wayfinder_domain::MatterStatus;
use wayfinder_router::{JourneyContext, JourneyTracker};

/// Execute the journey command.
pub fn execute_journey(args: JourneyArgs, formatter: &Formatter) -> Result<()> {
    let status = if args.unclassified {
        MatterStatus::Intake
    } else {
        MatterStatus::Classified
    };
    let progress = JourneyTracker::new().build_progress(&JourneyContext::new(
        status,
        args.evidence,
        args.documents,
    ));

    println!("{}", formatter.format_progress(&progress)?);
    Ok(())
}
