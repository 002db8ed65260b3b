//! Route command implementation.

use crate::cli::RouteArgs;
use crate::commands::classify::validate_amount;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use wayfinder_classifier::{resolve_domain, resolve_jurisdiction};
use wayfinder_domain::Domain;
use wayfinder_router::{ForumRouter, RouteInput};
use wayfinder_sdk::Wayfinder;

/// Execute the route command.
pub fn execute_route(args: RouteArgs, engine: &Wayfinder, formatter: &Formatter) -> Result<()> {
    let domain = parse_domain(&args.domain)?;
    let jurisdiction = resolve_jurisdiction(Some(&args.jurisdiction));

    let mut input = RouteInput::new(domain, jurisdiction);
    if let Some(amount) = args.amount {
        input = input.with_amount(validate_amount(amount)?);
    }
    if args.appeal {
        input = input.appeal();
    }
    if args.judicial_review {
        input = input.judicial_review();
    }

    let forum = ForumRouter::new(engine.registry(), engine.routing()).route(&input)?;
    println!("{}", formatter.format_forum(&forum)?);
    Ok(())
}

/// Accept exact domain names, then hint words like "tenant".
pub(crate) fn parse_domain(s: &str) -> Result<Domain> {
    if let Some(domain) = Domain::parse(s) {
        return Ok(domain);
    }
    match resolve_domain(s) {
        Domain::Other => Err(CliError::InvalidInput(format!("Unknown domain: {}", s))),
        domain => Ok(domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain() {
        assert_eq!(parse_domain("landlord-tenant").unwrap(), Domain::LandlordTenant);
        assert_eq!(parse_domain("employment").unwrap(), Domain::Employment);
        assert_eq!(parse_domain("other").unwrap(), Domain::Other);
        assert!(matches!(parse_domain("astrology"), Err(CliError::InvalidInput(_))));
    }
}
