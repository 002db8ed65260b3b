//! Authorities command implementation.

use crate::cli::{AuthoritiesAction, AuthoritiesArgs};
use crate::error::Result;
use crate::output::Formatter;
use chrono::Utc;
use wayfinder_domain::Authority;
use wayfinder_router::{AuthorityRegistry, RegistryError, RouterError};
use wayfinder_sdk::Wayfinder;

/// Execute the authorities command.
pub fn execute_authorities(
    args: AuthoritiesArgs,
    engine: &Wayfinder,
    formatter: &Formatter,
) -> Result<()> {
    let registry = engine.registry();

    let output = match args.action {
        AuthoritiesAction::List => {
            let all: Vec<&Authority> = registry.list().iter().collect();
            formatter.format_authorities(&all)?
        }
        AuthoritiesAction::Show { id } => formatter.format_authority(require(registry, &id)?)?,
        AuthoritiesAction::Stale => formatter.format_authorities(&registry.stale(now_millis()))?,
        AuthoritiesAction::Escalation { id } => {
            require(registry, &id)?;
            formatter.format_authorities(&registry.get_escalation_route(&id))?
        }
    };

    println!("{}", output);
    Ok(())
}

fn require<'r>(registry: &'r AuthorityRegistry, id: &str) -> Result<&'r Authority> {
    registry
        .get_by_id(id)
        .ok_or_else(|| RouterError::from(RegistryError::AuthorityNotFound(id.to_string())).into())
}

/// Current time in Unix milliseconds.
pub(crate) fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_require_unknown_id() {
        let registry = AuthorityRegistry::ontario_defaults();
        assert!(require(&registry, "ON-LTB").is_ok());
        assert!(matches!(
            require(&registry, "XX-NOPE"),
            Err(CliError::Router(RouterError::Registry(_)))
        ));
    }

    #[test]
    fn test_now_is_after_2024() {
        assert!(now_millis() > 1_704_067_200_000);
    }
}
