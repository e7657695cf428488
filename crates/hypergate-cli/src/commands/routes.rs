//! Routes command handler for computing cheapest gate routes.

use std::path::Path;

use anyhow::{Context, Result};

use hypergate_lib::{find_routes, RouteQuery, RouteReport, RouteTarget};

use crate::commands::load_registry;
use crate::output::OutputFormat;

/// Destination spelling that selects the "every reachable gate" mode.
const ANYWHERE: &str = "anywhere";

/// Arguments for the routes command.
#[derive(Debug, Clone)]
pub struct RoutesCommandArgs {
    /// Starting gate code.
    pub from: String,
    /// Destination gate code; `None` or "anywhere" ranks every gate.
    pub to: Option<String>,
}

impl RoutesCommandArgs {
    /// Convert CLI args to a library route query.
    pub fn to_query(&self) -> RouteQuery {
        let target = match &self.to {
            None => RouteTarget::Anywhere,
            Some(code) if code.eq_ignore_ascii_case(ANYWHERE) => RouteTarget::Anywhere,
            Some(code) => RouteTarget::Gate(code.clone()),
        };
        RouteQuery {
            start: self.from.clone(),
            target,
        }
    }
}

/// Handle the routes subcommand.
///
/// Computes the cheapest routes from a starting gate using the loaded
/// dataset and renders them in the requested format.
pub fn handle_routes_command(
    gates_file: Option<&Path>,
    format: OutputFormat,
    args: &RoutesCommandArgs,
) -> Result<()> {
    let registry = load_registry(gates_file)?;

    let query = args.to_query();
    let routes = find_routes(&registry, &query).context("failed to compute routes")?;
    let report = RouteReport::from_routes(&registry, &query.start, routes);

    match format {
        OutputFormat::Text => print!("{}", report.render_plain()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_destination_selects_anywhere() {
        let args = RoutesCommandArgs {
            from: "SOL".to_string(),
            to: None,
        };
        assert_eq!(args.to_query().target, RouteTarget::Anywhere);
    }

    #[test]
    fn anywhere_spelling_is_case_insensitive() {
        for spelling in ["anywhere", "ANYWHERE", "AnyWhere"] {
            let args = RoutesCommandArgs {
                from: "SOL".to_string(),
                to: Some(spelling.to_string()),
            };
            assert_eq!(args.to_query().target, RouteTarget::Anywhere);
        }
    }

    #[test]
    fn explicit_destination_is_kept_verbatim() {
        let args = RoutesCommandArgs {
            from: "SOL".to_string(),
            to: Some("PRX".to_string()),
        };
        assert_eq!(
            args.to_query().target,
            RouteTarget::Gate("PRX".to_string())
        );
    }
}
