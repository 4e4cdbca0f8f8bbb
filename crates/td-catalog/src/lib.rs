use td_core::{Catalog, Domain, TermDrillError};

const DOCKER_CATALOG_JSON: &str = include_str!("../../../catalogs/docker.catalog.json");
const KUBERNETES_CATALOG_JSON: &str = include_str!("../../../catalogs/kubernetes.catalog.json");
const INCIDENT_CATALOG_JSON: &str = include_str!("../../../catalogs/incident.catalog.json");

pub const CATALOG_FILE_SUFFIX: &str = ".catalog.json";

pub fn builtin_catalog_json(domain: Domain) -> &'static str {
    match domain {
        Domain::Docker => DOCKER_CATALOG_JSON,
        Domain::Kubernetes => KUBERNETES_CATALOG_JSON,
        Domain::Incident => INCIDENT_CATALOG_JSON,
    }
}

pub fn builtin_catalog(domain: Domain) -> Result<Catalog, TermDrillError> {
    let mut catalog = parse_catalog_json(builtin_catalog_json(domain))?;
    catalog.domain.get_or_insert(domain);
    Ok(catalog)
}

pub fn parse_catalog_json(source: &str) -> Result<Catalog, TermDrillError> {
    let catalog: Catalog = serde_json::from_str(source).map_err(|error| {
        TermDrillError::new(
            "CATALOG_PARSE",
            format!("Catalog JSON is invalid: {}", error),
        )
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Rejects catalogs the engine cannot play: no scenarios, a scenario without
/// steps, or a step that no input could ever satisfy (or that any input would).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), TermDrillError> {
    if catalog.scenarios.is_empty() {
        return Err(TermDrillError::new(
            "CATALOG_EMPTY",
            "Catalog must contain at least one scenario.",
        ));
    }

    for (scenario_index, scenario) in catalog.scenarios.iter().enumerate() {
        if scenario.steps.is_empty() {
            return Err(TermDrillError::new(
                "CATALOG_SCENARIO_NO_STEPS",
                format!(
                    "Scenario #{} \"{}\" has no steps.",
                    scenario_index + 1,
                    scenario.title
                ),
            ));
        }

        for (step_index, step) in scenario.steps.iter().enumerate() {
            if step.accepted_commands.is_empty() {
                return Err(TermDrillError::new(
                    "CATALOG_STEP_NO_COMMANDS",
                    format!(
                        "Scenario #{} \"{}\" step {} has no accepted commands.",
                        scenario_index + 1,
                        scenario.title,
                        step_index + 1
                    ),
                ));
            }
            if step
                .accepted_commands
                .iter()
                .any(|command| command.trim().is_empty())
            {
                return Err(TermDrillError::new(
                    "CATALOG_STEP_BLANK_COMMAND",
                    format!(
                        "Scenario #{} \"{}\" step {} has a blank accepted command.",
                        scenario_index + 1,
                        scenario.title,
                        step_index + 1
                    ),
                ));
            }
        }
    }

    Ok(())
}

pub fn count_steps(catalog: &Catalog) -> usize {
    catalog
        .scenarios
        .iter()
        .map(|scenario| scenario.steps.len())
        .sum()
}
