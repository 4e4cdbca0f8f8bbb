use std::sync::Arc;

use td_catalog::{builtin_catalog, parse_catalog_json};
use td_core::{Catalog, DisplayScheme, Domain, TermDrillError};
use td_runtime::{ChallengeEngine, ChallengeEngineOptions, CommandMatcher};

#[derive(Clone, Default)]
pub struct CreateEngineOptions {
    /// Built-in catalog to play when no `catalog_json` is given. Also picks
    /// the display scheme for a JSON catalog that declares no domain.
    pub domain: Option<Domain>,
    pub catalog_json: Option<String>,
    pub scheme: Option<DisplayScheme>,
    pub matcher: Option<Arc<dyn CommandMatcher>>,
}

pub fn create_engine_for_domain(domain: Domain) -> Result<ChallengeEngine, TermDrillError> {
    create_engine(CreateEngineOptions {
        domain: Some(domain),
        ..CreateEngineOptions::default()
    })
}

pub fn create_engine(options: CreateEngineOptions) -> Result<ChallengeEngine, TermDrillError> {
    let catalog = resolve_catalog(options.domain, options.catalog_json.as_deref())?;
    ChallengeEngine::new(ChallengeEngineOptions {
        catalog,
        scheme: options.scheme,
        matcher: options.matcher,
    })
}

fn resolve_catalog(
    domain: Option<Domain>,
    catalog_json: Option<&str>,
) -> Result<Catalog, TermDrillError> {
    match (catalog_json, domain) {
        (Some(source), domain) => {
            let mut catalog = parse_catalog_json(source)?;
            if catalog.domain.is_none() {
                catalog.domain = domain;
            }
            Ok(catalog)
        }
        (None, Some(domain)) => builtin_catalog(domain),
        (None, None) => Err(TermDrillError::new(
            "API_CATALOG_MISSING",
            "Either a domain or catalog JSON must be provided.",
        )),
    }
}
