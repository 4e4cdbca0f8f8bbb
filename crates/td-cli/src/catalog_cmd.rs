use std::io::{self, Write};
use std::path::Path;

use td_catalog::{builtin_catalog, count_steps, parse_catalog_json};
use td_core::{Catalog, TermDrillError};

use crate::{
    load_catalog_file, map_cli_io, map_cli_output_encode, read_catalogs_from_dir,
    resolve_catalog_dir, CatalogArgs, CatalogCommand, CheckArgs, ListArgs,
};

pub(super) fn run_catalog(args: CatalogArgs) -> Result<i32, TermDrillError> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match args.command {
        CatalogCommand::List(list) => run_list(&list, &mut writer),
        CatalogCommand::Check(check) => run_check(&check, &mut writer),
    }
}

fn run_list(args: &ListArgs, writer: &mut dyn Write) -> Result<i32, TermDrillError> {
    let catalog = match &args.catalog {
        Some(path) => parse_catalog_json(&load_catalog_file(path)?)?,
        None => builtin_catalog(args.domain.into())?,
    };
    write_catalog_listing(writer, &catalog)?;
    Ok(0)
}

pub(crate) fn write_catalog_listing(
    writer: &mut dyn Write,
    catalog: &Catalog,
) -> Result<(), TermDrillError> {
    writeln!(writer, "RESULT:OK").map_err(map_cli_io)?;
    for (index, scenario) in catalog.scenarios.iter().enumerate() {
        let title_json = serde_json::to_string(&scenario.title).map_err(map_cli_output_encode)?;
        writeln!(
            writer,
            "SCENARIO:{}|{}|{}|{}",
            index + 1,
            scenario.classification,
            scenario.steps.len(),
            title_json
        )
        .map_err(map_cli_io)?;
    }
    writer.flush().map_err(map_cli_io)
}

fn run_check(args: &CheckArgs, writer: &mut dyn Write) -> Result<i32, TermDrillError> {
    let catalog_dir = resolve_catalog_dir(&args.catalog_dir)?;
    check_catalog_dir(&catalog_dir, writer)?;
    Ok(0)
}

/// Validates every catalog file under `catalog_dir`, stopping at the first
/// invalid one. The failing file is named in the error message.
pub(crate) fn check_catalog_dir(
    catalog_dir: &Path,
    writer: &mut dyn Write,
) -> Result<(), TermDrillError> {
    let catalogs = read_catalogs_from_dir(catalog_dir)?;
    let mut lines = Vec::with_capacity(catalogs.len());
    for (file, source) in &catalogs {
        let catalog = parse_catalog_json(source).map_err(|error| {
            TermDrillError::new(error.code, format!("{}: {}", file, error.message))
        })?;
        tracing::debug!(file = %file, scenarios = catalog.len(), "catalog checked");
        lines.push(format!(
            "CATALOG:{}|scenarios:{}|steps:{}",
            file,
            catalog.len(),
            count_steps(&catalog)
        ));
    }

    writeln!(writer, "RESULT:OK").map_err(map_cli_io)?;
    for line in lines {
        writeln!(writer, "{}", line).map_err(map_cli_io)?;
    }
    writer.flush().map_err(map_cli_io)
}
