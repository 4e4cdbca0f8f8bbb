use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use td_catalog::CATALOG_FILE_SUFFIX;
use td_core::TermDrillError;
use walkdir::WalkDir;

use crate::{map_cli_catalog_path, map_cli_catalog_read, map_cli_catalog_scan};

pub(crate) fn load_catalog_file(catalog_path: &str) -> Result<String, TermDrillError> {
    let absolute = absolute_path(catalog_path)?;
    if !absolute.is_file() {
        return Err(TermDrillError::new(
            "CLI_CATALOG_NOT_FOUND",
            format!("catalog file does not exist: {}", absolute.display()),
        ));
    }
    tracing::debug!(path = %absolute.display(), "reading catalog file");
    fs::read_to_string(&absolute).map_err(map_cli_catalog_read)
}

pub(crate) fn resolve_catalog_dir(catalog_dir: &str) -> Result<PathBuf, TermDrillError> {
    let absolute = absolute_path(catalog_dir)?;

    if !absolute.exists() {
        return Err(TermDrillError::new(
            "CLI_CATALOG_NOT_FOUND",
            format!("catalog-dir does not exist: {}", absolute.display()),
        ));
    }

    if !absolute.is_dir() {
        return Err(TermDrillError::new(
            "CLI_CATALOG_NOT_DIR",
            format!("catalog-dir is not a directory: {}", absolute.display()),
        ));
    }

    Ok(absolute)
}

/// Relative path (forward slashes) to file contents for every catalog file
/// under `catalog_dir`.
pub(crate) fn read_catalogs_from_dir(
    catalog_dir: &Path,
) -> Result<BTreeMap<String, String>, TermDrillError> {
    let mut catalogs = BTreeMap::new();

    for entry in WalkDir::new(catalog_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !path.to_string_lossy().ends_with(CATALOG_FILE_SUFFIX) {
            continue;
        }

        let relative = path
            .strip_prefix(catalog_dir)
            .map_err(map_cli_catalog_scan)?
            .to_string_lossy()
            .replace('\\', "/");

        let content = fs::read_to_string(path).map_err(map_cli_catalog_read)?;
        catalogs.insert(relative, content);
    }

    if catalogs.is_empty() {
        return Err(TermDrillError::new(
            "CLI_CATALOG_EMPTY",
            format!(
                "No {} files under {}",
                CATALOG_FILE_SUFFIX,
                catalog_dir.display()
            ),
        ));
    }

    Ok(catalogs)
}

fn absolute_path(raw: &str) -> Result<PathBuf, TermDrillError> {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(std::env::current_dir()
        .map_err(map_cli_catalog_path)?
        .join(path))
}
