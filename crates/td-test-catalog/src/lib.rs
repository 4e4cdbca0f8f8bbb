use std::path::PathBuf;

use td_catalog::CATALOG_FILE_SUFFIX;
use td_core::Domain;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn catalogs_root() -> PathBuf {
    workspace_root().join("catalogs")
}

pub fn catalog_path(domain: Domain) -> PathBuf {
    catalogs_root().join(format!("{}{}", domain.as_str(), CATALOG_FILE_SUFFIX))
}
