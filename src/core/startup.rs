use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::catalog::items::Catalog;
use crate::core::config::Config;
use crate::core::state::AppState;
use crate::stores::properties::PropertyTable;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: BTreeMap<String, String>,
}

/// Build the item catalog from inline items plus the optional catalog file
pub fn build_catalog(config: &Config) -> Result<Catalog> {
    let mut items = config.catalog.items.clone();

    if let Some(path) = &config.catalog.path {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;
        let file: CatalogFile = toml::from_str(&content)
            .context(format!("Failed to parse catalog file: {}", path.display()))?;

        info!(path = %path.display(), items = file.items.len(), "Catalog file loaded");
        items.extend(file.items);
    }

    let catalog = Catalog::new(items);
    if catalog.is_empty() {
        warn!("Item catalog is empty, only numeric item ids will resolve");
    }

    Ok(catalog)
}

/// Load `server.properties`. A missing file yields an empty table.
pub fn load_properties(path: &Path) -> Result<PropertyTable> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "Properties file not found, property queries will return nothing"
        );
        return Ok(PropertyTable::default());
    }

    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read properties file: {}", path.display()))?;

    Ok(PropertyTable::parse(&content))
}

// this runs at boot time
pub fn build_state(config: Config, now: i64) -> Result<AppState> {
    let catalog = build_catalog(&config)?;
    let properties = load_properties(&config.server.properties_file)?;

    let state = AppState::new(config, catalog, properties, now);

    info!(
        items = state.catalog.len(),
        buckets = state.catalog.bucket_count(),
        kits = state.kits.len(),
        properties = state.properties.len(),
        operators = state.operators.len(),
        half_operators = state.half_operators.len(),
        "State initialized"
    );
    debug!(
        operators = ?state.operators.list(),
        half_operators = ?state.half_operators.list(),
        "Roles seeded"
    );

    Ok(state)
}
