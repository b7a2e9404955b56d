//! Command handlers for the Boxpick binary.
//!
//! Each handler wires config, data sources, and the UI context together,
//! then hands rendering to `ui::views`.

pub mod dates;
pub mod interactive;
pub mod pick;

use std::path::{Path, PathBuf};

use anyhow::Result;

use boxpick::config::{Config, CONFIG_FILE};
use boxpick::{
    BoxpickError, Catalog, CatalogSource, JsonCatalogSource, JsonOrderSource, Order, OrderSource,
};

/// Load project config, printing unknown-key warnings in text mode.
pub(crate) fn load_config(cwd: &Path, json: bool) -> Config {
    let (config, warnings) = Config::load_or_default_with_warnings(Some(cwd));
    if !json && !warnings.is_empty() {
        crate::ui::output::print_config_warnings(&cwd.join(CONFIG_FILE), &warnings);
    }
    config
}

/// CLI flag wins over config.
pub(crate) fn resolve_data_dir(cli_data: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_data.unwrap_or_else(|| config.data.dir.clone())
}

/// Load both data sources once; everything downstream is read-only.
pub(crate) fn load_feed(data_dir: &Path) -> Result<(Vec<Order>, Catalog)> {
    let orders = JsonOrderSource::in_dir(data_dir).load()?;
    let catalog = JsonCatalogSource::in_dir(data_dir).load()?;
    Ok((orders, catalog))
}

/// Reject dates that are not YYYY-MM-DD before they reach the core.
///
/// The aggregation itself compares raw strings; this is early typo
/// detection at the CLI edge only.
pub(crate) fn validate_date(date: &str) -> Result<()> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            BoxpickError::InvalidDate {
                value: date.to_string(),
            }
            .into()
        })
}
