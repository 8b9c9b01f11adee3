//! Handler for `hindsight check`.

use serde_json::json;

use super::output;
use crate::app::{Config, PredictionService};
use crate::error::Result;

/// Validate the configuration against the persisted registry, if any.
///
/// Read-only: a missing database is reported, not created.
pub fn config(config: &Config) -> Result<()> {
    let snapshot = PredictionService::inspect(config)?;
    let predictions = snapshot.as_ref().map_or(0, |s| s.predictions.len());

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "valid": true,
            "owner": config.registry.owner,
            "threshold": config.registry.threshold,
            "database": config.database.url,
            "initialized": snapshot.is_some(),
            "predictions": predictions,
        }));
        return Ok(());
    }

    output::section("Configuration");
    output::field("Owner", &config.registry.owner);
    output::field("Threshold", config.registry.threshold);
    output::field("Database", &config.database.url);

    if snapshot.is_none() {
        output::warning("Registry not created yet; the first submit creates it");
    } else {
        output::field("Predictions", predictions);
    }
    output::success("Configuration is valid");
    Ok(())
}
