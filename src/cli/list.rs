//! Handler for `hindsight list`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::app::PredictionService;
use crate::error::Result;

#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Submitter")]
    submitter: String,
    #[tabled(rename = "Value")]
    value: i64,
    #[tabled(rename = "Submitted")]
    submitted_at: String,
}

/// Print every prediction in submission order.
pub fn execute(service: &PredictionService) -> Result<()> {
    let snapshot = service.snapshot();

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "owner": snapshot.owner,
            "threshold": snapshot.threshold,
            "predictions": snapshot
                .predictions
                .iter()
                .map(|p| json!({
                    "submitter": p.submitter(),
                    "value": p.value(),
                    "submitted_at": p.submitted_at().to_rfc3339(),
                }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Registry");
    output::field("Owner", &snapshot.owner);
    output::field("Threshold", snapshot.threshold);
    output::field("Predictions", snapshot.predictions.len());

    if snapshot.predictions.is_empty() {
        output::note("No predictions recorded yet.");
        return Ok(());
    }

    let rows: Vec<PredictionRow> = snapshot
        .predictions
        .iter()
        .enumerate()
        .map(|(i, p)| PredictionRow {
            position: i + 1,
            submitter: p.submitter().to_string(),
            value: p.value(),
            submitted_at: p.submitted_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    println!();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
