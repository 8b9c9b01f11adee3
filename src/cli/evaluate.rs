//! Handler for `hindsight evaluate`.

use serde_json::json;

use super::{output, EvaluateArgs};
use crate::app::PredictionService;
use crate::domain::{SubmitterId, ToleranceBand};
use crate::error::Result;

/// Evaluate predictions and print one line per match.
pub fn execute(service: &PredictionService, args: &EvaluateArgs) -> Result<()> {
    let caller = SubmitterId::new(args.caller.clone());
    let matches = service.evaluate(args.actual, &caller)?;
    let band = ToleranceBand::around(args.actual, service.threshold());

    if output::is_json() {
        output::json_output(json!({
            "command": "evaluate",
            "actual": args.actual,
            "band": band,
            "matches": matches,
        }));
        return Ok(());
    }

    output::section("Evaluation");
    output::field("Actual", args.actual);
    output::field("Band", band);
    output::field("Matches", matches.len());

    if matches.is_empty() {
        output::note("No predictions within tolerance.");
        return Ok(());
    }

    println!();
    for m in &matches {
        output::success(&format!("{} predicted {}", m.submitter, m.value));
    }
    Ok(())
}
