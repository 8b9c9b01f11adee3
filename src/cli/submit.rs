//! Handler for `hindsight submit`.

use serde_json::json;

use super::{output, SubmitArgs};
use crate::app::PredictionService;
use crate::domain::SubmitterId;
use crate::error::Result;

/// Record a prediction and report the outcome.
pub fn execute(service: &PredictionService, args: &SubmitArgs) -> Result<()> {
    let submitter = SubmitterId::new(args.submitter.clone());
    service.submit(submitter.clone(), args.value)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "submit",
            "submitter": submitter,
            "value": args.value,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Recorded prediction {} for {}",
        args.value, submitter
    ));
    Ok(())
}
