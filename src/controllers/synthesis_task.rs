use std::io::Write;
use std::sync::Arc;

use crate::{
    domain::synthesis::{JobSubmitterApi, SubmissionOutcome, SynthesisRequest},
    error::{AppError, AppResult},
};

pub struct SynthesisTaskController {
    job_submitter: Arc<dyn JobSubmitterApi>,
    verbose: bool,
}

impl SynthesisTaskController {
    pub fn new(job_submitter: Arc<dyn JobSubmitterApi>, verbose: bool) -> Self {
        Self {
            job_submitter,
            verbose,
        }
    }

    /// Start a synthesis task and write the outcome to `out`.
    ///
    /// A rejected submission is reported as text, not as an error. Only a
    /// failure to write the report is returned as `Err`.
    pub async fn start<W: Write>(
        &self,
        request: SynthesisRequest,
        out: &mut W,
    ) -> AppResult<SubmissionOutcome> {
        let outcome = self.job_submitter.submit(request).await;

        writeln!(out, "{}", outcome)?;

        if self.verbose {
            if let SubmissionOutcome::Started(handle) = &outcome {
                let dump = serde_json::to_string_pretty(handle)
                    .map_err(|e| AppError::Internal(format!("Failed to render task: {}", e)))?;
                writeln!(out, "{}", dump)?;
            }
        }

        out.flush()?;
        Ok(outcome)
    }
}
