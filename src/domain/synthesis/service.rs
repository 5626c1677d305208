use super::model::{ErrorDetail, SubmissionOutcome, SynthesisRequest};
use crate::infrastructure::repositories::SynthesisTaskRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct JobSubmitter {
    task_repo: Arc<dyn SynthesisTaskRepository>,
}

impl JobSubmitter {
    pub fn new(task_repo: Arc<dyn SynthesisTaskRepository>) -> Self {
        Self { task_repo }
    }
}

#[async_trait]
pub trait JobSubmitterApi: Send + Sync {
    /// Start an asynchronous synthesis task
    ///
    /// This operation:
    /// - Makes exactly one call to the speech service, never retried
    /// - Asks the service to write the audio to the request's bucket
    /// - Reports the service's failure message instead of raising it
    ///
    /// Returns the task handle on success or the error detail on failure
    async fn submit(&self, request: SynthesisRequest) -> SubmissionOutcome;
}

#[async_trait]
impl JobSubmitterApi for JobSubmitter {
    async fn submit(&self, request: SynthesisRequest) -> SubmissionOutcome {
        tracing::info!(
            voice = request.voice_id(),
            output_format = %request.output_format(),
            bucket = request.destination_bucket(),
            text_length = request.text().len(),
            "Synthesis task submission"
        );

        match self.task_repo.start_synthesis_task(&request).await {
            Ok(handle) => {
                tracing::info!(task_id = %handle.task_id, "Synthesis task submitted");
                SubmissionOutcome::Started(handle)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Synthesis task submission failed");
                SubmissionOutcome::Failed(ErrorDetail::new(e.message()))
            }
        }
    }
}
