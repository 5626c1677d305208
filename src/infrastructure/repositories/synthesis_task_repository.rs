use crate::domain::synthesis::{SynthesisRequest, SynthesisServiceError, SynthesisTaskHandle};
use async_trait::async_trait;

/// Repository for starting asynchronous synthesis tasks.
/// Abstracts the underlying speech service (AWS Polly today).
///
/// Implementations are responsible for:
/// - Sending the request fields to the provider unchanged
/// - Extracting the task identifier from the provider response
/// - Collapsing every provider failure into a single message
#[async_trait]
pub trait SynthesisTaskRepository: Send + Sync {
    /// Start a synthesis task whose output the provider writes to the
    /// request's destination bucket.
    ///
    /// # Errors
    /// Returns `SynthesisServiceError::Service` with the provider's message if
    /// the task could not be started
    async fn start_synthesis_task(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisTaskHandle, SynthesisServiceError>;
}
