use super::synthesis_task_repository::SynthesisTaskRepository;
use crate::domain::synthesis::{
    OutputFormat, SynthesisRequest, SynthesisServiceError, SynthesisTaskHandle,
};
use async_trait::async_trait;
use aws_sdk_polly::{
    error::{DisplayErrorContext, ProvideErrorMetadata},
    operation::start_speech_synthesis_task::StartSpeechSynthesisTaskOutput,
    types::{OutputFormat as PollyOutputFormat, VoiceId},
    Client as PollyClient,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// AWS Polly implementation of the synthesis task repository
pub struct PollySynthesisTaskRepository {
    polly_client: Arc<PollyClient>,
}

impl PollySynthesisTaskRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    fn polly_output_format(format: OutputFormat) -> PollyOutputFormat {
        match format {
            OutputFormat::Json => PollyOutputFormat::Json,
            OutputFormat::Mp3 => PollyOutputFormat::Mp3,
            OutputFormat::OggVorbis => PollyOutputFormat::OggVorbis,
            OutputFormat::Pcm => PollyOutputFormat::Pcm,
        }
    }

    /// Pull the task descriptor out of a StartSpeechSynthesisTask response
    fn handle_from_output(
        output: &StartSpeechSynthesisTaskOutput,
    ) -> Result<SynthesisTaskHandle, SynthesisServiceError> {
        let task = output.synthesis_task().ok_or_else(|| {
            SynthesisServiceError::Service(
                "AWS Polly response did not include a synthesis task".to_string(),
            )
        })?;

        let task_id = task.task_id().filter(|id| !id.is_empty()).ok_or_else(|| {
            SynthesisServiceError::Service(
                "AWS Polly response did not include a task id".to_string(),
            )
        })?;

        // Millisecond precision is enough for display
        let created_at = task
            .creation_time()
            .and_then(|time| time.to_millis().ok())
            .and_then(DateTime::<Utc>::from_timestamp_millis);

        Ok(SynthesisTaskHandle {
            task_id: task_id.to_string(),
            status: task.task_status().map(|status| status.as_str().to_string()),
            output_uri: task.output_uri().map(str::to_string),
            created_at,
            voice_id: task.voice_id().map(|voice| voice.as_str().to_string()),
            output_format: task.output_format().map(|format| format.as_str().to_string()),
            engine: task.engine().map(|engine| engine.as_str().to_string()),
            request_characters: Option::<i32>::from(task.request_characters()),
        })
    }
}

#[async_trait]
impl SynthesisTaskRepository for PollySynthesisTaskRepository {
    async fn start_synthesis_task(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisTaskHandle, SynthesisServiceError> {
        let start_time = std::time::Instant::now();
        let output_format = Self::polly_output_format(request.output_format());

        tracing::info!(
            voice = request.voice_id(),
            output_format = %request.output_format(),
            bucket = request.destination_bucket(),
            text_length = request.text().len(),
            text_preview = %request.text().chars().take(200).collect::<String>(),
            "Calling AWS Polly start_speech_synthesis_task"
        );

        let output = self
            .polly_client
            .start_speech_synthesis_task()
            .text(request.text())
            .output_format(output_format)
            .output_s3_bucket_name(request.destination_bucket())
            .voice_id(VoiceId::from(request.voice_id()))
            .send()
            .await
            .map_err(|e| {
                // Prefer the message the service put in the error body
                let message = e
                    .as_service_error()
                    .and_then(|service_error| service_error.message())
                    .map(str::to_string)
                    .unwrap_or_else(|| DisplayErrorContext(&e).to_string());

                tracing::error!(
                    error = ?e,
                    error_code = e.as_service_error().and_then(|se| se.code()),
                    voice = request.voice_id(),
                    bucket = request.destination_bucket(),
                    "AWS Polly start_speech_synthesis_task failed"
                );
                SynthesisServiceError::Service(message)
            })?;

        let handle = Self::handle_from_output(&output).map_err(|e| {
            tracing::error!(error = %e, "Unusable AWS Polly response");
            e
        })?;

        tracing::info!(
            provider = "polly",
            task_id = %handle.task_id,
            task_status = handle.status.as_deref().unwrap_or("unknown"),
            latency_ms = start_time.elapsed().as_millis(),
            "Synthesis task started"
        );

        Ok(handle)
    }
}
