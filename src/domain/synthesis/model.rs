use super::error::SynthesisServiceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Encodings Polly can write a synthesis task in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "mp3")]
    Mp3,
    #[serde(rename = "ogg_vorbis")]
    OggVorbis,
    #[serde(rename = "pcm")]
    Pcm,
}

impl OutputFormat {
    /// Get the wire identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::OggVorbis => "ogg_vorbis",
            OutputFormat::Pcm => "pcm",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = SynthesisServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "mp3" => Ok(OutputFormat::Mp3),
            "ogg_vorbis" => Ok(OutputFormat::OggVorbis),
            "pcm" => Ok(OutputFormat::Pcm),
            other => Err(SynthesisServiceError::Invalid(format!(
                "unsupported output format '{}' (expected json, mp3, ogg_vorbis or pcm)",
                other
            ))),
        }
    }
}

/// Parameters of one asynchronous synthesis task.
///
/// Fields are kept exactly as the caller supplied them; the only check is
/// that the required ones are not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    text: String,
    output_format: OutputFormat,
    destination_bucket: String,
    voice_id: String,
}

impl SynthesisRequest {
    pub fn new(
        text: impl Into<String>,
        output_format: OutputFormat,
        destination_bucket: impl Into<String>,
        voice_id: impl Into<String>,
    ) -> Result<Self, SynthesisServiceError> {
        let request = Self {
            text: text.into(),
            output_format,
            destination_bucket: destination_bucket.into(),
            voice_id: voice_id.into(),
        };

        require_non_blank("text", &request.text)?;
        require_non_blank("destination bucket", &request.destination_bucket)?;
        require_non_blank("voice id", &request.voice_id)?;

        Ok(request)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn destination_bucket(&self) -> &str {
        &self.destination_bucket
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), SynthesisServiceError> {
    if value.trim().is_empty() {
        return Err(SynthesisServiceError::Invalid(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// A task the service accepted. Only `task_id` is guaranteed; the rest is
/// whatever the service chose to report at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisTaskHandle {
    pub task_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_characters: Option<i32>,
}

impl SynthesisTaskHandle {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            status: None,
            output_uri: None,
            created_at: None,
            voice_id: None,
            output_format: None,
            engine: None,
            request_characters: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Started(SynthesisTaskHandle),
    Failed(ErrorDetail),
}

impl SubmissionOutcome {
    pub fn handle(&self) -> Option<&SynthesisTaskHandle> {
        match self {
            SubmissionOutcome::Started(handle) => Some(handle),
            SubmissionOutcome::Failed(_) => None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.handle().is_some()
    }
}

impl std::fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionOutcome::Started(handle) => write!(f, "Task started: {}", handle.task_id),
            SubmissionOutcome::Failed(detail) => write!(f, "{}", detail.message),
        }
    }
}
