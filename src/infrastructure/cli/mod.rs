use clap::Parser;

use crate::domain::synthesis::{OutputFormat, SynthesisRequest, SynthesisServiceError};

const DEFAULT_TEXT: &str = "This is a sample text to be synthesized.";

/// Start an Amazon Polly speech synthesis task that writes its audio to S3
#[derive(Debug, Parser)]
#[command(name = "polly-synthesis-task", version)]
pub struct CliArgs {
    /// Text to synthesize
    #[arg(short, long, default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Output encoding: json, mp3, ogg_vorbis or pcm
    #[arg(short = 'f', long = "format", default_value = "mp3")]
    pub output_format: OutputFormat,

    /// S3 bucket Polly writes the result to
    #[arg(short, long, env = "POLLY_OUTPUT_BUCKET")]
    pub bucket: String,

    /// Polly voice id
    #[arg(long = "voice", default_value = "Joanna")]
    pub voice_id: String,

    /// AWS region, overrides AWS_REGION
    #[arg(short, long)]
    pub region: Option<String>,

    /// Named AWS profile, overrides AWS_PROFILE
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Also print the accepted task as JSON
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn to_request(&self) -> Result<SynthesisRequest, SynthesisServiceError> {
        SynthesisRequest::new(
            self.text.clone(),
            self.output_format,
            self.bucket.clone(),
            self.voice_id.clone(),
        )
    }
}
