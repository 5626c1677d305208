pub mod error;
pub mod model;
pub mod service;

pub use error::SynthesisServiceError;
pub use model::{
    ErrorDetail, OutputFormat, SubmissionOutcome, SynthesisRequest, SynthesisTaskHandle,
};
pub use service::{JobSubmitter, JobSubmitterApi};
