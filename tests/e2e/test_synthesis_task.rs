use crate::e2e::helpers;

use aws_sdk_polly::error::ErrorMetadata;
use aws_sdk_polly::operation::start_speech_synthesis_task::StartSpeechSynthesisTaskError;
use aws_sdk_polly::types::{OutputFormat as PollyOutputFormat, VoiceId};
use aws_smithy_mocks::{mock, mock_client};
use aws_smithy_runtime_api::http::{Response as HttpResponse, StatusCode};
use aws_smithy_types::body::SdkBody;
use helpers::aws_mocks::{create_unreachable_polly_client, scheduled_task_output};
use helpers::{sample_request, TestContext};
use polly_synthesis_task::domain::synthesis::{OutputFormat, SubmissionOutcome, SynthesisRequest};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_print_task_id_when_task_starts() {
    let rule = mock!(aws_sdk_polly::Client::start_speech_synthesis_task)
        .then_output(|| scheduled_task_output("abc123", "bucketName"));
    let ctx = TestContext::new(mock_client!(aws_sdk_polly, [&rule]), false);

    let run = ctx.run(sample_request()).await.unwrap();

    assert_eq!(run.stdout, "Task started: abc123\n");
    let handle = run.outcome.handle().expect("task should have started");
    assert_eq!(handle.task_id, "abc123");
    assert_eq!(handle.status.as_deref(), Some("scheduled"));
}

#[tokio::test]
async fn it_should_send_caller_fields_verbatim() {
    let rule = mock!(aws_sdk_polly::Client::start_speech_synthesis_task)
        .match_requests(|input| {
            input.text() == Some("¿Dónde está la biblioteca?  ")
                && input.output_format() == Some(&PollyOutputFormat::OggVorbis)
                && input.output_s3_bucket_name() == Some("my-audio-bucket")
                && input.voice_id() == Some(&VoiceId::Lupe)
        })
        .then_output(|| scheduled_task_output("verbatim", "my-audio-bucket"));
    let ctx = TestContext::new(mock_client!(aws_sdk_polly, [&rule]), false);

    let request = SynthesisRequest::new(
        "¿Dónde está la biblioteca?  ",
        OutputFormat::OggVorbis,
        "my-audio-bucket",
        "Lupe",
    )
    .unwrap();

    let run = ctx.run(request).await.unwrap();

    assert_eq!(run.outcome.handle().unwrap().task_id, "verbatim");
}

#[tokio::test]
async fn it_should_print_service_error_message() {
    let rule = mock!(aws_sdk_polly::Client::start_speech_synthesis_task).then_error(|| {
        StartSpeechSynthesisTaskError::generic(
            ErrorMetadata::builder()
                .code("UnrecognizedClientException")
                .message("The security token included in the request is invalid.")
                .build(),
        )
    });
    let ctx = TestContext::new(mock_client!(aws_sdk_polly, [&rule]), false);

    let run = ctx.run(sample_request()).await.unwrap();

    assert_eq!(
        run.stdout,
        "The security token included in the request is invalid.\n"
    );
    assert!(matches!(run.outcome, SubmissionOutcome::Failed(_)));
    assert!(run.outcome.handle().is_none());
}

#[tokio::test]
async fn it_should_print_message_from_rejected_http_response() {
    let rule = mock!(aws_sdk_polly::Client::start_speech_synthesis_task).then_http_response(|| {
        let mut response = HttpResponse::new(
            StatusCode::try_from(400).unwrap(),
            SdkBody::from(r#"{"message":"The provided Amazon S3 bucket name is invalid."}"#),
        );
        response
            .headers_mut()
            .insert("x-amzn-errortype", "InvalidS3BucketException");
        response
            .headers_mut()
            .insert("content-type", "application/json");
        response
    });
    let ctx = TestContext::new(mock_client!(aws_sdk_polly, [&rule]), true);

    let run = ctx.run(sample_request()).await.unwrap();

    assert_eq!(run.stdout, "The provided Amazon S3 bucket name is invalid.\n");
    assert!(run.outcome.handle().is_none());
}

#[tokio::test]
async fn it_should_dump_task_in_verbose_mode() {
    let rule = mock!(aws_sdk_polly::Client::start_speech_synthesis_task)
        .then_output(|| scheduled_task_output("abc123", "bucketName"));
    let ctx = TestContext::new(mock_client!(aws_sdk_polly, [&rule]), true);

    let run = ctx.run(sample_request()).await.unwrap();

    let (first_line, dump) = run.stdout.split_once('\n').unwrap();
    assert_eq!(first_line, "Task started: abc123");

    let json: serde_json::Value = serde_json::from_str(dump).unwrap();
    assert_eq!(json["task_id"], "abc123");
    assert_eq!(
        json["output_uri"],
        "https://s3.us-east-2.amazonaws.com/bucketName/abc123.mp3"
    );
    assert_eq!(json["voice_id"], "Joanna");
    assert_eq!(json["output_format"], "mp3");
    assert_eq!(json["engine"], "standard");
    assert_eq!(json["request_characters"], 40);
}

#[tokio::test]
async fn it_should_report_transport_failure_as_text() {
    let ctx = TestContext::new(create_unreachable_polly_client(), false);

    let run = ctx.run(sample_request()).await.unwrap();

    match &run.outcome {
        SubmissionOutcome::Failed(detail) => {
            assert!(!detail.message.is_empty());
            assert_eq!(run.stdout, format!("{}\n", detail.message));
        }
        SubmissionOutcome::Started(handle) => {
            panic!("unreachable endpoint returned task {}", handle.task_id)
        }
    }
}

#[tokio::test]
async fn it_should_keep_runs_against_separate_clients_independent() {
    let ok_rule = mock!(aws_sdk_polly::Client::start_speech_synthesis_task)
        .then_output(|| scheduled_task_output("first", "bucketName"));
    let err_rule = mock!(aws_sdk_polly::Client::start_speech_synthesis_task).then_error(|| {
        StartSpeechSynthesisTaskError::generic(
            ErrorMetadata::builder()
                .code("ThrottlingException")
                .message("Rate exceeded")
                .build(),
        )
    });

    let first_ctx = TestContext::new(mock_client!(aws_sdk_polly, [&ok_rule]), false);
    let second_ctx = TestContext::new(mock_client!(aws_sdk_polly, [&err_rule]), false);

    let first = first_ctx.run(sample_request()).await.unwrap();
    let second = second_ctx.run(sample_request()).await.unwrap();

    assert_eq!(first.stdout, "Task started: first\n");
    assert_eq!(second.stdout, "Rate exceeded\n");
}
