use aws_config::{retry::RetryConfig, BehaviorVersion, Region};
use aws_sdk_polly::Client as PollyClient;

use crate::infrastructure::config::Config;

/// Build the Polly client from the default AWS credential chain.
///
/// Retries are disabled: one submission is exactly one request.
pub async fn create_polly_client(config: &Config) -> PollyClient {
    tracing::info!(
        region = %config.aws_region,
        profile = config.aws_profile.as_deref().unwrap_or("<default chain>"),
        "Initializing AWS Polly client"
    );

    // Check for AWS credentials in environment (for debugging)
    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    tracing::debug!(
        has_access_key_id = has_access_key,
        has_secret_access_key = has_secret_key,
        "AWS credentials environment check"
    );

    if config.aws_profile.is_none() && (!has_access_key || !has_secret_key) {
        tracing::debug!("AWS credentials not found in environment variables. Will attempt to use other credential providers (shared config, instance metadata, etc.)");
    }

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .retry_config(RetryConfig::disabled());

    if let Some(profile) = &config.aws_profile {
        loader = loader.profile_name(profile);
    }

    let aws_config = loader.load().await;

    tracing::debug!(region = ?aws_config.region(), "AWS configuration loaded");

    PollyClient::new(&aws_config)
}
