use serde::Deserialize;
use std::env;

const DEFAULT_AWS_REGION: &str = "us-east-2";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub aws_region: String,
    pub aws_profile: Option<String>,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            aws_region: env::var("AWS_REGION")
                .ok()
                .filter(|region| !region.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            aws_profile: env::var("AWS_PROFILE")
                .ok()
                .filter(|profile| !profile.trim().is_empty()),
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .to_lowercase()
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    /// Apply command line overrides on top of the environment
    pub fn with_overrides(mut self, region: Option<String>, profile: Option<String>) -> Self {
        if let Some(region) = region {
            self.aws_region = region;
        }
        if let Some(profile) = profile {
            self.aws_profile = Some(profile);
        }
        self
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Default tracing filter when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "polly_synthesis_task=debug"
        } else {
            "polly_synthesis_task=info"
        }
    }
}
