use clap::Parser;
use polly_synthesis_task::controllers::synthesis_task::SynthesisTaskController;
use polly_synthesis_task::domain::synthesis::JobSubmitter;
use polly_synthesis_task::error::{AppError, AppResult};
use polly_synthesis_task::infrastructure::aws::create_polly_client;
use polly_synthesis_task::infrastructure::cli::CliArgs;
use polly_synthesis_task::infrastructure::config::{Config, LogFormat};
use polly_synthesis_task::infrastructure::repositories::PollySynthesisTaskRepository;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if let Err(err) = run(args).await {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}

async fn run(args: CliArgs) -> AppResult<()> {
    // Load configuration
    let config = Config::from_env().with_overrides(args.region.clone(), args.profile.clone());

    // Initialize logging
    init_logging(&config)?;

    let request = args.to_request().map_err(AppError::from)?;

    let polly_client = Arc::new(create_polly_client(&config).await);

    // === DEPENDENCY INJECTION SETUP ===
    let task_repo = Arc::new(PollySynthesisTaskRepository::new(polly_client));
    let job_submitter = Arc::new(JobSubmitter::new(task_repo));
    let controller = SynthesisTaskController::new(job_submitter, args.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    controller.start(request, &mut out).await?;

    Ok(())
}

fn init_logging(config: &Config) -> AppResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());

    let result = if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
