use std::process::ExitCode;
use std::sync::Arc;

use course_faq::config::{init_tracing, AppConfig, ConfigError};
use course_faq::{build_app, run_server, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(ConfigError::MissingApiKey) => {
            println!("ERROR: OPENAI_API_KEY environment variable is not set.");
            println!("Please set it using: export OPENAI_API_KEY='your-key-here'");
            println!("Or create a .env file with: OPENAI_API_KEY=your-key-here");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            println!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&cfg.log_level);
    tracing::info!(service = "course-faq", base_url = %cfg.base_url, "starting");

    let app = build_app(Arc::new(AppState::from_config(&cfg)));

    if let Err(err) = run_server(app, &cfg.bind_addr()).await {
        tracing::error!(error = %err, "server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
