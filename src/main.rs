use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use marketx::adapters::ReqwestHttpClient;
use marketx::app::{App, OutputMode};
use marketx::cli::{parse_args, run_cli_command, CliCommand};
use marketx::config::AppConfig;
use marketx::logging::init_tracing;
use marketx::ui::setup_panic_hook;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let CliCommand::Analyze {
        symbols,
        quote_only,
    } = command
    else {
        return Ok(());
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            eprintln!("Hint: {}", e.category().recovery_hint());
            std::process::exit(2);
        }
    };

    init_tracing(&config.log_filter).map_err(|e| eyre!("failed to initialise logging: {e}"))?;
    setup_panic_hook();

    let http = Arc::new(ReqwestHttpClient::new());
    let mut app = App::new(&config, http, OutputMode::detect());
    let outcomes = app.run(&symbols, quote_only).await?;

    if outcomes.iter().any(|o| o.is_failure()) {
        std::process::exit(1);
    }
    Ok(())
}
