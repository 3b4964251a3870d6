mod boot;
mod cli;
mod runner;

use std::io::IsTerminal;
use std::process::ExitCode;

use gembot_ai::GeminiConnector;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use runner::ChatRunner;

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
        eprintln!("\n\nBot: Something went wrong on my side. Goodbye!");
    }));
}

fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_env("GEMBOT_LOG").add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    // Load .env file before anything reads the environment
    boot::load_dotenv();

    let args = cli::parse();
    let (config, config_error) = boot::load_config(args.config.as_deref());

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("gembot={}", config.logging.level.as_directive()));
    init_logging(&log_directive);
    install_panic_hook();

    tracing::info!("gembot v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let template = boot::gemini_template(&config, args.model.as_deref());
    let env_credential = boot::credential_from_env(&config.api.key_env);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("ERROR: failed to start the async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        let interrupt = CancellationToken::new();
        let on_signal = interrupt.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => on_signal.cancel(),
                Err(e) => tracing::warn!("Failed to listen for Ctrl-C: {e}"),
            }
        });

        let stdout = std::io::stdout();
        let transient = stdout.is_terminal();
        ChatRunner::new(
            tokio::io::BufReader::new(tokio::io::stdin()),
            stdout,
            GeminiConnector,
            template,
            interrupt,
        )
        .with_env_credential(env_credential)
        .with_transient_status(transient)
        .run()
        .await
    });

    // A blocking stdin read may still be parked; do not wait for it.
    runtime.shutdown_background();

    match result {
        Ok(outcome) => {
            tracing::info!(?outcome, "shutdown complete");
            if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            tracing::error!("chat session failed: {e}");
            eprintln!("\nERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
