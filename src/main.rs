// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so stdout only carries results)
// 3. Load the backend configuration
// 4. Run the finder: query -> request -> parse -> print
// 5. Exit with proper code (0 = success, 1 = error)
// =============================================================================

use clap::Parser;  // Parser trait enables the parse() method
use tracing_subscriber::EnvFilter;

// Everything else lives in the library half of the crate (src/lib.rs)
use starred_repo_finder::backend::HttpBackend;
use starred_repo_finder::cli::Cli;
use starred_repo_finder::config::BackendConfig;
use starred_repo_finder::finder;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

#[tokio::main]
async fn main() {
    // Parse command-line arguments into our Cli struct
    // Usage errors and --help are handled by clap (exit code 2 / 0)
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
async fn run(cli: Cli) -> Result<()> {
    let config = BackendConfig::from_env().context("loading backend configuration")?;
    let backend = HttpBackend::new(config);

    let params = cli.query_parameters();

    // Lock stdout once so the whole output is written in one go
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    finder::run(&params, cli.format, &backend, &mut out).await?;
    Ok(())
}

// Logs go to stderr; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
