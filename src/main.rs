use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use stopcheck::config::Config;
use stopcheck::document::read_client_file;
use stopcheck::engine::RuleEngine;
use stopcheck::observability::init_tracing;
use stopcheck::report::render;

/// Exit status when the client file could not be read.
const EXIT_UNREADABLE: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    // Parse configuration
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        path = %config.client_path.display(),
        "Starting stopcheck"
    );

    let text = match read_client_file(&config.client_path) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Client file unavailable");
            println!("{e}");
            return Ok(ExitCode::from(EXIT_UNREADABLE));
        }
    };
    info!(bytes = text.len(), "Client file read");

    let engine = RuleEngine::new();
    let verdict = engine.evaluate_document(&text, config.evaluation_date());

    println!("{}", render(&verdict, config.format)?);

    if config.print_metrics {
        print!("{}", engine.metrics().to_prometheus());
    }

    Ok(if verdict.is_approved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
