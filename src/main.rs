// gemcompare - Interactive Gemini image pair comparison CLI
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use gemcompare::cli::Args;
use gemcompare::config::AppConfig;
use gemcompare::driver;
use gemcompare::gemini::GeminiClient;
use gemcompare::utils::logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Everything else runs under the single top-level handler: errors are
    // printed, never re-raised, and the process exits normally either way.
    if let Err(e) = run(args).await {
        println!("Error: {}", e);
    }

    Ok(())
}

async fn run(args: Args) -> gemcompare::error::Result<()> {
    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.gemini.model = model;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gemcompare v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Configure the Gemini session
    println!("Setting up API...");
    let gemini = GeminiClient::new(&config.gemini)?;
    info!("Gemini client ready for model {}", gemini.model());

    // Phase 4: Run the interactive comparison session
    driver::run(&config, &gemini).await
}
