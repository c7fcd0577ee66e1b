// CLI module for gemcompare
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// gemcompare - Interactive Gemini image pair comparison CLI
#[derive(Parser, Debug)]
#[command(name = "gemcompare", version, about, long_about = None)]
pub struct Args {
    /// Path to an alternate config file
    #[arg(long, env = "GEMCOMPARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the Gemini model from config
    #[arg(long)]
    pub model: Option<String>,
}
