// Interactive driver loop
// Author: kelexine (https://github.com/kelexine)

use crate::compare;
use crate::config::AppConfig;
use crate::download;
use crate::error::{CompareError, Result};
use crate::gemini::GeminiClient;
use crate::utils::logging;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Read one trimmed line from stdin, printing `prompt` first.
///
/// Returns `None` on EOF, which callers treat like the quit sentinel.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until one URL validates and downloads, or the user quits.
///
/// Retries are unbounded: every failed attempt prints the error and
/// re-prompts in place.
async fn acquire_image(
    client: &reqwest::Client,
    prompt: &str,
    filename: &str,
) -> Result<Option<PathBuf>> {
    loop {
        let input = match prompt_line(prompt)? {
            Some(input) => input,
            None => return Ok(None),
        };
        if input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        match download::download_and_validate(client, &input, filename).await {
            Ok(path) => return Ok(Some(path)),
            Err(e) => {
                debug!("Rejected input {}: {}", logging::sanitize(&input), e);
                println!("Error: {}", e);
            }
        }
    }
}

/// Run one full comparison session: two downloads, one analysis, cleanup.
///
/// Quitting at either prompt returns early with no cleanup of files
/// downloaded so far; the success path removes both files unconditionally.
pub async fn run(config: &AppConfig, gemini: &GeminiClient) -> Result<()> {
    let http = reqwest::Client::builder()
        .use_rustls_tls()
        .build()
        .map_err(|e| CompareError::Internal(format!("Failed to create HTTP client: {}", e)))?;

    let first = match acquire_image(
        &http,
        "Enter the first image URL (or 'quit' to exit): ",
        &config.download.first_file,
    )
    .await?
    {
        Some(path) => path,
        None => return Ok(()),
    };
    println!("First image saved as: {}", first.display());

    let second = match acquire_image(
        &http,
        "Enter the second image URL (or 'quit' to exit): ",
        &config.download.second_file,
    )
    .await?
    {
        Some(path) => path,
        None => return Ok(()),
    };
    println!("Second image saved as: {}", second.display());

    println!("\nAnalyzing image similarities...");
    let analysis = compare::analyze(gemini, &config.analysis, &first, &second).await?;
    println!("\nImage Analysis:");
    println!("{}", analysis);

    std::fs::remove_file(&first)?;
    std::fs::remove_file(&second)?;
    debug!("Removed temporary image files");

    Ok(())
}
