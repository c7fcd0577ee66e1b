//! Configuration data structures for the gemcompare CLI.
//!
//! This module defines the schema for the application settings, including
//! the Gemini API connection, the fixed analysis parameters, download
//! targets, and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Comparison prompt and decoding parameters.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Local download targets.
    #[serde(default)]
    pub download: DownloadConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the Gemini API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for the generative language API.
    /// Normally supplied via the `GEMCOMPARE_GEMINI_API_KEY` environment
    /// variable or the config file. Default: empty (rejected at startup).
    #[serde(default)]
    pub api_key: String,

    /// Base URL for the Gemini generative language API.
    /// Default: Google's public v1beta models endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// The Gemini model used for the comparison.
    /// Default: `gemini-1.5-flash`
    #[serde(default = "default_model")]
    pub model: String,
}

/// The comparison prompt and the fixed decoding-parameter bundle.
///
/// Modeled as named fields rather than inline literals so tests can
/// substitute both the parameters and the prompt text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sampling temperature. Default: `0.4`
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling threshold. Default: `0.99`
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Top-k sampling cutoff; `0` leaves sampling unconstrained.
    /// Default: `0`
    #[serde(default)]
    pub top_k: u32,

    /// Maximum tokens in the generated analysis. Default: `4096`
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// The comparison prompt sent alongside the two images.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Local filenames the two images are downloaded to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Target filename for the first image. Default: `image1.jpg`
    #[serde(default = "default_first_file")]
    pub first_file: String,

    /// Target filename for the second image. Default: `image2.jpg`
    #[serde(default = "default_second_file")]
    pub second_file: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default trait implementations linking to custom logic

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            model: default_model(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: 0,
            max_output_tokens: default_max_output_tokens(),
            prompt: default_prompt(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            first_file: default_first_file(),
            second_file: default_second_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.4
}

fn default_top_p() -> f32 {
    0.99
}

fn default_max_output_tokens() -> u32 {
    4096
}

fn default_prompt() -> String {
    "Compare these two images and provide a detailed analysis of their similarities and differences:\n\
     1. Describe the main elements in each image\n\
     2. Compare their color palettes and overall tone\n\
     3. Analyze the mood or emotional feeling of each image\n\
     4. Identify any common themes or visual elements\n\
     5. Suggest how these images might complement each other\n\
     \n\
     Please structure your response in clear sections."
        .to_string()
}

fn default_first_file() -> String {
    "image1.jpg".to_string()
}

fn default_second_file() -> String {
    "image2.jpg".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
