// Image pair comparison via the Gemini API
// Author: kelexine (https://github.com/kelexine)

use crate::config::AnalysisConfig;
use crate::error::{CompareError, Result};
use crate::gemini::GeminiClient;
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
use crate::vision;
use std::path::Path;
use tracing::debug;

/// Build the multimodal `generateContent` request for an image pair.
///
/// A single user turn: both images first, then the comparison prompt.
pub fn build_request(
    config: &AnalysisConfig,
    image1: InlineData,
    image2: InlineData,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![
                Part::InlineData {
                    inline_data: image1,
                },
                Part::InlineData {
                    inline_data: image2,
                },
                Part::Text {
                    text: config.prompt.clone(),
                },
            ],
        }],
        generation_config: Some(GenerationConfig {
            max_output_tokens: Some(config.max_output_tokens),
            temperature: Some(config.temperature),
            top_p: Some(config.top_p),
            top_k: Some(config.top_k),
        }),
    }
}

/// Load both images from disk and submit them with the comparison prompt.
///
/// One blocking call, no streaming and no partial results; returns the
/// generated analysis text.
pub async fn analyze(
    client: &GeminiClient,
    config: &AnalysisConfig,
    path1: &Path,
    path2: &Path,
) -> Result<String> {
    let image1 = vision::load_image(path1)?;
    let image2 = vision::load_image(path2)?;
    debug!(
        "Submitting {} and {} to model {}",
        path1.display(),
        path2.display(),
        client.model()
    );

    let request = build_request(config, image1, image2);
    let response = client.generate_content(request).await?;

    response_text(&response)
}

/// Concatenate the text parts of the first candidate.
fn response_text(response: &GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| CompareError::GeminiApi("No candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(Part::as_text)
        .collect();

    if text.is_empty() {
        return Err(CompareError::GeminiApi(
            "Response contained no text".to_string(),
        ));
    }
    Ok(text)
}
