// Comparator end-to-end tests against a local mock server
// Author: kelexine (https://github.com/kelexine)

use base64::Engine;
use gemcompare::compare;
use gemcompare::config::{AnalysisConfig, GeminiConfig};
use gemcompare::error::CompareError;
use gemcompare::gemini::GeminiClient;
use std::path::PathBuf;

// Tiny valid 1x1 PNG
const PNG_1X1_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

fn write_png(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(PNG_1X1_B64)
        .unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn gemini_client(base_url: String) -> GeminiClient {
    GeminiClient::new(&GeminiConfig {
        api_key: "test-key".to_string(),
        api_base_url: base_url,
        model: "gemini-1.5-flash".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_analyze_submits_both_images_and_returns_text() {
    let mut server = mockito::Server::new_async().await;
    let response_body = serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": "These images share a palette."}]
            },
            "finishReason": "STOP"
        }]
    });
    // One user turn: two inlineData parts followed by the prompt text.
    let mock = server
        .mock("POST", "/gemini-1.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(mockito::Matcher::Regex(
            "inlineData.*inlineData.*Compare these two images".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response_body.to_string())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first = write_png(&dir, "image1.jpg");
    let second = write_png(&dir, "image2.jpg");

    let client = gemini_client(server.url());
    let text = compare::analyze(&client, &AnalysisConfig::default(), &first, &second)
        .await
        .unwrap();

    assert_eq!(text, "These images share a palette.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_missing_file_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first = write_png(&dir, "image1.jpg");
    let missing = dir.path().join("image2.jpg");

    let client = gemini_client(server.url());
    let result = compare::analyze(&client, &AnalysisConfig::default(), &first, &missing).await;

    assert!(matches!(result, Err(CompareError::Io(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_rejects_empty_candidates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/gemini-1.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first = write_png(&dir, "image1.jpg");
    let second = write_png(&dir, "image2.jpg");

    let client = gemini_client(server.url());
    let result = compare::analyze(&client, &AnalysisConfig::default(), &first, &second).await;

    assert!(matches!(result, Err(CompareError::GeminiApi(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_uses_substituted_prompt() {
    let mut server = mockito::Server::new_async().await;
    let response_body = serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "ok"}]}
        }]
    });
    let mock = server
        .mock("POST", "/gemini-1.5-flash:generateContent")
        .match_body(mockito::Matcher::Regex(
            "Summarize the two pictures".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response_body.to_string())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first = write_png(&dir, "image1.jpg");
    let second = write_png(&dir, "image2.jpg");

    let analysis = AnalysisConfig {
        prompt: "Summarize the two pictures".to_string(),
        ..AnalysisConfig::default()
    };

    let client = gemini_client(server.url());
    let text = compare::analyze(&client, &analysis, &first, &second)
        .await
        .unwrap();

    assert_eq!(text, "ok");
    mock.assert_async().await;
}
