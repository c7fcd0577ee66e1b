// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use gemcompare::error::CompareError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        CompareError::InvalidUrl("notaurl".to_string()),
        CompareError::InvalidExtension("archive.bmp".to_string()),
        CompareError::InvalidImage("undetectable format".to_string()),
        CompareError::GeminiApi("API error".to_string()),
        CompareError::Config("missing key".to_string()),
        CompareError::Internal("client build failed".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_invalid_url_error() {
    let error = CompareError::InvalidUrl("notaurl".to_string());
    assert!(format!("{}", error).contains("notaurl"));
}

#[test]
fn test_invalid_extension_error() {
    let error = CompareError::InvalidExtension("archive.bmp".to_string());
    assert!(format!("{}", error).contains("archive.bmp"));
}

#[test]
fn test_gemini_api_error() {
    let error = CompareError::GeminiApi("Quota exceeded".to_string());
    assert!(format!("{}", error).contains("Quota exceeded"));
}

#[test]
fn test_config_error() {
    let error = CompareError::Config("API key is not configured".to_string());
    assert!(format!("{}", error).contains("not configured"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "image1.jpg is gone");
    let error: CompareError = io.into();
    assert!(format!("{}", error).contains("image1.jpg is gone"));
}
