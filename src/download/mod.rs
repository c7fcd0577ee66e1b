// URL validation and streaming image download
// Author: kelexine (https://github.com/kelexine)

use crate::error::{CompareError, Result};
use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

/// Allowed image extensions (lowercase)
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// True iff `s` parses as an absolute URL with a host.
///
/// There is deliberately no scheme allow-list, so `ftp://` URLs pass too.
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// True iff the lowercased file extension is an allowed image extension.
pub fn validate_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Streaming GET to a local file, overwriting any existing file at that path.
///
/// A non-2xx status is an error; timeouts and redirects are left at reqwest
/// defaults.
pub async fn download(client: &Client, url: &str, filename: &str) -> Result<PathBuf> {
    let response = client.get(url).send().await?.error_for_status()?;

    let mut file = File::create(filename).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;

    debug!("Downloaded {} to {}", url, filename);
    Ok(PathBuf::from(filename))
}

/// Validate the URL and the target filename, then download.
///
/// Both validators run before any network call; URL validity is checked
/// first, extension validity second.
pub async fn download_and_validate(client: &Client, url: &str, filename: &str) -> Result<PathBuf> {
    if !is_valid_url(url) {
        return Err(CompareError::InvalidUrl(url.to_string()));
    }
    if !validate_file(filename) {
        return Err(CompareError::InvalidExtension(filename.to_string()));
    }

    download(client, url, filename).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com/a.png"));
        assert!(is_valid_url("http://example.com"));
        // No scheme allow-list
        assert!(is_valid_url("ftp://example.com/a.gif"));

        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("notaurl"));
        assert!(!is_valid_url("/relative/path/a.png"));
        assert!(!is_valid_url("example.com/a.png")); // no scheme
        assert!(!is_valid_url("mailto:user@example.com")); // no host
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_validate_file() {
        assert!(validate_file("image1.jpg"));
        assert!(validate_file("image.jpeg"));
        assert!(validate_file("pic.png"));
        assert!(validate_file("anim.gif"));
        assert!(validate_file("X.JPG"));
        assert!(validate_file("photo.PnG"));

        assert!(!validate_file("x.bmp"));
        assert!(!validate_file("x.webp"));
        assert!(!validate_file("noextension"));
        assert!(!validate_file("archive.jpg.tar"));
        assert!(!validate_file(""));
    }

    proptest! {
        #[test]
        fn validate_file_accepts_allowed_extensions_any_case(
            stem in "[A-Za-z0-9_-]{1,12}",
            ext_idx in 0usize..4,
            flips in prop::collection::vec(any::<bool>(), 4),
        ) {
            let ext: String = ALLOWED_EXTENSIONS[ext_idx]
                .chars()
                .zip(flips.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            let candidate = format!("{}.{}", stem, ext);
            prop_assert!(validate_file(&candidate));
        }

        #[test]
        fn validate_file_rejects_unknown_extensions(
            stem in "[A-Za-z0-9_-]{1,12}",
            ext in "[a-z]{1,5}",
        ) {
            prop_assume!(!ALLOWED_EXTENSIONS.contains(&ext.as_str()));
            let candidate = format!("{}.{}", stem, ext);
            prop_assert!(!validate_file(&candidate));
        }
    }
}
