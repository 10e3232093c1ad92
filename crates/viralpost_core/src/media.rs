//! Image payload types and `data:` URL helpers.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use viralpost_error::MediaError;

/// Prefix of every image URL attached to a post.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Where image content came from.
///
/// The Gemini REST API delivers inline data already base64-encoded; other
/// drivers may hand over raw bytes.
///
/// # Examples
///
/// ```
/// use viralpost_core::MediaSource;
///
/// let base64 = MediaSource::Base64("iVBORw0KGgo=".to_string());
/// let binary = MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(base64.to_base64(), "iVBORw0KGgo=");
/// assert_eq!(binary.to_base64(), "iVBORw==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content, passed through untouched
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

impl MediaSource {
    /// Base64 text for this payload.
    pub fn to_base64(&self) -> String {
        match self {
            MediaSource::Base64(data) => data.clone(),
            MediaSource::Binary(bytes) => STANDARD.encode(bytes),
        }
    }

    /// Whether the payload carries no data at all.
    pub fn is_empty(&self) -> bool {
        match self {
            MediaSource::Base64(data) => data.is_empty(),
            MediaSource::Binary(bytes) => bytes.is_empty(),
        }
    }
}

/// Wrap an image payload as a self-contained PNG `data:` URL.
///
/// # Examples
///
/// ```
/// use viralpost_core::{MediaSource, png_data_url};
///
/// let url = png_data_url(&MediaSource::Base64("AAAA".to_string()));
/// assert_eq!(url, "data:image/png;base64,AAAA");
/// ```
pub fn png_data_url(source: &MediaSource) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, source.to_base64())
}

/// Decode a PNG `data:` URL back into image bytes for saving to disk.
///
/// # Errors
///
/// Fails if the URL does not carry the PNG base64 prefix or the payload is not
/// valid base64.
pub fn decode_png_data_url(url: &str) -> Result<Vec<u8>, MediaError> {
    let payload = url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or_else(|| MediaError::new("image URL is not a PNG base64 data URL"))?;
    STANDARD
        .decode(payload.trim())
        .map_err(|e| MediaError::new(format!("invalid base64 image payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_source_passes_through() {
        let url = png_data_url(&MediaSource::Base64("AAAA".to_string()));
        assert_eq!(url, "data:image/png;base64,AAAA");
    }

    #[test]
    fn binary_source_is_encoded() {
        let url = png_data_url(&MediaSource::Binary(b"png".to_vec()));
        assert_eq!(url, "data:image/png;base64,cG5n");
    }

    #[test]
    fn decode_reverses_binary_encoding() {
        let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
        let url = png_data_url(&MediaSource::Binary(bytes.clone()));
        assert_eq!(decode_png_data_url(&url).unwrap(), bytes);
    }

    #[test]
    fn decode_rejects_other_schemes() {
        assert!(decode_png_data_url("https://example.com/a.png").is_err());
        assert!(decode_png_data_url("data:image/jpeg;base64,AAAA").is_err());
    }

    #[test]
    fn decode_rejects_bad_payload() {
        assert!(decode_png_data_url("data:image/png;base64,***").is_err());
    }
}
