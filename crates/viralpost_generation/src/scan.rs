//! Ordered scan of an image reply.

use tracing::{debug, warn};
use viralpost_core::{ImageOutcome, png_data_url};
use viralpost_interface::ResponsePart;

/// Decide the image outcome from reply parts, in order.
///
/// The first non-empty inline-data part wins and ends the scan. Text parts
/// seen before any image are kept as a refusal, each replacing the one
/// before, truncated to `max_chars` characters; a later image still
/// overrides it. With neither, the outcome is [`ImageOutcome::Missing`].
///
/// # Examples
///
/// ```
/// use viralpost_core::{ImageOutcome, MediaSource};
/// use viralpost_generation::scan_image_parts;
/// use viralpost_interface::ResponsePart;
///
/// let parts = vec![ResponsePart::InlineData {
///     mime_type: Some("image/png".to_string()),
///     data: MediaSource::Base64("AAAA".to_string()),
/// }];
/// assert_eq!(
///     scan_image_parts(&parts, 100).image_url(),
///     Some("data:image/png;base64,AAAA")
/// );
/// assert_eq!(scan_image_parts(&[], 100), ImageOutcome::Missing);
/// ```
pub fn scan_image_parts(parts: &[ResponsePart], max_chars: usize) -> ImageOutcome {
    let mut refusal: Option<&str> = None;

    for part in parts {
        match part {
            ResponsePart::InlineData { data, .. } if data.is_empty() => {
                debug!("Skipping empty inline data part");
            }
            ResponsePart::InlineData { mime_type, data } => {
                debug!(mime_type = ?mime_type, "Image part found");
                return ImageOutcome::Image {
                    data_url: png_data_url(data),
                };
            }
            ResponsePart::Text(text) => {
                warn!(text = %text, "Image model returned text instead of an image");
                refusal = Some(text.as_str());
            }
        }
    }

    match refusal {
        Some(text) => ImageOutcome::refused(text, max_chars),
        None => ImageOutcome::Missing,
    }
}
