//! Terminal presentation of generated posts.
//!
//! Reading input, rendering a post for humans, and writing the copy/download
//! artifacts the binary offers.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};
use viralpost_core::{SocialPost, SourceText, decode_png_data_url};
use viralpost_error::{
    IoError, JsonError, MediaError, ViralpostError, ViralpostErrorKind, ViralpostResult,
};

/// Width of the rule under the headline.
const RULE_WIDTH: usize = 60;

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Inline(String),
    /// A UTF-8 text file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Pick the source from command-line values; inline text beats a file.
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => InputSource::Inline(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Read and validate the source text.
    ///
    /// `stdin` is only consulted for [`InputSource::Stdin`].
    ///
    /// # Errors
    ///
    /// Fails if the file or stream cannot be read, or the text is blank.
    pub fn read(self, mut stdin: impl Read) -> ViralpostResult<SourceText> {
        let text = match self {
            InputSource::Inline(text) => text,
            InputSource::File(path) => std::fs::read_to_string(&path)
                .map_err(|e| IoError::at_path("read", &path, e))?,
            InputSource::Stdin => {
                let mut buffer = String::new();
                stdin
                    .read_to_string(&mut buffer)
                    .map_err(|e| IoError::new(format!("Failed to read stdin: {}", e)))?;
                buffer
            }
        };
        Ok(SourceText::new(text)?)
    }
}

/// What to say about the illustration in a rendered post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageNote<'a> {
    /// The image was written to this path
    Saved(&'a Path),
    /// An image exists but was not written anywhere
    NotSaved,
}

/// Render a post for the terminal.
///
/// Posts without an image show a fallback line carrying `image_error`.
///
/// # Examples
///
/// ```
/// use viralpost::presentation::{ImageNote, render_post};
/// use viralpost::{ImageOutcome, SocialPost};
///
/// let post = SocialPost::new("H", "B", "C", ["x", "y"]).with_image(ImageOutcome::Missing);
/// let text = render_post(&post, ImageNote::NotSaved);
///
/// assert!(text.starts_with("H\n"));
/// assert!(text.contains("[image unavailable] Image generation failed"));
/// assert!(text.ends_with("#x #y\n"));
/// ```
pub fn render_post(post: &SocialPost, note: ImageNote<'_>) -> String {
    let image_line = match (post.image_error(), note) {
        (Some(error), _) => format!("[image unavailable] {}", error),
        (None, ImageNote::Saved(path)) => format!("[image] saved to {}", path.display()),
        (None, ImageNote::NotSaved) if post.has_image() => {
            "[image] generated (use --image-out or --save-image to keep it)".to_string()
        }
        (None, ImageNote::NotSaved) => "[image unavailable]".to_string(),
    };

    let mut out = String::new();
    out.push_str(post.headline());
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&image_line);
    out.push_str("\n\n");
    out.push_str(post.body());
    out.push_str("\n\n");
    out.push_str("> ");
    out.push_str(post.cta());
    out.push_str("\n\n");
    out.push_str(&post.hashtag_line());
    out.push('\n');
    out
}

/// Pretty JSON for `--json`, using the post's camelCase record format.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn post_json(post: &SocialPost) -> ViralpostResult<String> {
    serde_json::to_string_pretty(post).map_err(|e| JsonError::serialize("post", e).into())
}

/// File name used when saving an image without an explicit path.
///
/// # Examples
///
/// ```
/// use viralpost::presentation::default_image_filename;
///
/// assert_eq!(default_image_filename(1700000000000), "viralpost-image-1700000000000.png");
/// ```
pub fn default_image_filename(unix_millis: i64) -> String {
    format!("viralpost-image-{}.png", unix_millis)
}

/// Decode the post's image and write it as a PNG file.
///
/// # Errors
///
/// Fails if the post has no image, the data URL is invalid, or the file
/// cannot be written.
#[instrument(skip(post), fields(path = %path.display()))]
pub fn save_image(post: &SocialPost, path: &Path) -> ViralpostResult<()> {
    let url = post
        .image_url()
        .as_deref()
        .ok_or_else(|| MediaError::new("post has no image to save"))?;
    let bytes = decode_png_data_url(url)?;
    debug!(bytes = bytes.len(), "Decoded image");

    std::fs::write(path, &bytes).map_err(|e| IoError::at_path("write", path, e))?;
    info!("Image saved");
    Ok(())
}

/// Write the paste-ready post text.
///
/// # Errors
///
/// Fails if the file cannot be written.
#[instrument(skip(post), fields(path = %path.display()))]
pub fn save_clipboard_text(post: &SocialPost, path: &Path) -> ViralpostResult<()> {
    std::fs::write(path, post.clipboard_text())
        .map_err(|e| IoError::at_path("write", path, e))?;
    info!("Post text saved");
    Ok(())
}

/// One-line message for a fatal error.
///
/// Generation failures show only their user-facing message; everything else
/// shows its full description.
pub fn error_banner(err: &ViralpostError) -> String {
    match err.kind() {
        ViralpostErrorKind::Generation(generation) => generation.message(),
        ViralpostErrorKind::Gemini(gemini) => gemini.kind.to_string(),
        other => other.to_string(),
    }
}
