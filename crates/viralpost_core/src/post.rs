//! The generated post record.

use crate::ImageOutcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Text fields of a post exactly as the model returned them.
///
/// This is the shape the text model is constrained to; it is validated before
/// a [`SocialPost`] is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct PostText {
    /// Curiosity-driven headline
    pub headline: String,
    /// Conversational body, line breaks preserved
    pub body: String,
    /// Closing call-to-action
    pub cta: String,
    /// Topical hashtags in model order
    pub hashtags: Vec<String>,
}

/// A formatted social-media post with its optional illustration.
///
/// Built once from a successful text generation, then finished with exactly one
/// [`ImageOutcome`]. At most one of `image_url` and `image_error` is present.
///
/// # Examples
///
/// ```
/// use viralpost_core::{ImageOutcome, PostText, SocialPost};
///
/// let post = SocialPost::from(PostText::new(
///     "H".to_string(),
///     "B".to_string(),
///     "C".to_string(),
///     vec!["#x".to_string(), "y".to_string()],
/// ))
/// .with_image(ImageOutcome::Missing);
///
/// assert_eq!(post.hashtags(), &vec!["x".to_string(), "y".to_string()]);
/// assert_eq!(post.clipboard_text(), "H\n\nB\n\nC\n\n#x #y");
/// assert!(post.image_url().is_none());
/// assert!(post.image_error().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    /// Curiosity-driven headline
    headline: String,
    /// Conversational body, line breaks preserved
    body: String,
    /// Closing call-to-action
    cta: String,
    /// Hashtag tokens without the leading `#`
    hashtags: Vec<String>,
    /// PNG `data:` URL of the illustration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    /// Why no illustration is attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_error: Option<String>,
}

impl SocialPost {
    /// Create a post without an image outcome.
    ///
    /// Hashtags are stored without leading `#` characters; blank tags are dropped.
    pub fn new(
        headline: impl Into<String>,
        body: impl Into<String>,
        cta: impl Into<String>,
        hashtags: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            headline: headline.into(),
            body: body.into(),
            cta: cta.into(),
            hashtags: hashtags
                .into_iter()
                .filter_map(|tag| normalize_hashtag(tag.as_ref()))
                .collect(),
            image_url: None,
            image_error: None,
        }
    }

    /// Attach the image step's outcome, finishing the post.
    ///
    /// An outcome may only be attached once.
    pub fn with_image(mut self, outcome: ImageOutcome) -> Self {
        debug_assert!(
            self.image_url.is_none() && self.image_error.is_none(),
            "image outcome attached twice"
        );
        match outcome {
            ImageOutcome::Image { data_url } => {
                self.image_url = Some(data_url);
                self.image_error = None;
            }
            other => {
                self.image_url = None;
                self.image_error = other.error_message();
            }
        }
        self
    }

    /// Whether an illustration is attached.
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    /// Hashtags rendered as `#tag1 #tag2 ...`.
    pub fn hashtag_line(&self) -> String {
        self.hashtags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Plain text for pasting into a social network.
    pub fn clipboard_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}",
            self.headline,
            self.body,
            self.cta,
            self.hashtag_line()
        )
    }
}

impl From<PostText> for SocialPost {
    fn from(text: PostText) -> Self {
        Self::new(text.headline, text.body, text.cta, text.hashtags)
    }
}

fn normalize_hashtag(tag: &str) -> Option<String> {
    let tag = tag.trim().trim_start_matches('#').trim();
    (!tag.is_empty()).then(|| tag.to_string())
}
