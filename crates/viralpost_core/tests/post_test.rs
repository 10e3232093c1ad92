use viralpost_core::{
    GenerationStatus, IMAGE_MISSING_MESSAGE, ImageOutcome, PostText, SocialPost, SourceText,
};
use viralpost_error::GenerationErrorKind;

fn sample_post() -> SocialPost {
    SocialPost::new(
        "Nobody expected this coffee shop",
        "Line one ☕\n\nLine two 🎉",
        "Tag a friend who needs coffee!",
        ["coffee", "#grandopening", "  #taipei "],
    )
}

#[test]
fn hashtags_drop_leading_hash_and_keep_order() {
    let post = sample_post();
    assert_eq!(
        post.hashtags(),
        &vec![
            "coffee".to_string(),
            "grandopening".to_string(),
            "taipei".to_string()
        ]
    );
}

#[test]
fn blank_hashtags_are_dropped() {
    let post = SocialPost::new("H", "B", "C", ["#", "  ", "ok"]);
    assert_eq!(post.hashtags(), &vec!["ok".to_string()]);
}

#[test]
fn body_line_breaks_are_preserved() {
    let post = sample_post();
    assert_eq!(post.body(), "Line one ☕\n\nLine two 🎉");
}

#[test]
fn clipboard_text_joins_sections() {
    let post = sample_post();
    assert_eq!(
        post.clipboard_text(),
        "Nobody expected this coffee shop\n\nLine one ☕\n\nLine two 🎉\n\nTag a friend who needs coffee!\n\n#coffee #grandopening #taipei"
    );
}

#[test]
fn clipboard_text_without_hashtags_ends_blank() {
    let post = SocialPost::new("H", "B", "C", Vec::<String>::new());
    assert_eq!(post.clipboard_text(), "H\n\nB\n\nC\n\n");
}

#[test]
fn image_outcome_sets_url_only() {
    let post = sample_post().with_image(ImageOutcome::Image {
        data_url: "data:image/png;base64,AAAA".to_string(),
    });
    assert_eq!(post.image_url().as_deref(), Some("data:image/png;base64,AAAA"));
    assert!(post.image_error().is_none());
    assert!(post.has_image());
}

#[test]
fn missing_outcome_sets_error_only() {
    let post = sample_post().with_image(ImageOutcome::Missing);
    assert!(post.image_url().is_none());
    assert_eq!(post.image_error().as_deref(), Some(IMAGE_MISSING_MESSAGE));
}

#[test]
fn serializes_with_camel_case_and_omits_absent_image() -> anyhow::Result<()> {
    let post = sample_post().with_image(ImageOutcome::failed("timeout"));
    let value = serde_json::to_value(&post)?;
    assert!(value.get("imageError").is_some());
    assert!(value.get("imageUrl").is_none());
    assert_eq!(value["hashtags"][0], "coffee");
    Ok(())
}

#[test]
fn post_text_deserializes_model_reply() -> anyhow::Result<()> {
    let text: PostText = serde_json::from_str(
        r#"{"headline":"H","body":"B","cta":"C","hashtags":["x","y"]}"#,
    )?;
    let post = SocialPost::from(text);
    assert_eq!(post.headline(), "H");
    assert_eq!(post.hashtags().len(), 2);
    Ok(())
}

#[test]
fn source_text_rejects_blank_input() {
    let err = SourceText::new(" \t\n").unwrap_err();
    assert_eq!(err.kind(), &GenerationErrorKind::EmptyInput);
}

#[test]
fn source_text_keeps_surrounding_whitespace() {
    let text = SourceText::try_from("  coffee shop opening\n").unwrap();
    assert_eq!(text.as_str(), "  coffee shop opening\n");
    assert_eq!(text.char_count(), 22);
}

#[test]
fn statuses_are_ordered_by_phase() {
    assert!(GenerationStatus::Preparing < GenerationStatus::ComposingText);
    assert!(GenerationStatus::ComposingText < GenerationStatus::DrawingImage);
}
