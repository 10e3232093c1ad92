//! Tests for the files the binary writes.

use tempfile::TempDir;
use viralpost::presentation::{InputSource, error_banner, save_clipboard_text, save_image};
use viralpost::{ImageOutcome, SocialPost};

fn post_with_image(data: &str) -> SocialPost {
    SocialPost::new("H", "B", "C", ["x", "y"]).with_image(ImageOutcome::Image {
        data_url: format!("data:image/png;base64,{}", data),
    })
}

#[test]
fn saved_image_holds_decoded_bytes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("out.png");

    // "iVBORw==" is the PNG magic prefix 0x89 'P' 'N' 'G'
    save_image(&post_with_image("iVBORw=="), &path)?;

    assert_eq!(std::fs::read(&path)?, vec![0x89, b'P', b'N', b'G']);
    Ok(())
}

#[test]
fn saving_without_image_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let post = SocialPost::new("H", "B", "C", ["x"]).with_image(ImageOutcome::Missing);

    let err = save_image(&post, &dir.path().join("out.png")).unwrap_err();

    assert!(error_banner(&err).contains("no image"));
    assert!(!dir.path().join("out.png").exists());
    Ok(())
}

#[test]
fn invalid_base64_is_reported() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let err = save_image(&post_with_image("not base64!"), &dir.path().join("out.png")).unwrap_err();
    assert!(error_banner(&err).contains("base64"));
    Ok(())
}

#[test]
fn clipboard_file_matches_paste_format() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("post.txt");

    save_clipboard_text(&post_with_image("AAAA"), &path)?;

    assert_eq!(std::fs::read_to_string(&path)?, "H\n\nB\n\nC\n\n#x #y");
    Ok(())
}

#[test]
fn source_text_is_read_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "coffee shop opening\n")?;

    let source = InputSource::File(path).read(std::io::empty())?;

    assert_eq!(source.as_str(), "coffee shop opening\n");
    Ok(())
}

#[test]
fn missing_input_file_names_the_path() {
    let err = InputSource::File("/definitely/not/here.txt".into())
        .read(std::io::empty())
        .unwrap_err();
    assert!(error_banner(&err).contains("/definitely/not/here.txt"));
}
