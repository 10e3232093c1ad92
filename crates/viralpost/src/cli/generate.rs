//! Post generation command handler.

use std::io::Write;
use std::path::{Path, PathBuf};

use viralpost::presentation::{
    ImageNote, InputSource, default_image_filename, post_json, render_post, save_clipboard_text,
    save_image,
};
use viralpost::{GeminiClient, GenerationStatus, PostGenerator, ViralpostResult};

use super::commands::GenerateArgs;
use super::config::load_config;

/// Overwrite the current stderr line with the latest status.
fn print_status(status: GenerationStatus) {
    let mut stderr = std::io::stderr().lock();
    let _ = write!(stderr, "\r\x1b[2K{}", status);
    let _ = stderr.flush();
}

/// Clear the status line once the wait is over.
fn clear_status() {
    let mut stderr = std::io::stderr().lock();
    let _ = write!(stderr, "\r\x1b[2K");
    let _ = stderr.flush();
}

/// Generate a post and present it.
pub async fn run_generate(args: GenerateArgs, config_path: Option<&Path>) -> ViralpostResult<()> {
    let GenerateArgs {
        text,
        file,
        image_out,
        save_image: save_default,
        copy_out,
        json,
    } = args;

    // Blank input is rejected before any request is made
    let source = InputSource::from_args(text, file).read(std::io::stdin())?;
    tracing::info!(chars = source.char_count(), "Source text read");

    let config = load_config(config_path)?;
    let client = GeminiClient::from_config(&config.gemini)?;
    let generator = PostGenerator::new(client, config.post);

    print_status(GenerationStatus::Preparing);
    let result = generator.generate(&source, Some(&print_status)).await;
    clear_status();
    let post = result?;

    let image_path: Option<PathBuf> = match image_out {
        Some(path) => Some(path),
        None if save_default => Some(PathBuf::from(default_image_filename(
            chrono::Utc::now().timestamp_millis(),
        ))),
        None => None,
    };

    let mut note = ImageNote::NotSaved;
    if let Some(path) = image_path.as_deref() {
        if post.has_image() {
            save_image(&post, path)?;
            note = ImageNote::Saved(path);
        } else {
            tracing::warn!(path = %path.display(), "No image to save");
        }
    }

    if let Some(path) = copy_out.as_deref() {
        save_clipboard_text(&post, path)?;
    }

    if json {
        println!("{}", post_json(&post)?);
    } else {
        print!("{}", render_post(&post, note));
    }

    Ok(())
}
